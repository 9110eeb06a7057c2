//! Application layer
//!
//! Contains use cases and service orchestration. Services coordinate between
//! domain entities and the repository ports, own the field-merge update
//! policy, and hold no cross-request state.

pub mod family_member_service;
pub mod family_service;
pub mod parent_service;
pub mod student_service;

pub use family_member_service::FamilyMemberService;
pub use family_service::FamilyService;
pub use parent_service::ParentService;
pub use student_service::StudentService;
