//! MongoDB adapters
//!
//! Concrete repository implementations backed by one collection per entity
//! kind, plus the document models they persist.

pub mod documents;
pub mod family_member_repo;
pub mod family_repo;
pub mod parent_repo;
pub mod student_repo;

pub use family_member_repo::MongoFamilyMemberRepository;
pub use family_repo::MongoFamilyRepository;
pub use parent_repo::MongoParentRepository;
pub use student_repo::MongoStudentRepository;
