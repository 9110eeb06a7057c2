//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod mongo;

pub use mongo::{
    MongoFamilyMemberRepository, MongoFamilyRepository, MongoParentRepository,
    MongoStudentRepository,
};
