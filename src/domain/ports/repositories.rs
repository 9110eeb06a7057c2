//! Repository port traits
//!
//! These traits define the store-adapter boundary each service depends on.
//! Implementations are provided by adapters (e.g., MongoDB). Identity is an
//! opaque string assigned by the store on first save.
//!
//! `find_all` hands back a finite stream consumed once; records arrive in
//! store-native order with no ordering guarantee.

use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::domain::entities::{Family, FamilyMember, Parent, Student};
use crate::error::DomainError;

/// A finite, consume-once stream of records from the store
pub type EntityStream<T> = BoxStream<'static, Result<T, DomainError>>;

/// Repository for Parent entities
#[async_trait]
pub trait ParentRepository: Send + Sync {
    /// Persist a parent; assigns an identity when none is present, otherwise
    /// replaces the stored record with the same identity (upsert)
    async fn save(&self, parent: Parent) -> Result<Parent, DomainError>;

    /// Find a parent by identity; `None` is a normal outcome
    async fn find_by_id(&self, id: &str) -> Result<Option<Parent>, DomainError>;

    /// Stream every stored parent
    async fn find_all(&self) -> Result<EntityStream<Parent>, DomainError>;

    /// Delete by the entity's identity; a no-op when the identity is absent
    /// from the store
    async fn delete(&self, parent: &Parent) -> Result<(), DomainError>;
}

/// Repository for Student entities
#[async_trait]
pub trait StudentRepository: Send + Sync {
    async fn save(&self, student: Student) -> Result<Student, DomainError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Student>, DomainError>;

    async fn find_all(&self) -> Result<EntityStream<Student>, DomainError>;

    async fn delete(&self, student: &Student) -> Result<(), DomainError>;
}

/// Repository for Family entities
#[async_trait]
pub trait FamilyRepository: Send + Sync {
    async fn save(&self, family: Family) -> Result<Family, DomainError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Family>, DomainError>;

    async fn find_all(&self) -> Result<EntityStream<Family>, DomainError>;

    async fn delete(&self, family: &Family) -> Result<(), DomainError>;
}

/// Repository for FamilyMember entities
#[async_trait]
pub trait FamilyMemberRepository: Send + Sync {
    async fn save(&self, member: FamilyMember) -> Result<FamilyMember, DomainError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<FamilyMember>, DomainError>;

    async fn find_all(&self) -> Result<EntityStream<FamilyMember>, DomainError>;

    async fn delete(&self, member: &FamilyMember) -> Result<(), DomainError>;
}
