//! Mock implementations of port traits
//!
//! In-memory repositories that mimic the document store's contract: identity
//! assignment on first save, upsert by identity, idempotent delete, and
//! unordered enumeration.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use futures::{stream, StreamExt};

use crate::domain::entities::{Family, FamilyMember, Parent, Student};
use crate::domain::ports::{
    EntityStream, FamilyMemberRepository, FamilyRepository, ParentRepository, StudentRepository,
};
use crate::error::DomainError;

/// Hands out identities shaped like the store's (24 hex chars).
#[derive(Default)]
struct IdentitySequence(AtomicU64);

impl IdentitySequence {
    fn next(&self) -> String {
        format!("{:024x}", self.0.fetch_add(1, Ordering::Relaxed) + 1)
    }
}

// ============================================================================
// In-Memory Parent Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryParentRepository {
    parents: Arc<RwLock<HashMap<String, Parent>>>,
    identities: Arc<IdentitySequence>,
}

impl InMemoryParentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a parent for testing (identity must be set)
    pub fn with_parent(self, parent: Parent) -> Self {
        let id = parent.parent_id.clone().expect("fixture parent needs an identity");
        self.parents.write().unwrap().insert(id, parent);
        self
    }
}

#[async_trait]
impl ParentRepository for InMemoryParentRepository {
    async fn save(&self, mut parent: Parent) -> Result<Parent, DomainError> {
        let id = match parent.parent_id.clone() {
            Some(id) if !id.is_empty() => id,
            _ => {
                let id = self.identities.next();
                parent.parent_id = Some(id.clone());
                id
            }
        };
        self.parents.write().unwrap().insert(id, parent.clone());
        Ok(parent)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Parent>, DomainError> {
        Ok(self.parents.read().unwrap().get(id).cloned())
    }

    async fn find_all(&self) -> Result<EntityStream<Parent>, DomainError> {
        let parents: Vec<Parent> = self.parents.read().unwrap().values().cloned().collect();
        Ok(stream::iter(parents.into_iter().map(Ok)).boxed())
    }

    async fn delete(&self, parent: &Parent) -> Result<(), DomainError> {
        if let Some(id) = parent.parent_id.as_deref() {
            self.parents.write().unwrap().remove(id);
        }
        Ok(())
    }
}

/// A parent repository whose every operation fails at the store layer
pub struct FailingParentRepository;

#[async_trait]
impl ParentRepository for FailingParentRepository {
    async fn save(&self, _parent: Parent) -> Result<Parent, DomainError> {
        Err(DomainError::Database("connection reset".to_string()))
    }

    async fn find_by_id(&self, _id: &str) -> Result<Option<Parent>, DomainError> {
        Err(DomainError::Database("connection reset".to_string()))
    }

    async fn find_all(&self) -> Result<EntityStream<Parent>, DomainError> {
        Err(DomainError::Database("connection reset".to_string()))
    }

    async fn delete(&self, _parent: &Parent) -> Result<(), DomainError> {
        Err(DomainError::Database("connection reset".to_string()))
    }
}

// ============================================================================
// In-Memory Student Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryStudentRepository {
    students: Arc<RwLock<HashMap<String, Student>>>,
    identities: Arc<IdentitySequence>,
}

impl InMemoryStudentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    async fn save(&self, mut student: Student) -> Result<Student, DomainError> {
        let id = match student.student_id.clone() {
            Some(id) if !id.is_empty() => id,
            _ => {
                let id = self.identities.next();
                student.student_id = Some(id.clone());
                id
            }
        };
        self.students.write().unwrap().insert(id, student.clone());
        Ok(student)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Student>, DomainError> {
        Ok(self.students.read().unwrap().get(id).cloned())
    }

    async fn find_all(&self) -> Result<EntityStream<Student>, DomainError> {
        let students: Vec<Student> = self.students.read().unwrap().values().cloned().collect();
        Ok(stream::iter(students.into_iter().map(Ok)).boxed())
    }

    async fn delete(&self, student: &Student) -> Result<(), DomainError> {
        if let Some(id) = student.student_id.as_deref() {
            self.students.write().unwrap().remove(id);
        }
        Ok(())
    }
}

// ============================================================================
// In-Memory Family Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryFamilyRepository {
    families: Arc<RwLock<HashMap<String, Family>>>,
    identities: Arc<IdentitySequence>,
}

impl InMemoryFamilyRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a family for testing (identity must be set)
    pub fn with_family(self, family: Family) -> Self {
        let id = family.family_id.clone().expect("fixture family needs an identity");
        self.families.write().unwrap().insert(id, family);
        self
    }
}

#[async_trait]
impl FamilyRepository for InMemoryFamilyRepository {
    async fn save(&self, mut family: Family) -> Result<Family, DomainError> {
        let id = match family.family_id.clone() {
            Some(id) if !id.is_empty() => id,
            _ => {
                let id = self.identities.next();
                family.family_id = Some(id.clone());
                id
            }
        };
        self.families.write().unwrap().insert(id, family.clone());
        Ok(family)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Family>, DomainError> {
        Ok(self.families.read().unwrap().get(id).cloned())
    }

    async fn find_all(&self) -> Result<EntityStream<Family>, DomainError> {
        let families: Vec<Family> = self.families.read().unwrap().values().cloned().collect();
        Ok(stream::iter(families.into_iter().map(Ok)).boxed())
    }

    async fn delete(&self, family: &Family) -> Result<(), DomainError> {
        if let Some(id) = family.family_id.as_deref() {
            self.families.write().unwrap().remove(id);
        }
        Ok(())
    }
}

// ============================================================================
// In-Memory FamilyMember Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryFamilyMemberRepository {
    members: Arc<RwLock<HashMap<String, FamilyMember>>>,
    identities: Arc<IdentitySequence>,
}

impl InMemoryFamilyMemberRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FamilyMemberRepository for InMemoryFamilyMemberRepository {
    async fn save(&self, mut member: FamilyMember) -> Result<FamilyMember, DomainError> {
        let id = match member.family_member_id.clone() {
            Some(id) if !id.is_empty() => id,
            _ => {
                let id = self.identities.next();
                member.family_member_id = Some(id.clone());
                id
            }
        };
        self.members.write().unwrap().insert(id, member.clone());
        Ok(member)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<FamilyMember>, DomainError> {
        Ok(self.members.read().unwrap().get(id).cloned())
    }

    async fn find_all(&self) -> Result<EntityStream<FamilyMember>, DomainError> {
        let members: Vec<FamilyMember> = self.members.read().unwrap().values().cloned().collect();
        Ok(stream::iter(members.into_iter().map(Ok)).boxed())
    }

    async fn delete(&self, member: &FamilyMember) -> Result<(), DomainError> {
        if let Some(id) = member.family_member_id.as_deref() {
            self.members.write().unwrap().remove(id);
        }
        Ok(())
    }
}
