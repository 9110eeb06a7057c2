//! Parent service
//!
//! CRUD orchestration for Parent records.

use std::sync::Arc;

use crate::domain::entities::Parent;
use crate::domain::ports::{EntityStream, ParentRepository};
use crate::error::AppError;

/// Service for managing parents
pub struct ParentService<PR>
where
    PR: ParentRepository,
{
    parents: Arc<PR>,
}

impl<PR> ParentService<PR>
where
    PR: ParentRepository,
{
    pub fn new(parents: Arc<PR>) -> Self {
        Self { parents }
    }

    /// Persist a new parent; the store assigns the identity.
    ///
    /// Logically-equivalent resubmissions are not detected and create a
    /// second record with a new identity.
    pub async fn create(&self, parent: Parent) -> Result<Parent, AppError> {
        Ok(self.parents.save(parent).await?)
    }

    /// Stream every stored parent in store-native order.
    pub async fn find_all(&self) -> Result<EntityStream<Parent>, AppError> {
        Ok(self.parents.find_all().await?)
    }

    /// Find a parent by identity; `None` means not found, not failure.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Parent>, AppError> {
        Ok(self.parents.find_by_id(id).await?)
    }

    /// Merge every mutable attribute of `incoming` onto `previous` and
    /// persist the result, keeping the identity of `previous`.
    ///
    /// The copy is an explicit whitelist so the identity (and any future
    /// store-assigned field) can never be clobbered by a caller.
    pub async fn update(&self, mut previous: Parent, incoming: Parent) -> Result<Parent, AppError> {
        previous.gender = incoming.gender;
        previous.first_name = incoming.first_name;
        previous.middle_name = incoming.middle_name;
        previous.last_name = incoming.last_name;
        previous.other_parent_details = incoming.other_parent_details;
        Ok(self.parents.save(previous).await?)
    }

    /// Delete a parent by its current identity; deleting an identity the
    /// store no longer holds is a no-op.
    pub async fn delete(&self, parent: Parent) -> Result<(), AppError> {
        self.parents.delete(&parent).await?;
        Ok(())
    }
}
