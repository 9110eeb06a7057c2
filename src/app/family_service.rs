//! Family service
//!
//! CRUD orchestration for Family records. A family must name a stored Parent
//! as its head, so create and update verify that reference against the
//! parent store before persisting. Deletes perform no referential sweep:
//! removing a parent referenced by a family leaves the embedded copy behind.

use std::sync::Arc;

use crate::domain::entities::Family;
use crate::domain::ports::{EntityStream, FamilyRepository, ParentRepository};
use crate::error::{AppError, DomainError};

/// Service for managing families
pub struct FamilyService<FR, PR>
where
    FR: FamilyRepository,
    PR: ParentRepository,
{
    families: Arc<FR>,
    parents: Arc<PR>,
}

impl<FR, PR> FamilyService<FR, PR>
where
    FR: FamilyRepository,
    PR: ParentRepository,
{
    pub fn new(families: Arc<FR>, parents: Arc<PR>) -> Self {
        Self { families, parents }
    }

    pub async fn create(&self, family: Family) -> Result<Family, AppError> {
        self.verify_head_of_family(&family).await?;
        Ok(self.families.save(family).await?)
    }

    pub async fn find_all(&self) -> Result<EntityStream<Family>, AppError> {
        Ok(self.families.find_all().await?)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Family>, AppError> {
        Ok(self.families.find_by_id(id).await?)
    }

    /// Whitelist field-merge; the identity of `previous` is retained and the
    /// merged head-of-family reference is re-verified before saving.
    pub async fn update(&self, mut previous: Family, incoming: Family) -> Result<Family, AppError> {
        previous.head_of_family = incoming.head_of_family;
        previous.family_name = incoming.family_name;
        self.verify_head_of_family(&previous).await?;
        Ok(self.families.save(previous).await?)
    }

    pub async fn delete(&self, family: Family) -> Result<(), AppError> {
        self.families.delete(&family).await?;
        Ok(())
    }

    /// The head of family must carry the identity of a stored parent.
    async fn verify_head_of_family(&self, family: &Family) -> Result<(), AppError> {
        let head_id = family
            .head_of_family
            .parent_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| {
                AppError::Domain(DomainError::Validation(
                    "head of family must reference a stored parent".to_string(),
                ))
            })?;

        if self.parents.find_by_id(head_id).await?.is_none() {
            return Err(AppError::Domain(DomainError::Validation(format!(
                "head of family parent {} does not exist",
                head_id
            ))));
        }

        Ok(())
    }
}
