//! FamilyMember service
//!
//! CRUD orchestration for FamilyMember records. This is the one vertical with
//! real domain logic: a member must reference a stored Family, and its
//! role/payload pair is a tagged union enforced by the `Membership` type.
//! Validation runs before any write is issued; violations fail the operation
//! instead of normalizing the data.

use std::sync::Arc;

use crate::domain::entities::FamilyMember;
use crate::domain::ports::{EntityStream, FamilyMemberRepository, FamilyRepository};
use crate::error::{AppError, DomainError};

/// Service for managing family members
pub struct FamilyMemberService<MR, FR>
where
    MR: FamilyMemberRepository,
    FR: FamilyRepository,
{
    members: Arc<MR>,
    families: Arc<FR>,
}

impl<MR, FR> FamilyMemberService<MR, FR>
where
    MR: FamilyMemberRepository,
    FR: FamilyRepository,
{
    pub fn new(members: Arc<MR>, families: Arc<FR>) -> Self {
        Self { members, families }
    }

    pub async fn create(&self, member: FamilyMember) -> Result<FamilyMember, AppError> {
        self.verify_family_reference(&member).await?;
        tracing::debug!(role = %member.membership.role(), "Creating family member");
        Ok(self.members.save(member).await?)
    }

    pub async fn find_all(&self) -> Result<EntityStream<FamilyMember>, AppError> {
        Ok(self.members.find_all().await?)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<FamilyMember>, AppError> {
        Ok(self.members.find_by_id(id).await?)
    }

    /// Whitelist field-merge; the identity of `previous` is retained. The
    /// membership payload is replaced wholesale (the tagged union makes a
    /// role/payload mismatch unrepresentable on the merged result), and the
    /// merged family reference is re-verified before saving.
    pub async fn update(
        &self,
        mut previous: FamilyMember,
        incoming: FamilyMember,
    ) -> Result<FamilyMember, AppError> {
        previous.family = incoming.family;
        previous.membership = incoming.membership;
        self.verify_family_reference(&previous).await?;
        Ok(self.members.save(previous).await?)
    }

    pub async fn delete(&self, member: FamilyMember) -> Result<(), AppError> {
        self.members.delete(&member).await?;
        Ok(())
    }

    /// The member must reference a stored family by identity.
    async fn verify_family_reference(&self, member: &FamilyMember) -> Result<(), AppError> {
        let family_id = member
            .family
            .family_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| {
                AppError::Domain(DomainError::Validation(
                    "family member must reference a stored family".to_string(),
                ))
            })?;

        if self.families.find_by_id(family_id).await?.is_none() {
            return Err(AppError::Domain(DomainError::Validation(format!(
                "family {} does not exist",
                family_id
            ))));
        }

        Ok(())
    }
}
