//! MongoDB adapter for FamilyMemberRepository

use async_trait::async_trait;
use futures::StreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Collection, Database};

use super::documents::FamilyMemberDocument;
use crate::domain::entities::FamilyMember;
use crate::domain::ports::{EntityStream, FamilyMemberRepository};
use crate::error::DomainError;

/// MongoDB implementation of FamilyMemberRepository
pub struct MongoFamilyMemberRepository {
    collection: Collection<FamilyMemberDocument>,
}

impl MongoFamilyMemberRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("familyMembers"),
        }
    }
}

#[async_trait]
impl FamilyMemberRepository for MongoFamilyMemberRepository {
    async fn save(&self, mut member: FamilyMember) -> Result<FamilyMember, DomainError> {
        let document = FamilyMemberDocument::try_from(&member)?;

        match document.id {
            Some(id) => {
                self.collection
                    .replace_one(doc! { "_id": id }, &document)
                    .upsert(true)
                    .await
                    .map_err(|e| DomainError::Database(e.to_string()))?;
            }
            None => {
                let result = self
                    .collection
                    .insert_one(&document)
                    .await
                    .map_err(|e| DomainError::Database(e.to_string()))?;
                member.family_member_id = result.inserted_id.as_object_id().map(|id| id.to_hex());
            }
        }

        Ok(member)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<FamilyMember>, DomainError> {
        let Ok(id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        let found = self
            .collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(found.map(FamilyMember::from))
    }

    async fn find_all(&self) -> Result<EntityStream<FamilyMember>, DomainError> {
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(cursor
            .map(|document| {
                document
                    .map(FamilyMember::from)
                    .map_err(|e| DomainError::Database(e.to_string()))
            })
            .boxed())
    }

    async fn delete(&self, member: &FamilyMember) -> Result<(), DomainError> {
        let Some(id) = member.family_member_id.as_deref() else {
            return Ok(());
        };
        let Ok(id) = ObjectId::parse_str(id) else {
            return Ok(());
        };

        self.collection
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }
}
