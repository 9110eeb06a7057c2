//! MongoDB adapter for FamilyRepository

use async_trait::async_trait;
use futures::StreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Collection, Database};

use super::documents::FamilyDocument;
use crate::domain::entities::Family;
use crate::domain::ports::{EntityStream, FamilyRepository};
use crate::error::DomainError;

/// MongoDB implementation of FamilyRepository
pub struct MongoFamilyRepository {
    collection: Collection<FamilyDocument>,
}

impl MongoFamilyRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("families"),
        }
    }
}

#[async_trait]
impl FamilyRepository for MongoFamilyRepository {
    async fn save(&self, mut family: Family) -> Result<Family, DomainError> {
        let document = FamilyDocument::try_from(&family)?;

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
                family.family_id = result.inserted_id.as_object_id().map(|id| id.to_hex());
            }
        }

        Ok(family)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Family>, DomainError> {
        let Ok(id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        let found = self
            .collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(found.map(Family::from))
    }

    async fn find_all(&self) -> Result<EntityStream<Family>, DomainError> {
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(cursor
            .map(|document| {
                document
                    .map(Family::from)
                    .map_err(|e| DomainError::Database(e.to_string()))
            })
            .boxed())
    }

    async fn delete(&self, family: &Family) -> Result<(), DomainError> {
        let Some(id) = family.family_id.as_deref() else {
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
