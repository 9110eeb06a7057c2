//! MongoDB adapter for ParentRepository

use async_trait::async_trait;
use futures::StreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Collection, Database};

use super::documents::ParentDocument;
use crate::domain::entities::Parent;
use crate::domain::ports::{EntityStream, ParentRepository};
use crate::error::DomainError;

/// MongoDB implementation of ParentRepository
pub struct MongoParentRepository {
    collection: Collection<ParentDocument>,
}

impl MongoParentRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("parents"),
        }
    }
}

#[async_trait]
impl ParentRepository for MongoParentRepository {
    async fn save(&self, mut parent: Parent) -> Result<Parent, DomainError> {
        let document = ParentDocument::try_from(&parent)?;

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
                parent.parent_id = result.inserted_id.as_object_id().map(|id| id.to_hex());
            }
        }

        Ok(parent)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Parent>, DomainError> {
        // An identity the store could never have assigned is simply not found.
        let Ok(id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        let found = self
            .collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(found.map(Parent::from))
    }

    async fn find_all(&self) -> Result<EntityStream<Parent>, DomainError> {
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(cursor
            .map(|document| {
                document
                    .map(Parent::from)
                    .map_err(|e| DomainError::Database(e.to_string()))
            })
            .boxed())
    }

    async fn delete(&self, parent: &Parent) -> Result<(), DomainError> {
        let Some(id) = parent.parent_id.as_deref() else {
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
