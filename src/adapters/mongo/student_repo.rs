//! MongoDB adapter for StudentRepository

use async_trait::async_trait;
use futures::StreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Collection, Database};

use super::documents::StudentDocument;
use crate::domain::entities::Student;
use crate::domain::ports::{EntityStream, StudentRepository};
use crate::error::DomainError;

/// MongoDB implementation of StudentRepository
pub struct MongoStudentRepository {
    collection: Collection<StudentDocument>,
}

impl MongoStudentRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("students"),
        }
    }
}

#[async_trait]
impl StudentRepository for MongoStudentRepository {
    async fn save(&self, mut student: Student) -> Result<Student, DomainError> {
        let document = StudentDocument::try_from(&student)?;

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
                student.student_id = result.inserted_id.as_object_id().map(|id| id.to_hex());
            }
        }

        Ok(student)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Student>, DomainError> {
        let Ok(id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        let found = self
            .collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(found.map(Student::from))
    }

    async fn find_all(&self) -> Result<EntityStream<Student>, DomainError> {
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(cursor
            .map(|document| {
                document
                    .map(Student::from)
                    .map_err(|e| DomainError::Database(e.to_string()))
            })
            .boxed())
    }

    async fn delete(&self, student: &Student) -> Result<(), DomainError> {
        let Some(id) = student.student_id.as_deref() else {
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
