//! Student service
//!
//! CRUD orchestration for Student records.

use std::sync::Arc;

use crate::domain::entities::Student;
use crate::domain::ports::{EntityStream, StudentRepository};
use crate::error::AppError;

/// Service for managing students
pub struct StudentService<SR>
where
    SR: StudentRepository,
{
    students: Arc<SR>,
}

impl<SR> StudentService<SR>
where
    SR: StudentRepository,
{
    pub fn new(students: Arc<SR>) -> Self {
        Self { students }
    }

    pub async fn create(&self, student: Student) -> Result<Student, AppError> {
        Ok(self.students.save(student).await?)
    }

    pub async fn find_all(&self) -> Result<EntityStream<Student>, AppError> {
        Ok(self.students.find_all().await?)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Student>, AppError> {
        Ok(self.students.find_by_id(id).await?)
    }

    /// Whitelist field-merge; the identity of `previous` is retained.
    pub async fn update(
        &self,
        mut previous: Student,
        incoming: Student,
    ) -> Result<Student, AppError> {
        previous.gender = incoming.gender;
        previous.first_name = incoming.first_name;
        previous.middle_name = incoming.middle_name;
        previous.last_name = incoming.last_name;
        previous.date_of_birth = incoming.date_of_birth;
        previous.other_student_details = incoming.other_student_details;
        Ok(self.students.save(previous).await?)
    }

    pub async fn delete(&self, student: Student) -> Result<(), AppError> {
        self.students.delete(&student).await?;
        Ok(())
    }
}
