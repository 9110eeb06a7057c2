//! Student handlers
//!
//! Endpoints for student records.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use super::streaming::JsonArrayStream;
use crate::domain::entities::Student;
use crate::error::AppError;
use crate::AppState;

/// POST /api/students
pub async fn create_student(
    State(state): State<AppState>,
    Json(student): Json<Student>,
) -> Result<Json<Student>, AppError> {
    let created = state.student_service.create(student).await?;
    Ok(Json(created))
}

/// GET /api/students
pub async fn list_students(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let students = state.student_service.find_all().await?;
    Ok(JsonArrayStream(students))
}

/// GET /api/students/:student_id
pub async fn get_student(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<Json<Student>, AppError> {
    state
        .student_service
        .find_by_id(&student_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Student {} not found", student_id)))
}

/// PUT /api/students/:student_id
pub async fn update_student(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
    Json(incoming): Json<Student>,
) -> Result<Json<Student>, AppError> {
    let previous = state
        .student_service
        .find_by_id(&student_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Student {} not found", student_id)))?;

    let updated = state.student_service.update(previous, incoming).await?;
    Ok(Json(updated))
}

/// DELETE /api/students/:student_id
pub async fn delete_student(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let student = state
        .student_service
        .find_by_id(&student_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Student {} not found", student_id)))?;

    state.student_service.delete(student).await?;
    Ok(StatusCode::NO_CONTENT)
}
