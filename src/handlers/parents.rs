//! Parent handlers
//!
//! Endpoints for parent records.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use super::streaming::JsonArrayStream;
use crate::domain::entities::Parent;
use crate::error::AppError;
use crate::AppState;

/// POST /api/parents
pub async fn create_parent(
    State(state): State<AppState>,
    Json(parent): Json<Parent>,
) -> Result<Json<Parent>, AppError> {
    let created = state.parent_service.create(parent).await?;
    Ok(Json(created))
}

/// GET /api/parents
pub async fn list_parents(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let parents = state.parent_service.find_all().await?;
    Ok(JsonArrayStream(parents))
}

/// GET /api/parents/:parent_id
pub async fn get_parent(
    State(state): State<AppState>,
    Path(parent_id): Path<String>,
) -> Result<Json<Parent>, AppError> {
    state
        .parent_service
        .find_by_id(&parent_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Parent {} not found", parent_id)))
}

/// PUT /api/parents/:parent_id
pub async fn update_parent(
    State(state): State<AppState>,
    Path(parent_id): Path<String>,
    Json(incoming): Json<Parent>,
) -> Result<Json<Parent>, AppError> {
    let previous = state
        .parent_service
        .find_by_id(&parent_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Parent {} not found", parent_id)))?;

    let updated = state.parent_service.update(previous, incoming).await?;
    Ok(Json(updated))
}

/// DELETE /api/parents/:parent_id
pub async fn delete_parent(
    State(state): State<AppState>,
    Path(parent_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let parent = state
        .parent_service
        .find_by_id(&parent_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Parent {} not found", parent_id)))?;

    state.parent_service.delete(parent).await?;
    Ok(StatusCode::NO_CONTENT)
}
