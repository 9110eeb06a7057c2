//! Family handlers
//!
//! Endpoints for family records.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use super::streaming::JsonArrayStream;
use crate::domain::entities::Family;
use crate::error::AppError;
use crate::AppState;

/// POST /api/families
pub async fn create_family(
    State(state): State<AppState>,
    Json(family): Json<Family>,
) -> Result<Json<Family>, AppError> {
    let created = state.family_service.create(family).await?;
    Ok(Json(created))
}

/// GET /api/families
pub async fn list_families(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let families = state.family_service.find_all().await?;
    Ok(JsonArrayStream(families))
}

/// GET /api/families/:family_id
pub async fn get_family(
    State(state): State<AppState>,
    Path(family_id): Path<String>,
) -> Result<Json<Family>, AppError> {
    state
        .family_service
        .find_by_id(&family_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Family {} not found", family_id)))
}

/// PUT /api/families/:family_id
pub async fn update_family(
    State(state): State<AppState>,
    Path(family_id): Path<String>,
    Json(incoming): Json<Family>,
) -> Result<Json<Family>, AppError> {
    let previous = state
        .family_service
        .find_by_id(&family_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Family {} not found", family_id)))?;

    let updated = state.family_service.update(previous, incoming).await?;
    Ok(Json(updated))
}

/// DELETE /api/families/:family_id
pub async fn delete_family(
    State(state): State<AppState>,
    Path(family_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let family = state
        .family_service
        .find_by_id(&family_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Family {} not found", family_id)))?;

    state.family_service.delete(family).await?;
    Ok(StatusCode::NO_CONTENT)
}
