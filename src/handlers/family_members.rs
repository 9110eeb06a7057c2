//! FamilyMember handlers
//!
//! Endpoints for family member records. The tagged-union payload shape is
//! validated during deserialization, so a role/payload mismatch never reaches
//! the service layer.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use super::streaming::JsonArrayStream;
use crate::domain::entities::FamilyMember;
use crate::error::AppError;
use crate::AppState;

/// POST /api/familyMembers
pub async fn create_family_member(
    State(state): State<AppState>,
    Json(member): Json<FamilyMember>,
) -> Result<Json<FamilyMember>, AppError> {
    let created = state.family_member_service.create(member).await?;
    Ok(Json(created))
}

/// GET /api/familyMembers
pub async fn list_family_members(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let members = state.family_member_service.find_all().await?;
    Ok(JsonArrayStream(members))
}

/// GET /api/familyMembers/:family_member_id
pub async fn get_family_member(
    State(state): State<AppState>,
    Path(family_member_id): Path<String>,
) -> Result<Json<FamilyMember>, AppError> {
    state
        .family_member_service
        .find_by_id(&family_member_id)
        .await?
        .map(Json)
        .ok_or_else(|| {
            AppError::NotFound(format!("Family member {} not found", family_member_id))
        })
}

/// PUT /api/familyMembers/:family_member_id
pub async fn update_family_member(
    State(state): State<AppState>,
    Path(family_member_id): Path<String>,
    Json(incoming): Json<FamilyMember>,
) -> Result<Json<FamilyMember>, AppError> {
    let previous = state
        .family_member_service
        .find_by_id(&family_member_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("Family member {} not found", family_member_id))
        })?;

    let updated = state
        .family_member_service
        .update(previous, incoming)
        .await?;
    Ok(Json(updated))
}

/// DELETE /api/familyMembers/:family_member_id
pub async fn delete_family_member(
    State(state): State<AppState>,
    Path(family_member_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let member = state
        .family_member_service
        .find_by_id(&family_member_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("Family member {} not found", family_member_id))
        })?;

    state.family_member_service.delete(member).await?;
    Ok(StatusCode::NO_CONTENT)
}
