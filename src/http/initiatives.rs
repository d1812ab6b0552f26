//! Initiative catalog endpoints.

use super::AppState;
use crate::error::ApiError;
use axum::Json;
use axum::extract::{Path, State};
use serde_json::{Value, json};

/// GET /api/initiatives
pub async fn list(State(store): State<AppState>) -> Result<Json<Value>, ApiError> {
    let initiatives = store
        .list_initiatives()
        .await
        .map_err(|e| ApiError::storage("Failed to fetch initiatives", e))?;

    Ok(Json(json!({ "success": true, "initiatives": initiatives })))
}

/// GET /api/initiatives/:slug
pub async fn get_by_slug(
    State(store): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let initiative = store
        .get_initiative(&slug)
        .await
        .map_err(|e| ApiError::storage("Failed to fetch initiative", e))?
        .ok_or(ApiError::NotFound("Initiative not found"))?;

    Ok(Json(json!({ "success": true, "initiative": initiative })))
}
