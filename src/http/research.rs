//! Research paper endpoints.

use super::{AppState, Pagination};
use crate::error::ApiError;
use axum::Json;
use axum::extract::{Path, Query, State};
use serde_json::{Value, json};

/// GET /api/research?page=&limit=
pub async fn list(
    State(store): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Value>, ApiError> {
    let (papers, total) = store
        .list_research_papers(pagination.page(), pagination.limit())
        .await
        .map_err(|e| ApiError::storage("Failed to fetch research papers", e))?;

    Ok(Json(json!({ "papers": papers, "total": total })))
}

/// GET /api/research/:id
///
/// Viewing a paper bumps its view counter. The increment runs first (a no-op
/// for unknown ids), so the returned record includes this visit.
pub async fn get_by_id(
    State(store): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    store
        .increment_research_paper_views(&id)
        .await
        .map_err(|e| ApiError::storage("Failed to fetch research paper", e))?;

    let paper = store
        .get_research_paper(&id)
        .await
        .map_err(|e| ApiError::storage("Failed to fetch research paper", e))?
        .ok_or(ApiError::NotFound("Research paper not found"))?;

    Ok(Json(json!({ "success": true, "paper": paper })))
}
