//! News article endpoints.

use super::{AppState, Pagination};
use crate::error::ApiError;
use axum::Json;
use axum::extract::{Path, Query, State};
use serde_json::{Value, json};

/// GET /api/news?page=&limit=
pub async fn list(
    State(store): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Value>, ApiError> {
    let (articles, total) = store
        .list_news_articles(pagination.page(), pagination.limit())
        .await
        .map_err(|e| ApiError::storage("Failed to fetch news articles", e))?;

    Ok(Json(json!({ "articles": articles, "total": total })))
}

/// GET /api/news/:id
pub async fn get_by_id(
    State(store): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let article = store
        .get_news_article(&id)
        .await
        .map_err(|e| ApiError::storage("Failed to fetch news article", e))?
        .ok_or(ApiError::NotFound("News article not found"))?;

    Ok(Json(json!({ "success": true, "article": article })))
}
