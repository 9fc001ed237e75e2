//! JSON name lists feeding the form datalists

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::db::repos::{CuisineRepo, TagRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// GET /api/cuisines - every cuisine name, alphabetical
async fn cuisines(State(state): State<Arc<AppState>>) -> Result<Json<Vec<String>>, ApiError> {
    let names = CuisineRepo::new(&state.pool)
        .list()
        .await?
        .into_iter()
        .map(|c| c.name)
        .collect();
    Ok(Json(names))
}

/// GET /api/tags - every tag name, alphabetical
async fn tags(State(state): State<Arc<AppState>>) -> Result<Json<Vec<String>>, ApiError> {
    let names = TagRepo::new(&state.pool)
        .list()
        .await?
        .into_iter()
        .map(|t| t.name)
        .collect();
    Ok(Json(names))
}

/// Autocomplete routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/cuisines", get(cuisines))
        .route("/api/tags", get(tags))
}
