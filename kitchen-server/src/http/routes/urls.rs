//! Source link endpoints; every response is the recipe's refreshed link list

use std::sync::Arc;

use axum::{
    extract::{Form, State},
    response::Html,
    routing::{post, put},
    Router,
};
use serde::Deserialize;

use crate::db::repos::UrlRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{RecipeId, UrlId};
use crate::http::html;
use crate::http::server::AppState;
use crate::models::NewUrl;
use crate::render;

/// Submitted link
#[derive(Debug, Deserialize)]
pub struct UrlForm {
    #[serde(default)]
    pub url: String,
    pub label: Option<String>,
}

impl UrlForm {
    fn validate(&self) -> Result<NewUrl, ApiError> {
        Ok(NewUrl::new(&self.url, self.label.as_deref())?)
    }
}

async fn url_list(state: &AppState, recipe_id: i64) -> Result<Html<String>, ApiError> {
    let urls = UrlRepo::new(&state.pool).list_for_recipe(recipe_id).await?;
    Ok(html(render::url_list(recipe_id, &urls)))
}

/// POST /recipes/{id}/urls
async fn add_url(
    State(state): State<Arc<AppState>>,
    RecipeId(id): RecipeId,
    Form(form): Form<UrlForm>,
) -> Result<Html<String>, ApiError> {
    let url = form.validate()?;
    let url_id = UrlRepo::new(&state.pool)
        .add(id, &url)
        .await?
        .ok_or_else(|| ApiError::not_found("recipe", id))?;

    tracing::info!(recipe_id = id, url_id, "link added");
    url_list(&state, id).await
}

/// PUT /recipes/{id}/urls/{url_id}
async fn update_url(
    State(state): State<Arc<AppState>>,
    RecipeId(id): RecipeId,
    UrlId(url_id): UrlId,
    Form(form): Form<UrlForm>,
) -> Result<Html<String>, ApiError> {
    let url = form.validate()?;
    if !UrlRepo::new(&state.pool).update(id, url_id, &url).await? {
        return Err(ApiError::not_found("link", url_id));
    }

    url_list(&state, id).await
}

/// DELETE /recipes/{id}/urls/{url_id}
async fn delete_url(
    State(state): State<Arc<AppState>>,
    RecipeId(id): RecipeId,
    UrlId(url_id): UrlId,
) -> Result<Html<String>, ApiError> {
    if !UrlRepo::new(&state.pool).delete(id, url_id).await? {
        return Err(ApiError::not_found("link", url_id));
    }

    tracing::info!(recipe_id = id, url_id, "link removed");
    url_list(&state, id).await
}

/// Link routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/recipes/{id}/urls", post(add_url))
        .route("/recipes/{id}/urls/{url_id}", put(update_url).delete(delete_url))
}
