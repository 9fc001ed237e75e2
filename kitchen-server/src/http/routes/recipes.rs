//! Recipe endpoints: create, detail and delete

use std::sync::Arc;

use axum::{
    extract::{Form, Query, State},
    http::{HeaderMap, HeaderValue},
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use serde::Deserialize;

use super::pages;
use crate::db::repos::RecipeRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{RecipeId, HX_REDIRECT};
use crate::http::html;
use crate::http::server::AppState;
use crate::models::NewRecipe;
use crate::render;

/// Where to send the browser after a delete
#[derive(Debug, Default, Deserialize)]
pub struct DeleteParams {
    pub redirect: Option<String>,
}

impl DeleteParams {
    /// Only same-site absolute paths are honoured
    fn target(&self) -> Option<&str> {
        self.redirect
            .as_deref()
            .filter(|r| r.starts_with('/') && !r.starts_with("//"))
    }
}

/// POST /recipes - save a recipe from either add form
///
/// Fields arrive as ordered pairs so repeated `url` / `label` inputs keep
/// their pairing.
async fn create_recipe(
    State(state): State<Arc<AppState>>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Html<String>, ApiError> {
    let recipe = NewRecipe::from_form(&pairs)?;
    let id = RecipeRepo::new(&state.pool).create(&recipe).await?;
    Ok(html(render::save_success(id, recipe.name.as_str())))
}

/// GET /recipes/{id} - detail page
async fn get_recipe(
    State(state): State<Arc<AppState>>,
    RecipeId(id): RecipeId,
) -> Result<Html<String>, ApiError> {
    let recipe = RecipeRepo::new(&state.pool)
        .get(id)
        .await?
        .ok_or_else(|| ApiError::page_not_found("recipe", id))?;

    Ok(html(render::detail_page(&recipe)))
}

/// DELETE /recipes/{id} - empty body so the swapped row disappears
///
/// Deleting a missing recipe is not an error.
async fn delete_recipe(
    State(state): State<Arc<AppState>>,
    RecipeId(id): RecipeId,
    Query(params): Query<DeleteParams>,
) -> Result<impl IntoResponse, ApiError> {
    RecipeRepo::new(&state.pool).delete(id).await?;

    let mut headers = HeaderMap::new();
    if let Some(target) = params.target() {
        if let Ok(value) = HeaderValue::from_str(target) {
            headers.insert(HX_REDIRECT, value);
        }
    }

    Ok((headers, Html(String::new())))
}

/// Recipe routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/recipes", get(pages::index).post(create_recipe))
        .route("/recipes/{id}", get(get_recipe).delete(delete_recipe))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirect_must_be_local_path() {
        let local = DeleteParams { redirect: Some("/recipes".into()) };
        assert_eq!(local.target(), Some("/recipes"));

        let protocol_relative = DeleteParams { redirect: Some("//evil.example".into()) };
        assert_eq!(protocol_relative.target(), None);

        let absolute = DeleteParams { redirect: Some("https://evil.example".into()) };
        assert_eq!(absolute.target(), None);

        assert_eq!(DeleteParams::default().target(), None);
    }
}
