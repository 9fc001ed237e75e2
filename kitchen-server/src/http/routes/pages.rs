//! Browsing pages: index, list, search and the add-recipe form

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Html,
    routing::get,
    Router,
};
use serde::Deserialize;

use crate::db::repos::RecipeRepo;
use crate::http::error::ApiError;
use crate::http::extractors::HxRequest;
use crate::http::html;
use crate::http::server::AppState;
use crate::render;

/// Optional search term
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

impl SearchParams {
    /// The term to filter by; blank counts as no search
    pub fn term(&self) -> Option<&str> {
        self.q.as_deref().map(str::trim).filter(|q| !q.is_empty())
    }
}

/// GET / and GET /recipes - full index page, or just the list for htmx
pub(super) async fn index(
    State(state): State<Arc<AppState>>,
    HxRequest(is_htmx): HxRequest,
    Query(params): Query<SearchParams>,
) -> Result<Html<String>, ApiError> {
    let recipes = RecipeRepo::new(&state.pool).list(params.term()).await?;

    if is_htmx {
        Ok(html(render::recipe_list(&recipes)))
    } else {
        Ok(html(render::index_page(&recipes, params.term())))
    }
}

/// GET /recipes/search?q= - list fragment filtered by name or tag
async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Html<String>, ApiError> {
    let recipes = RecipeRepo::new(&state.pool).list(params.term()).await?;
    tracing::debug!(query = ?params.term(), hits = recipes.len(), "recipe search");
    Ok(html(render::recipe_list(&recipes)))
}

/// GET /recipes/add
async fn add_page() -> Html<String> {
    html(render::add_page())
}

/// GET /recipes/add/form/text
async fn form_text() -> Html<String> {
    html(render::form_text())
}

/// GET /recipes/add/form/url
async fn form_url() -> Html<String> {
    html(render::form_url())
}

/// Page routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index))
        .route("/recipes/search", get(search))
        .route("/recipes/add", get(add_page))
        .route("/recipes/add/form/text", get(form_text))
        .route("/recipes/add/form/url", get(form_url))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_search_is_no_search() {
        let params = SearchParams { q: Some("   ".into()) };
        assert_eq!(params.term(), None);

        let params = SearchParams { q: Some(" thai ".into()) };
        assert_eq!(params.term(), Some("thai"));

        assert_eq!(SearchParams::default().term(), None);
    }
}
