//! Edit-in-place endpoints for single recipe fields

use std::sync::Arc;

use axum::{
    extract::{Form, State},
    response::Html,
    routing::get,
    Router,
};
use serde::Deserialize;

use crate::db::repos::{RecipeDetail, RecipeRepo, TagRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{RecipeId, ValidField};
use crate::http::html;
use crate::http::server::AppState;
use crate::models::{normalize_notes, parse_tag_list, CuisineName, RecipeField, RecipeName};
use crate::render;

/// Submitted value of the field being edited
#[derive(Debug, Deserialize)]
pub struct FieldForm {
    #[serde(default)]
    pub value: String,
}

async fn load(state: &AppState, id: i64) -> Result<RecipeDetail, ApiError> {
    RecipeRepo::new(&state.pool)
        .get(id)
        .await?
        .ok_or_else(|| ApiError::not_found("recipe", id))
}

/// GET /recipes/{id}/{field} - read-only fragment
async fn show_field(
    State(state): State<Arc<AppState>>,
    RecipeId(id): RecipeId,
    ValidField(field): ValidField,
) -> Result<Html<String>, ApiError> {
    let recipe = load(&state, id).await?;
    Ok(html(render::field_display(&recipe, field)))
}

/// GET /recipes/{id}/{field}/edit - edit form fragment
async fn edit_field(
    State(state): State<Arc<AppState>>,
    RecipeId(id): RecipeId,
    ValidField(field): ValidField,
) -> Result<Html<String>, ApiError> {
    let recipe = load(&state, id).await?;
    Ok(html(render::field_edit(&recipe, field)))
}

/// PUT /recipes/{id}/{field} - save one field, answer with its display fragment
async fn update_field(
    State(state): State<Arc<AppState>>,
    RecipeId(id): RecipeId,
    ValidField(field): ValidField,
    Form(form): Form<FieldForm>,
) -> Result<Html<String>, ApiError> {
    let recipes = RecipeRepo::new(&state.pool);

    let updated = match field {
        RecipeField::Name => recipes.update_name(id, &RecipeName::new(&form.value)?).await?,
        RecipeField::Cuisine => {
            recipes
                .update_cuisine(id, &CuisineName::new(&form.value)?)
                .await?
        }
        RecipeField::Notes => recipes.update_notes(id, normalize_notes(&form.value)?).await?,
        RecipeField::Tags => {
            TagRepo::new(&state.pool)
                .replace_for_recipe(id, &parse_tag_list(&form.value)?)
                .await?
        }
    };

    if !updated {
        return Err(ApiError::not_found("recipe", id));
    }
    tracing::info!(recipe_id = id, field = %field, "recipe field updated");

    let recipe = load(&state, id).await?;
    Ok(html(render::field_display(&recipe, field)))
}

/// Field routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/recipes/{id}/{field}", get(show_field).put(update_field))
        .route("/recipes/{id}/{field}/edit", get(edit_field))
}
