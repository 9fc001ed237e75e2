//! Recipe source URLs

use serde::Serialize;
use sqlx::{FromRow, PgConnection, PgExecutor, PgPool};

use super::DbError;
use crate::models::NewUrl;

/// Source link attached to a recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct RecipeUrl {
    pub id: i64,
    pub url: String,
    pub label: Option<String>,
}

pub(crate) async fn insert_all(
    conn: &mut PgConnection,
    recipe_id: i64,
    urls: &[NewUrl],
) -> Result<(), sqlx::Error> {
    for url in urls {
        sqlx::query("INSERT INTO recipe_urls (recipe_id, url, label) VALUES ($1, $2, $3)")
            .bind(recipe_id)
            .bind(&url.url)
            .bind(url.label.as_deref())
            .execute(&mut *conn)
            .await?;
    }
    Ok(())
}

/// URLs for a recipe, oldest first.
pub(crate) async fn for_recipe<'e, E>(executor: E, recipe_id: i64) -> Result<Vec<RecipeUrl>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as(
        r#"
        SELECT id, url, label FROM recipe_urls
        WHERE recipe_id = $1
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .bind(recipe_id)
    .fetch_all(executor)
    .await
}

/// URL repository
pub struct UrlRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UrlRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_for_recipe(&self, recipe_id: i64) -> Result<Vec<RecipeUrl>, DbError> {
        Ok(for_recipe(self.pool, recipe_id).await?)
    }

    /// Attach a URL to a recipe, returning the new URL id.
    ///
    /// Returns `None` when the recipe does not exist.
    pub async fn add(&self, recipe_id: i64, url: &NewUrl) -> Result<Option<i64>, DbError> {
        let id: Option<i64> = sqlx::query_scalar(
            r#"
            INSERT INTO recipe_urls (recipe_id, url, label)
            SELECT id, $2, $3 FROM recipes WHERE id = $1
            RETURNING id
            "#,
        )
        .bind(recipe_id)
        .bind(&url.url)
        .bind(url.label.as_deref())
        .fetch_optional(self.pool)
        .await?;

        tracing::debug!(recipe_id, url_id = ?id, "recipe url added");
        Ok(id)
    }

    /// Replace a URL's address and label. Returns whether a row was updated.
    pub async fn update(&self, recipe_id: i64, url_id: i64, url: &NewUrl) -> Result<bool, DbError> {
        let result = sqlx::query(
            "UPDATE recipe_urls SET url = $1, label = $2 WHERE id = $3 AND recipe_id = $4",
        )
        .bind(&url.url)
        .bind(url.label.as_deref())
        .bind(url_id)
        .bind(recipe_id)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Remove a URL. Returns whether a row was deleted.
    pub async fn delete(&self, recipe_id: i64, url_id: i64) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM recipe_urls WHERE id = $1 AND recipe_id = $2")
            .bind(url_id)
            .bind(recipe_id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
