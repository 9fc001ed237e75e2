//! Cuisine repository
//!
//! Cuisines are never created directly; they appear the first time a recipe
//! names them.

use serde::Serialize;
use sqlx::{FromRow, PgExecutor, PgPool};

use super::DbError;
use crate::models::CuisineName;

/// Cuisine record from database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Cuisine {
    pub id: i64,
    pub name: String,
}

/// Insert the cuisine if absent and return its id.
///
/// The no-op update makes RETURNING yield the existing row on conflict.
pub(crate) async fn upsert<'e, E>(executor: E, name: &CuisineName) -> Result<i64, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_scalar(
        r#"
        INSERT INTO cuisines (name) VALUES ($1)
        ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
        RETURNING id
        "#,
    )
    .bind(name.as_str())
    .fetch_one(executor)
    .await
}

/// Cuisine repository
pub struct CuisineRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CuisineRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get the id for a cuisine, creating the row on first use.
    pub async fn get_or_create(&self, name: &CuisineName) -> Result<i64, DbError> {
        let id = upsert(self.pool, name).await?;
        tracing::debug!(cuisine = name.as_str(), id, "cuisine resolved");
        Ok(id)
    }

    /// All cuisines, alphabetical.
    pub async fn list(&self) -> Result<Vec<Cuisine>, DbError> {
        let cuisines = sqlx::query_as("SELECT id, name FROM cuisines ORDER BY name ASC")
            .fetch_all(self.pool)
            .await?;
        Ok(cuisines)
    }
}
