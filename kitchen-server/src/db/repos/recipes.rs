//! Recipe repository
//!
//! Handles recipe CRUD:
//! - create: recipe row, source URLs and tag associations in one transaction
//! - list/search: ordered by cuisine then name, each row enriched with its
//!   URLs and tags by follow-up queries
//! - update: partial, field-by-field
//! - delete: explicit child deletes before the recipe row

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

use super::{cuisines, tags, urls, CuisineRepo, DbError, RecipeUrl};
use crate::models::{CuisineName, NewRecipe, RecipeName};

/// Recipe with its cuisine, source URLs and tags
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeDetail {
    pub id: i64,
    pub name: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub cuisine: String,
    pub cuisine_id: i64,
    pub urls: Vec<RecipeUrl>,
    pub tags: Vec<String>,
}

/// Recipe row joined with its cuisine
#[derive(Debug, FromRow)]
struct RecipeRow {
    id: i64,
    name: String,
    notes: Option<String>,
    created_at: DateTime<Utc>,
    cuisine_name: String,
    cuisine_id: i64,
}

/// Partial update of a recipe's own columns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeChanges {
    pub name: Option<RecipeName>,
    pub cuisine_id: Option<i64>,
    /// `Some(None)` clears the notes
    pub notes: Option<Option<String>>,
}

impl RecipeChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.cuisine_id.is_none() && self.notes.is_none()
    }
}

const SELECT_RECIPES: &str = r#"
    SELECT DISTINCT r.id, r.name, r.notes, r.created_at,
           c.name AS cuisine_name, c.id AS cuisine_id
    FROM recipes r
    JOIN cuisines c ON r.cuisine_id = c.id
"#;

/// Escape LIKE wildcards so the term matches literally.
fn like_pattern(term: &str) -> String {
    let escaped = term
        .to_lowercase()
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

/// Recipe repository
pub struct RecipeRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> RecipeRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create a recipe with its URLs and tags, returning the new id.
    ///
    /// The cuisine and any new tags are created on first reference.
    pub async fn create(&self, recipe: &NewRecipe) -> Result<i64, DbError> {
        let mut tx = self.pool.begin().await?;

        let cuisine_id = cuisines::upsert(&mut *tx, &recipe.cuisine).await?;

        let recipe_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO recipes (name, cuisine_id, notes)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(recipe.name.as_str())
        .bind(cuisine_id)
        .bind(recipe.notes.as_deref())
        .fetch_one(&mut *tx)
        .await?;

        urls::insert_all(&mut *tx, recipe_id, &recipe.urls).await?;
        tags::attach(&mut *tx, recipe_id, &recipe.tags).await?;

        tx.commit().await?;

        tracing::info!(
            recipe_id,
            name = recipe.name.as_str(),
            cuisine = recipe.cuisine.as_str(),
            urls = recipe.urls.len(),
            tags = recipe.tags.len(),
            "recipe created"
        );
        Ok(recipe_id)
    }

    /// All recipes, or those whose name or any tag contains `search`
    /// (case-insensitive). Ordered by cuisine name, then recipe name.
    pub async fn list(&self, search: Option<&str>) -> Result<Vec<RecipeDetail>, DbError> {
        let mut builder = QueryBuilder::<Postgres>::new(SELECT_RECIPES);

        if let Some(term) = search.map(str::trim).filter(|t| !t.is_empty()) {
            let pattern = like_pattern(term);
            builder
                .push(
                    " LEFT JOIN recipe_tags rt ON r.id = rt.recipe_id \
                      LEFT JOIN tags t ON rt.tag_id = t.id \
                      WHERE LOWER(r.name) LIKE ",
                )
                .push_bind(pattern.clone())
                .push(" OR t.name LIKE ")
                .push_bind(pattern);
        }
        builder.push(" ORDER BY cuisine_name ASC, name ASC, id ASC");

        let rows: Vec<RecipeRow> = builder.build_query_as().fetch_all(self.pool).await?;

        let mut recipes = Vec::with_capacity(rows.len());
        for row in rows {
            recipes.push(self.enrich(row).await?);
        }
        Ok(recipes)
    }

    /// A single recipe, or `None` if the id is unknown.
    pub async fn get(&self, id: i64) -> Result<Option<RecipeDetail>, DbError> {
        let row: Option<RecipeRow> = sqlx::query_as(&format!("{} WHERE r.id = $1", SELECT_RECIPES))
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        match row {
            Some(row) => Ok(Some(self.enrich(row).await?)),
            None => Ok(None),
        }
    }

    async fn enrich(&self, row: RecipeRow) -> Result<RecipeDetail, DbError> {
        let urls = urls::for_recipe(self.pool, row.id).await?;
        let tags = tags::names_for_recipe(self.pool, row.id).await?;

        Ok(RecipeDetail {
            id: row.id,
            name: row.name,
            notes: row.notes,
            created_at: row.created_at,
            cuisine: row.cuisine_name,
            cuisine_id: row.cuisine_id,
            urls,
            tags,
        })
    }

    /// Apply a partial update.
    ///
    /// Returns `false` when there is nothing to change or no recipe has `id`.
    pub async fn update(&self, id: i64, changes: &RecipeChanges) -> Result<bool, DbError> {
        if changes.is_empty() {
            return Ok(false);
        }

        let mut builder = QueryBuilder::<Postgres>::new("UPDATE recipes SET ");
        {
            let mut set = builder.separated(", ");
            if let Some(name) = &changes.name {
                set.push("name = ").push_bind_unseparated(name.as_str());
            }
            if let Some(cuisine_id) = changes.cuisine_id {
                set.push("cuisine_id = ").push_bind_unseparated(cuisine_id);
            }
            if let Some(notes) = &changes.notes {
                set.push("notes = ").push_bind_unseparated(notes.as_deref());
            }
        }
        builder.push(" WHERE id = ").push_bind(id);

        let result = builder.build().execute(self.pool).await?;
        let updated = result.rows_affected() > 0;

        tracing::debug!(recipe_id = id, updated, "recipe update");
        Ok(updated)
    }

    /// Rename a recipe.
    pub async fn update_name(&self, id: i64, name: &RecipeName) -> Result<bool, DbError> {
        let changes = RecipeChanges {
            name: Some(name.clone()),
            ..Default::default()
        };
        self.update(id, &changes).await
    }

    /// Move a recipe to another cuisine, creating the cuisine if needed.
    pub async fn update_cuisine(&self, id: i64, cuisine: &CuisineName) -> Result<bool, DbError> {
        let cuisine_id = CuisineRepo::new(self.pool).get_or_create(cuisine).await?;
        let changes = RecipeChanges {
            cuisine_id: Some(cuisine_id),
            ..Default::default()
        };
        self.update(id, &changes).await
    }

    /// Set or clear a recipe's notes.
    pub async fn update_notes(&self, id: i64, notes: Option<String>) -> Result<bool, DbError> {
        let changes = RecipeChanges {
            notes: Some(notes),
            ..Default::default()
        };
        self.update(id, &changes).await
    }

    /// Delete a recipe and everything hanging off it.
    ///
    /// Returns `false` if no recipe had `id`.
    pub async fn delete(&self, id: i64) -> Result<bool, DbError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM recipe_tags WHERE recipe_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM recipe_urls WHERE recipe_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        let result = sqlx::query("DELETE FROM recipes WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        let deleted = result.rows_affected() > 0;
        tracing::info!(recipe_id = id, deleted, "recipe delete");
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{test_pool, unique, CuisineRepo, TagRepo};
    use crate::models::{NewUrl, TagName};

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("Curry"), "%curry%");
        assert_eq!(like_pattern("50%_off"), "%50\\%\\_off%");
    }

    #[test]
    fn empty_changes() {
        assert!(RecipeChanges::default().is_empty());
        let changes = RecipeChanges {
            notes: Some(None),
            ..Default::default()
        };
        assert!(!changes.is_empty());
    }

    fn new_recipe(name: &str, cuisine: &str, tags: &[&str]) -> NewRecipe {
        NewRecipe {
            name: RecipeName::new(name).unwrap(),
            cuisine: CuisineName::new(cuisine).unwrap(),
            notes: Some("notes".into()),
            urls: vec![
                NewUrl::new("https://a.example/1", Some("first")).unwrap(),
                NewUrl::new("https://a.example/2", None).unwrap(),
            ],
            tags: tags.iter().map(|t| TagName::new(t).unwrap()).collect(),
        }
    }

    async fn count(pool: &PgPool, sql: &str, id: i64) -> i64 {
        sqlx::query_scalar(sql).bind(id).fetch_one(pool).await.unwrap()
    }

    // Run with: DATABASE_URL=... DATABASE_AUTH_TOKEN=... cargo test -p kitchen-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn new_cuisine_created_once_and_reused_in_any_case() {
        let pool = test_pool().await;
        let repo = RecipeRepo::new(&pool);
        let cuisine = unique("cuisine");

        repo.create(&new_recipe("One", &cuisine, &[])).await.unwrap();
        repo.create(&new_recipe("Two", &cuisine.to_uppercase(), &[]))
            .await
            .unwrap();

        let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cuisines WHERE LOWER(name) = $1")
            .bind(&cuisine)
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(rows, 1);

        let id = CuisineRepo::new(&pool)
            .get_or_create(&CuisineName::new(&cuisine).unwrap())
            .await
            .unwrap();
        let recipes: i64 = count(&pool, "SELECT COUNT(*) FROM recipes WHERE cuisine_id = $1", id).await;
        assert_eq!(recipes, 2);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_then_get_round_trip() {
        let pool = test_pool().await;
        let repo = RecipeRepo::new(&pool);
        let name = unique("Laksa");

        let id = repo
            .create(&new_recipe(&name, "Malaysian", &["soup", "Spicy", "soup"]))
            .await
            .unwrap();
        let recipe = repo.get(id).await.unwrap().expect("recipe exists");

        assert_eq!(recipe.name, name);
        assert_eq!(recipe.cuisine, "malaysian");
        assert_eq!(recipe.notes.as_deref(), Some("notes"));
        assert_eq!(recipe.tags, ["soup", "spicy"]);
        let urls: Vec<&str> = recipe.urls.iter().map(|u| u.url.as_str()).collect();
        assert_eq!(urls, ["https://a.example/1", "https://a.example/2"]);
        assert_eq!(recipe.urls[0].label.as_deref(), Some("first"));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn get_unknown_is_none() {
        let pool = test_pool().await;
        assert!(RecipeRepo::new(&pool).get(i64::MAX).await.unwrap().is_none());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn delete_removes_urls_and_tag_links() {
        let pool = test_pool().await;
        let repo = RecipeRepo::new(&pool);
        let id = repo
            .create(&new_recipe(&unique("Doomed"), "test-kitchen", &["gone"]))
            .await
            .unwrap();

        assert!(repo.delete(id).await.unwrap());

        assert_eq!(count(&pool, "SELECT COUNT(*) FROM recipe_urls WHERE recipe_id = $1", id).await, 0);
        assert_eq!(count(&pool, "SELECT COUNT(*) FROM recipe_tags WHERE recipe_id = $1", id).await, 0);
        assert!(repo.get(id).await.unwrap().is_none());
        assert!(!repo.delete(id).await.unwrap());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn search_matches_tag_even_when_name_does_not() {
        let pool = test_pool().await;
        let repo = RecipeRepo::new(&pool);
        let tag = unique("fermented");
        let name = unique("Kimchi stew");

        let id = repo
            .create(&new_recipe(&name, "korean", &[&tag, "other"]))
            .await
            .unwrap();

        // middle of the tag, upper-cased
        let needle = tag[3..tag.len() - 2].to_uppercase();
        let found = repo.list(Some(&needle)).await.unwrap();
        let hits: Vec<i64> = found.iter().map(|r| r.id).collect();
        assert_eq!(hits, [id], "one row despite two tags");
        assert_eq!(found[0].tags.len(), 2);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn list_orders_by_cuisine_then_name() {
        let pool = test_pool().await;
        let repo = RecipeRepo::new(&pool);
        let marker = unique("order");

        for (name, cuisine) in [("b", "zz"), ("a", "zz"), ("c", "aa")] {
            let full = format!("{} {}", marker, name);
            repo.create(&new_recipe(&full, &format!("{}-{}", marker, cuisine), &[]))
                .await
                .unwrap();
        }

        let names: Vec<String> = repo
            .list(Some(&marker))
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(
            names,
            [
                format!("{} c", marker),
                format!("{} a", marker),
                format!("{} b", marker)
            ]
        );
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn update_unknown_recipe_is_not_updated() {
        let pool = test_pool().await;
        let repo = RecipeRepo::new(&pool);

        let name = RecipeName::new("Ghost").unwrap();
        assert!(!repo.update_name(i64::MAX, &name).await.unwrap());
        assert!(!repo.update(i64::MAX, &RecipeChanges::default()).await.unwrap());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn field_updates() {
        let pool = test_pool().await;
        let repo = RecipeRepo::new(&pool);
        let id = repo
            .create(&new_recipe(&unique("Draft"), "test-kitchen", &["x"]))
            .await
            .unwrap();

        assert!(repo.update_name(id, &RecipeName::new("Final").unwrap()).await.unwrap());
        assert!(repo
            .update_cuisine(id, &CuisineName::new("Ethiopian").unwrap())
            .await
            .unwrap());
        assert!(repo.update_notes(id, None).await.unwrap());

        let recipe = repo.get(id).await.unwrap().unwrap();
        assert_eq!(recipe.name, "Final");
        assert_eq!(recipe.cuisine, "ethiopian");
        assert_eq!(recipe.notes, None);
        assert_eq!(TagRepo::new(&pool).for_recipe(id).await.unwrap(), ["x"]);
    }
}
