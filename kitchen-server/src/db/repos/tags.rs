//! Tag repository
//!
//! Handles tag lookup and recipe tag sets:
//! - upsert: INSERT with ON CONFLICT (idempotent), used by every tag write
//! - replace_for_recipe: delete all associations, then re-insert (atomic)

use serde::Serialize;
use sqlx::{FromRow, PgConnection, PgExecutor, PgPool};

use super::DbError;
use crate::models::TagName;

/// Tag record from database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

/// Insert the tag if absent and return its id.
pub(crate) async fn upsert<'e, E>(executor: E, name: &TagName) -> Result<i64, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_scalar(
        r#"
        INSERT INTO tags (name) VALUES ($1)
        ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
        RETURNING id
        "#,
    )
    .bind(name.as_str())
    .fetch_one(executor)
    .await
}

/// Associate each tag with the recipe, creating tags as needed.
///
/// Repeated tags are ignored by the composite key.
pub(crate) async fn attach(
    conn: &mut PgConnection,
    recipe_id: i64,
    tags: &[TagName],
) -> Result<(), sqlx::Error> {
    for tag in tags {
        let tag_id = upsert(&mut *conn, tag).await?;
        sqlx::query(
            r#"
            INSERT INTO recipe_tags (recipe_id, tag_id) VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(recipe_id)
        .bind(tag_id)
        .execute(&mut *conn)
        .await?;
    }
    Ok(())
}

/// Tag names for a recipe, alphabetical.
pub(crate) async fn names_for_recipe<'e, E>(
    executor: E,
    recipe_id: i64,
) -> Result<Vec<String>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_scalar(
        r#"
        SELECT t.name FROM tags t
        JOIN recipe_tags rt ON t.id = rt.tag_id
        WHERE rt.recipe_id = $1
        ORDER BY t.name ASC
        "#,
    )
    .bind(recipe_id)
    .fetch_all(executor)
    .await
}

/// Tag repository
pub struct TagRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> TagRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All tags, alphabetical.
    pub async fn list(&self) -> Result<Vec<Tag>, DbError> {
        let tags = sqlx::query_as("SELECT id, name FROM tags ORDER BY name ASC")
            .fetch_all(self.pool)
            .await?;
        Ok(tags)
    }

    /// Tag names attached to a recipe, alphabetical.
    pub async fn for_recipe(&self, recipe_id: i64) -> Result<Vec<String>, DbError> {
        Ok(names_for_recipe(self.pool, recipe_id).await?)
    }

    /// Replace a recipe's tag set wholesale.
    ///
    /// Returns `false` (and changes nothing) when the recipe does not exist.
    pub async fn replace_for_recipe(
        &self,
        recipe_id: i64,
        tags: &[TagName],
    ) -> Result<bool, DbError> {
        let mut tx = self.pool.begin().await?;

        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM recipes WHERE id = $1)")
            .bind(recipe_id)
            .fetch_one(&mut *tx)
            .await?;
        if !exists {
            return Ok(false);
        }

        sqlx::query("DELETE FROM recipe_tags WHERE recipe_id = $1")
            .bind(recipe_id)
            .execute(&mut *tx)
            .await?;
        attach(&mut *tx, recipe_id, tags).await?;

        tx.commit().await?;
        tracing::debug!(recipe_id, count = tags.len(), "recipe tags replaced");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{test_pool, unique, RecipeRepo};
    use crate::models::{CuisineName, NewRecipe, RecipeName};

    fn tag(s: &str) -> TagName {
        TagName::new(s).unwrap()
    }

    async fn recipe_with_tags(pool: &PgPool, tags: Vec<TagName>) -> i64 {
        let recipe = NewRecipe {
            name: RecipeName::new(&unique("tagged")).unwrap(),
            cuisine: CuisineName::new("test-kitchen").unwrap(),
            notes: None,
            urls: Vec::new(),
            tags,
        };
        RecipeRepo::new(pool).create(&recipe).await.unwrap()
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn upsert_is_case_insensitive() {
        let pool = test_pool().await;
        let base = unique("tag");

        let first = upsert(&pool, &tag(&base.to_uppercase())).await.unwrap();
        let second = upsert(&pool, &tag(&format!("  {}  ", base))).await.unwrap();
        assert_eq!(first, second);

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tags WHERE name = $1")
            .bind(&base)
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn attach_twice_keeps_one_link() {
        let pool = test_pool().await;
        let name = tag(&unique("dup"));
        let id = recipe_with_tags(&pool, vec![name.clone(), name.clone()]).await;

        let mut conn = pool.acquire().await.unwrap();
        attach(&mut *conn, id, &[name.clone()]).await.unwrap();

        let names = TagRepo::new(&pool).for_recipe(id).await.unwrap();
        assert_eq!(names, [name.as_str()]);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn replace_leaves_exactly_new_set() {
        let pool = test_pool().await;
        let base = unique("t");
        let (a, b, c) = (
            tag(&format!("{}-a", base)),
            tag(&format!("{}-b", base)),
            tag(&format!("{}-c", base)),
        );
        let id = recipe_with_tags(&pool, vec![a.clone(), b.clone()]).await;

        let repo = TagRepo::new(&pool);
        assert!(repo.replace_for_recipe(id, &[c.clone(), b.clone()]).await.unwrap());

        let names = repo.for_recipe(id).await.unwrap();
        assert_eq!(names, [b.as_str(), c.as_str()]);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn replace_with_empty_clears() {
        let pool = test_pool().await;
        let id = recipe_with_tags(&pool, vec![tag(&unique("gone"))]).await;

        let repo = TagRepo::new(&pool);
        assert!(repo.replace_for_recipe(id, &[]).await.unwrap());
        assert!(repo.for_recipe(id).await.unwrap().is_empty());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn replace_on_unknown_recipe_is_false() {
        let pool = test_pool().await;
        let repo = TagRepo::new(&pool);
        assert!(!repo.replace_for_recipe(i64::MAX, &[tag("x")]).await.unwrap());
    }
}
