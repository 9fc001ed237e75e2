//! Schema initialization
//!
//! Every statement is `CREATE TABLE IF NOT EXISTS`, so running this on each
//! startup is a no-op once the tables exist.

use sqlx::PgPool;

/// Table definitions in dependency order
const TABLES: [(&str, &str); 5] = [
    (
        "cuisines",
        r#"
        CREATE TABLE IF NOT EXISTS cuisines (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL UNIQUE
        )
        "#,
    ),
    (
        "tags",
        r#"
        CREATE TABLE IF NOT EXISTS tags (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL UNIQUE
        )
        "#,
    ),
    (
        "recipes",
        r#"
        CREATE TABLE IF NOT EXISTS recipes (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            cuisine_id BIGINT NOT NULL REFERENCES cuisines(id),
            notes TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    ),
    (
        "recipe_urls",
        r#"
        CREATE TABLE IF NOT EXISTS recipe_urls (
            id BIGSERIAL PRIMARY KEY,
            recipe_id BIGINT NOT NULL REFERENCES recipes(id) ON DELETE CASCADE,
            url TEXT NOT NULL,
            label TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    ),
    (
        "recipe_tags",
        r#"
        CREATE TABLE IF NOT EXISTS recipe_tags (
            recipe_id BIGINT NOT NULL REFERENCES recipes(id) ON DELETE CASCADE,
            tag_id BIGINT NOT NULL REFERENCES tags(id) ON DELETE CASCADE,
            PRIMARY KEY (recipe_id, tag_id)
        )
        "#,
    ),
];

/// Names of the tables owned by this application, in creation order.
pub fn table_names() -> impl Iterator<Item = &'static str> {
    TABLES.iter().map(|(name, _)| *name)
}

/// Create any missing tables.
pub async fn init(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Initializing database schema...");

    for (name, ddl) in TABLES {
        sqlx::query(ddl).execute(pool).await?;
        tracing::debug!(table = name, "table ready");
    }

    tracing::info!("Database schema ready");
    Ok(())
}
