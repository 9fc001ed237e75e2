//! Schema bootstrap command

use anyhow::{Context, Result};

use kitchen_server::db::{self, schema};
use kitchen_server::DatabaseConfig;

/// Create any missing tables, then report what exists
pub async fn run_init_db() -> Result<()> {
    let db_config = DatabaseConfig::from_env().context("Database is not configured")?;
    let pool = db::connect(&db_config)
        .await
        .context("Failed to connect to database")?;

    schema::init(&pool)
        .await
        .context("Failed to initialize database schema")?;

    for table in schema::table_names() {
        println!("  {}", table);
    }
    println!("Database schema is ready.");
    Ok(())
}
