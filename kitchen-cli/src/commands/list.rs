//! Print saved recipes to the terminal

use anyhow::{Context, Result};
use clap::Parser;

use kitchen_server::db::{self, RecipeDetail, RecipeRepo};
use kitchen_server::DatabaseConfig;

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Only show recipes whose name or a tag contains this text
    #[arg(long, short = 's')]
    pub search: Option<String>,
}

fn format_recipe(recipe: &RecipeDetail) -> String {
    let mut line = format!("{:>5}  {:<16} {}", recipe.id, recipe.cuisine, recipe.name);
    if !recipe.tags.is_empty() {
        line.push_str(&format!("  [{}]", recipe.tags.join(", ")));
    }
    for url in &recipe.urls {
        line.push_str(&format!("\n       {}", url.url));
    }
    line
}

/// List recipes grouped by cuisine
pub async fn run_list(args: ListArgs) -> Result<()> {
    let db_config = DatabaseConfig::from_env().context("Database is not configured")?;
    let pool = db::connect(&db_config)
        .await
        .context("Failed to connect to database")?;

    let recipes = RecipeRepo::new(&pool)
        .list(args.search.as_deref())
        .await
        .context("Failed to list recipes")?;

    if recipes.is_empty() {
        println!("No recipes found.");
        return Ok(());
    }

    for recipe in &recipes {
        println!("{}", format_recipe(recipe));
    }
    println!("\n{} recipe(s)", recipes.len());
    Ok(())
}
