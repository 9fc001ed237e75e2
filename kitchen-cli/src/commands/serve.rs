//! HTTP server command
//!
//! Connects to the database, ensures the schema exists, then serves until
//! Ctrl+C or SIGTERM.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use kitchen_server::db::{self, schema};
use kitchen_server::{run_server, DatabaseConfig, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "KITCHEN_BIND", default_value = "0.0.0.0:8000")]
    pub bind: SocketAddr,

    /// Directory served under /static (default: the assets bundled with kitchen-server)
    #[arg(long, env = "KITCHEN_STATIC_DIR")]
    pub static_dir: Option<PathBuf>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let db_config = DatabaseConfig::from_env().context("Database is not configured")?;

    tracing::info!("Starting kitchen server on {}", args.bind);

    let pool = db::connect(&db_config)
        .await
        .context("Failed to create database pool")?;
    schema::init(&pool)
        .await
        .context("Failed to initialize database schema")?;

    let defaults = ServerConfig::default();
    let config = ServerConfig {
        bind_addr: args.bind,
        static_dir: args.static_dir.unwrap_or(defaults.static_dir),
        cors_permissive: args.cors_permissive,
    };

    // Run server (blocks until shutdown)
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
