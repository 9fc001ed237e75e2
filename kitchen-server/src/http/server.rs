//! Axum server setup
//!
//! Server skeleton with:
//! - Same-origin by default, permissive CORS on request
//! - Static assets under /static
//! - Tracing middleware
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::routes;
use crate::config::ServerConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

/// Assemble every route, the static file service and middleware.
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    let mut app = Router::new()
        .merge(routes::health::router())
        .merge(routes::pages::router())
        .merge(routes::recipes::router())
        .merge(routes::fields::router())
        .merge(routes::urls::router())
        .merge(routes::autocomplete::router())
        .nest_service("/static", ServeDir::new(&config.static_dir));

    if config.cors_permissive {
        tracing::warn!("CORS: Permissive mode enabled - all origins allowed");
        app = app.layer(CorsLayer::permissive());
    }

    app.layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Run the HTTP server.
///
/// # Example
///
/// ```ignore
/// let pool = kitchen_server::db::connect(&DatabaseConfig::from_env()?).await?;
/// run_server(pool, ServerConfig::default()).await?;
/// ```
pub async fn run_server(pool: PgPool, config: ServerConfig) -> Result<(), ServerError> {
    if !config.static_dir.is_dir() {
        tracing::warn!(
            static_dir = %config.static_dir.display(),
            "static directory not found; /static will return 404"
        );
    }

    let app = build_router(AppState { pool }, &config);

    // Bind listener
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!(
        static_dir = %config.static_dir.display(),
        "Server listening on {}",
        config.bind_addr
    );

    // Run with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
