//! HTTP server layer
//!
//! Axum server with:
//! - HTML pages and htmx fragments rendered by [`crate::render`]
//! - JSON autocomplete lists
//! - Request tracing
//! - Graceful shutdown

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

use axum::response::Html;
use maud::Markup;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerError};

/// Turn rendered markup into an HTML response body
pub(crate) fn html(markup: Markup) -> Html<String> {
    Html(markup.into_string())
}
