//! kitchen-server: recipe bookmarks served as HTML and htmx fragments
//!
//! Recipes are filed under a cuisine, carry any number of source links and
//! tags, and are edited one field at a time in place.
//!
//! - [`config`]: environment-supplied settings
//! - [`models`]: validated input types
//! - [`db`]: pool, schema and repositories
//! - [`render`]: maud pages and fragments
//! - [`http`]: axum routes and server

pub mod config;
pub mod db;
pub mod http;
pub mod models;
pub mod render;

pub use config::{ConfigError, DatabaseConfig, ServerConfig};
pub use http::{build_router, run_server, AppState, ServerError};
