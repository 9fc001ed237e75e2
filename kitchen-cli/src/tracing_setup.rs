//! Tracing setup for the kitchen CLI
//!
//! Usage:
//!   kitchen --debug ...               # Debug logging to console
//!   RUST_LOG=kitchen_server=debug ... # Fine-grained log control
//!
//! Environment variables:
//!   RUST_LOG                          # Log filter (default: info)

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Enable debug logging (sets RUST_LOG=debug if not already set)
    pub debug: bool,
}

impl TracingConfig {
    fn filter(&self) -> EnvFilter {
        let default = if self.debug { "debug" } else { "info" };
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
    }
}

/// Initialize console tracing
pub fn init(config: &TracingConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(config.filter())
        .with_target(config.debug) // Show targets in debug mode
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
