//! Environment-supplied configuration
//!
//! The database endpoint and credential are both required. A missing or blank
//! value is a startup error, never a silent default.

use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Environment variable holding the database endpoint
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

/// Environment variable holding the database credential
pub const DATABASE_AUTH_TOKEN_VAR: &str = "DATABASE_AUTH_TOKEN";

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set (copy .env.example to .env and add your database credentials)")]
    Missing(&'static str),
}

/// Database connection settings
#[derive(Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub auth_token: String,
}

impl DatabaseConfig {
    /// Read both settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary lookup (environment, test map, ...).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &'static str| {
            lookup(key)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        Ok(Self {
            url: get(DATABASE_URL_VAR)?,
            auth_token: get(DATABASE_AUTH_TOKEN_VAR)?,
        })
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &self.url)
            .field("auth_token", &"<redacted>")
            .finish()
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 0.0.0.0:8000)
    pub bind_addr: SocketAddr,

    /// Directory served under /static
    pub static_dir: PathBuf,

    /// Allow any origin (default: false = no cross-origin access)
    pub cors_permissive: bool,
}

/// Assets shipped with this crate (`kitchen-server/static`)
pub fn default_static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            static_dir: default_static_dir(),
            cors_permissive: false,
        }
    }
}
