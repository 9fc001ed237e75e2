//! Database connection management
//!
//! Connections are opened from the endpoint URL with the credential applied
//! as the password, so the token never has to be spliced into the URL.

use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

use crate::config::DatabaseConfig;

/// Default maximum connections for the pool.
/// Kept low for a single-user application.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Build connect options from configuration.
pub fn connect_options(config: &DatabaseConfig) -> Result<PgConnectOptions, sqlx::Error> {
    Ok(PgConnectOptions::from_str(&config.url)?.password(&config.auth_token))
}

/// Open a connection pool.
///
/// # Errors
///
/// Returns an error if the URL is malformed or the first connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = connect(&DatabaseConfig::from_env()?).await?;
/// ```
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    connect_with_options(config, DEFAULT_MAX_CONNECTIONS).await
}

/// Open a connection pool with a custom connection cap.
pub async fn connect_with_options(
    config: &DatabaseConfig,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_with(connect_options(config)?)
        .await
}

/// Create a pool that connects on first use.
///
/// Nothing touches the network until a query runs, which lets router tests
/// exercise endpoints that never reach the database.
pub fn connect_lazy(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    Ok(PgPoolOptions::new()
        .max_connections(DEFAULT_MAX_CONNECTIONS)
        .connect_lazy_with(connect_options(config)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests require a real database
    // Run with: DATABASE_URL=postgres://... DATABASE_AUTH_TOKEN=... cargo test -- --ignored

    #[test]
    fn rejects_malformed_url() {
        let config = DatabaseConfig {
            url: "definitely not a url".into(),
            auth_token: "secret".into(),
        };
        assert!(connect_options(&config).is_err());
    }

    #[tokio::test]
    async fn lazy_pool_does_not_connect() {
        let config = DatabaseConfig {
            url: "postgres://kitchen@127.0.0.1:1/kitchen".into(),
            auth_token: "secret".into(),
        };
        let pool = connect_lazy(&config).expect("lazy pool");
        assert_eq!(pool.size(), 0);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_acquires_connection() {
        let config = DatabaseConfig::from_env().expect("database env required");
        let pool = connect(&config).await.expect("pool creation failed");

        let result: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }
}
