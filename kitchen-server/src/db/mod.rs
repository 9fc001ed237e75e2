//! Database layer - connection pool, schema and repositories
//!
//! - One pool shared by all handlers; no other in-process state
//! - Absence is a value (`None` / `false`), not an error
//! - Multi-statement writes run in a transaction

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::{connect, connect_lazy};
pub use repos::*;

/// Pool against the database named by the environment, with the schema applied.
#[cfg(test)]
pub(crate) async fn test_pool() -> sqlx::PgPool {
    let config = crate::config::DatabaseConfig::from_env().expect("database env required");
    let pool = connect(&config).await.expect("pool creation failed");
    schema::init(&pool).await.expect("schema init failed");
    pool
}

/// Name unlikely to collide with rows left behind by earlier test runs.
#[cfg(test)]
pub(crate) fn unique(prefix: &str) -> String {
    use std::sync::atomic::{AtomicU32, Ordering};
    static COUNTER: AtomicU32 = AtomicU32::new(0);

    let nanos = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{}-{:x}-{}", prefix, nanos, n)
}
