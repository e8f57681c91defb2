//! MySQL pool for the `users` table
//!
//! The pool is the only state shared between requests. It is built once at
//! startup and handed to `UserRepo`; checkout is thread safe, so the data
//! access layer adds no locking of its own.

use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;

/// Pool size when `--max-connections` is not given.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Connect a pool of [`DEFAULT_MAX_CONNECTIONS`] connections.
///
/// ```ignore
/// let pool = create_pool("mysql://root@localhost/practice").await?;
/// let users = UserRepo::new(pool);
/// ```
pub async fn create_pool(database_url: &str) -> Result<MySqlPool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Connect a pool capped at `max_connections`.
///
/// Fails when the first connection cannot be established, so a bad
/// `DATABASE_URL` stops `userd serve` at startup rather than on the first
/// request.
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<MySqlPool, sqlx::Error> {
    MySqlPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
        .inspect_err(|e| tracing::error!(max_connections, error = %e, "failed to connect pool"))
}
