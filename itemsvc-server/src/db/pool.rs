//! Database connection pool management
//!
//! Startup connectivity failure is not fatal: the error is logged and the
//! service runs without a pool. There is no retry and no reconnection.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use url::Url;

/// Create a PostgreSQL connection pool.
///
/// Connects eagerly so an unreachable database is reported here rather
/// than on the first request.
///
/// # Errors
///
/// Returns an error if the URL is invalid or the connection fails.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Create the pool, or log the failure and return `None`.
pub async fn connect_or_degrade(database_url: &str, max_connections: u32) -> Option<PgPool> {
    let target = redact_url(database_url);

    match create_pool(database_url, max_connections).await {
        Ok(pool) => {
            tracing::info!(database = %target, max_connections, "Database pool established");
            Some(pool)
        }
        Err(e) => {
            tracing::error!(database = %target, error = %e, "Error connecting to the database");
            tracing::error!("Failed to connect to the database; item routes will return 500");
            None
        }
    }
}

/// Close the pool if one was established, waiting for checked-out
/// connections to be returned.
pub async fn close_pool(pool: Option<&PgPool>) {
    if let Some(pool) = pool {
        pool.close().await;
        tracing::info!("Database pool closed");
    }
}

/// Logged in place of a connection string that does not parse as a URL
const UNPARSEABLE_URL: &str = "<unparseable database url>";

/// Replace the password in a connection URL with `***` for logging.
///
/// URLs without a password are returned unchanged. Input that is not a
/// URL is never echoed.
pub fn redact_url(database_url: &str) -> String {
    let mut url = match Url::parse(database_url) {
        Ok(url) if !url.cannot_be_a_base() => url,
        _ => return UNPARSEABLE_URL.to_string(),
    };

    if url.password().is_some() && url.set_password(Some("***")).is_err() {
        return UNPARSEABLE_URL.to_string();
    }

    url.to_string()
}
