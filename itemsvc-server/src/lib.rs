//! itemsvc-server: HTTP item service
//!
//! Exposes `POST /items/` and `GET /items/` over a PostgreSQL pool.
//! The pool is optional at runtime: if it cannot be established at
//! startup the server still runs and every item request answers 500.

pub mod config;
pub mod db;
pub mod http;
pub mod models;
pub mod state;

pub use config::{ConfigError, ServiceConfig};
pub use http::{build_router, run_server, ApiError, ServerConfig, ServerError};
pub use state::AppState;

/// Connect the pool (non-fatal) and run the HTTP server until shutdown.
pub async fn serve(config: ServiceConfig) -> Result<(), ServerError> {
    let pool = db::connect_or_degrade(&config.database_url, config.max_connections).await;
    run_server(pool, ServerConfig::from(&config)).await
}
