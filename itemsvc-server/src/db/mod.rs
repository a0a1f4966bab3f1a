//! Database layer - connection pool and repositories
//!
//! - Pool is created once at startup and passed through router state
//! - Every statement runs on a connection checked out for that request only
//! - `SELECT *` rows are decoded column by column, whatever the table shape
//! - No schema management; `sql/items.sql` documents the expected table

pub mod pool;
pub mod repos;
pub mod row;

pub use pool::{close_pool, connect_or_degrade, create_pool, redact_url};
pub use repos::{DbError, ItemRepo};
pub use row::row_to_json;
