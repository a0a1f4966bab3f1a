//! Repository implementations for database access
//!
//! Each operation checks out one connection, runs one statement and
//! returns the connection to the pool when the guard drops.

pub mod items;

pub use items::ItemRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    #[error("column \"{column}\" has unsupported type {type_name}")]
    UnsupportedColumn { column: String, type_name: String },
}
