//! Application state shared across handlers

use sqlx::PgPool;
use std::sync::Arc;

/// Shared application state.
///
/// Holds the pool if it was established at startup. A `None` pool stays
/// `None` for the life of the process.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    pool: Option<PgPool>,
}

impl AppState {
    pub fn new(pool: Option<PgPool>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { pool }),
        }
    }

    pub fn pool(&self) -> Option<&PgPool> {
        self.inner.pool.as_ref()
    }

    pub fn has_pool(&self) -> bool {
        self.inner.pool.is_some()
    }
}
