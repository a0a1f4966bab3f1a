//! Item repository
//!
//! - insert: single parameterized INSERT, fields in fixed order
//! - list: unordered full-table scan, every column of every row

use sqlx::PgPool;

use super::DbError;
use crate::db::row::row_to_json;
use crate::models::{ItemRow, NewItem};

const INSERT_ITEM: &str =
    "INSERT INTO items (name, description, price, quantity) VALUES ($1, $2, $3, $4)";

const SELECT_ITEMS: &str = "SELECT * FROM items";

/// Item repository
pub struct ItemRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ItemRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert one item. Not retried on failure.
    pub async fn insert(&self, item: &NewItem) -> Result<(), DbError> {
        let mut conn = self.pool.acquire().await?;

        let result = sqlx::query(INSERT_ITEM)
            .bind(&item.name)
            .bind(item.description.as_deref())
            .bind(item.price)
            .bind(item.quantity)
            .execute(&mut *conn)
            .await?;

        tracing::debug!(rows = result.rows_affected(), "item inserted");
        Ok(())
    }

    /// Fetch every row. Order is whatever the database returns.
    pub async fn list(&self) -> Result<Vec<ItemRow>, DbError> {
        let mut conn = self.pool.acquire().await?;

        let rows = sqlx::query(SELECT_ITEMS).fetch_all(&mut *conn).await?;
        let items = rows.iter().map(row_to_json).collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(count = items.len(), "items listed");
        Ok(items)
    }
}
