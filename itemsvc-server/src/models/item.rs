//! Item payload and row types

use serde::Deserialize;
use serde_json::{Map, Value};

/// Body of `POST /items/`.
///
/// `description` may be omitted or `null`. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewItem {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    pub quantity: i32,
}

/// Item row as read back from the `items` table: every column, keyed by
/// column name.
pub type ItemRow = Map<String, Value>;
