//! Item endpoints
//!
//! Both paths are served with and without the trailing slash.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use sqlx::PgPool;

use crate::db::ItemRepo;
use crate::http::error::ApiError;
use crate::http::extractors::ValidJson;
use crate::models::{ItemRow, NewItem};
use crate::state::AppState;

/// Create item response
#[derive(Serialize)]
pub struct CreatedResponse {
    pub message: &'static str,
}

/// List items response
#[derive(Serialize)]
pub struct ItemsResponse {
    pub items: Vec<ItemRow>,
}

fn require_pool(state: &AppState) -> Result<&PgPool, ApiError> {
    state.pool().ok_or(ApiError::PoolUnavailable)
}

/// POST /items/ - insert one item
async fn create_item(
    State(state): State<AppState>,
    ValidJson(item): ValidJson<NewItem>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let pool = require_pool(&state)?;

    ItemRepo::new(pool)
        .insert(&item)
        .await
        .map_err(|e| ApiError::query_failed("Error creating item", e))?;

    Ok(Json(CreatedResponse {
        message: "Item created successfully",
    }))
}

/// GET /items/ - every row, unordered
async fn list_items(State(state): State<AppState>) -> Result<Json<ItemsResponse>, ApiError> {
    let pool = require_pool(&state)?;

    let items = ItemRepo::new(pool)
        .list()
        .await
        .map_err(|e| ApiError::query_failed("Error retrieving items", e))?;

    Ok(Json(ItemsResponse { items }))
}

/// Item routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/items/", get(list_items).post(create_item))
        .route("/items", get(list_items).post(create_item))
}
