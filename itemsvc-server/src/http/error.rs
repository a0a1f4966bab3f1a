//! API error type with IntoResponse
//!
//! Every failure a handler can hit is one of these kinds; the status code
//! and body are decided here and nowhere else.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationError;

/// Detail text when the pool was never established
pub const POOL_UNAVAILABLE_DETAIL: &str = "Database connection not established.";

/// API error type with HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Startup connection failed; lasts for the process lifetime (500)
    PoolUnavailable,

    /// Request body rejected before database work (422)
    ValidationFailed(ValidationError),

    /// Statement or checkout failed; carries the driver text (500)
    QueryFailed(String),
}

impl ApiError {
    /// Wrap a database error with the operation it interrupted.
    pub fn query_failed(context: &str, err: DbError) -> Self {
        Self::QueryFailed(format!("{}: {}", context, err))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::PoolUnavailable | Self::QueryFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ValidationFailed(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    pub fn detail(&self) -> String {
        match self {
            Self::PoolUnavailable => POOL_UNAVAILABLE_DETAIL.to_string(),
            Self::ValidationFailed(e) => e.to_string(),
            Self::QueryFailed(message) => message.clone(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = self.detail();

        match &self {
            Self::ValidationFailed(_) => tracing::warn!("Rejected request body: {}", detail),
            _ => tracing::error!(status = status.as_u16(), "{}", detail),
        }

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::ValidationFailed(e)
    }
}
