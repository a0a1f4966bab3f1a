//! Custom Axum extractors

use axum::body::Bytes;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::header;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::ValidationError;

/// JSON body extractor whose rejections go through `ApiError`.
///
/// A body sent without any `Content-Type` is still parsed as JSON; a
/// declared non-JSON content type is rejected.
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if req.headers().contains_key(header::CONTENT_TYPE) {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(validation_error)?;
            return Ok(Self(value));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ValidationError::Syntax {
                reason: e.body_text(),
            })?;
        let value = serde_json::from_slice(&bytes).map_err(decode_error)?;
        Ok(Self(value))
    }
}

fn validation_error(rejection: JsonRejection) -> ValidationError {
    match rejection {
        JsonRejection::MissingJsonContentType(_) => ValidationError::ContentType,
        JsonRejection::JsonDataError(e) => ValidationError::Schema {
            reason: e.body_text(),
        },
        other => ValidationError::Syntax {
            reason: other.body_text(),
        },
    }
}

fn decode_error(e: serde_json::Error) -> ValidationError {
    if e.is_data() {
        ValidationError::Schema {
            reason: e.to_string(),
        }
    } else {
        ValidationError::Syntax {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_is_schema_error() {
        let err = serde_json::from_slice::<crate::models::NewItem>(br#"{"name":"Nut"}"#)
            .unwrap_err();
        assert!(matches!(decode_error(err), ValidationError::Schema { .. }));
    }

    #[test]
    fn truncated_body_is_syntax_error() {
        let err = serde_json::from_slice::<crate::models::NewItem>(br#"{"name":"#).unwrap_err();
        assert!(matches!(decode_error(err), ValidationError::Syntax { .. }));
    }
}
