//! Unified API error type with Axum `IntoResponse` support.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use bx_catalog::CatalogError;

/// Grammar examples shown when no tier recognized the input.
pub const GRAMMAR_HINT: &str = "Неверный формат запроса. Примеры: 8008M, 177814M=55, SPA2000, B85";

/// API error type that converts to proper HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("bad request: {0}")]
    BadRequest(String),

    /// No tier produced an acceptable structured query. Retryable —
    /// distinct from a valid query that matched nothing.
    #[error("unrecognized query")]
    Unrecognized,

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        Self::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Unrecognized => {
                let body = json!({
                    "status": "unrecognized",
                    "hint": GRAMMAR_HINT,
                });
                (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(body)).into_response()
            }
            ApiError::BadRequest(msg) => error_response(StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => error_response(StatusCode::INTERNAL_SERVER_ERROR, msg),
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    let body = json!({
        "error": message,
        "status": status.as_u16(),
    });
    (status, axum::Json(body)).into_response()
}

/// Convenience alias.
pub type ApiResult<T> = Result<T, ApiError>;
