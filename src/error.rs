use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Everything a handler can fail with, mapped onto the wire contract.
///
/// The first four kinds all carry a client-facing message and serialize as
/// `{"success": false, "message": ...}`. `Store` is the catch-all for
/// unexpected driver failures and surfaces the raw error string with a 500,
/// matching the behavior of the service this replaces.
#[derive(Debug, PartialEq)]
pub enum ApiError {
    /// Missing or malformed input (400).
    Validation(String),
    /// Unique-constraint violation, e.g. username or title taken (400).
    Duplicate(String),
    /// Lookup by id or key missed (400).
    NotFound(String),
    /// Bad credentials or a missing/invalid token (401).
    Authentication(String),
    /// Any other persistence failure (500).
    Store(String),
}

impl From<mongodb::error::Error> for ApiError {
    fn from(err: mongodb::error::Error) -> Self {
        ApiError::Store(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(message)
            | ApiError::Duplicate(message)
            | ApiError::NotFound(message) => (
                StatusCode::BAD_REQUEST,
                Json(json!({"success": false, "message": message})),
            )
                .into_response(),
            ApiError::Authentication(message) => (
                StatusCode::UNAUTHORIZED,
                Json(json!({"success": false, "message": message})),
            )
                .into_response(),
            ApiError::Store(err) => {
                tracing::error!("store error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"error": err}))).into_response()
            }
        }
    }
}
