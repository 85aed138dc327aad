use axum::response::{IntoResponse, Response};

use super::ErrorCode;

/// Fallback for paths no router matches.
pub async fn not_found() -> Response {
    ErrorCode::NotFound.into_response()
}

/// Fallback for a known path hit with an unsupported method.
pub async fn method_not_allowed() -> Response {
    ErrorCode::MethodNotAllowed.into_response()
}
