pub mod codes;
pub mod handlers;

pub use codes::ErrorCode;

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Standard error response structure for failures raised outside a domain
/// router (unknown routes, wrong methods).
///
/// - `code`: Integer error code for logging/monitoring (e.g., 1004)
/// - `error`: Machine-readable error identifier (e.g., "NOT_FOUND")
/// - `message`: Human-readable error message
///
/// # JSON Example
///
/// ```json
/// {
///   "code": 1004,
///   "error": "NOT_FOUND",
///   "message": "Resource not found"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Integer error code for logging and monitoring
    pub code: i32,
    /// Machine-readable error identifier for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
}

impl ErrorResponse {
    /// Body for `code` with its default message.
    pub fn from_code(code: ErrorCode) -> Self {
        Self {
            code: code.code(),
            error: code.as_str().to_string(),
            message: code.default_message().to_string(),
        }
    }
}

impl IntoResponse for ErrorCode {
    fn into_response(self) -> Response {
        tracing::debug!(error_code = self.code(), "{}", self.default_message());
        (self.status(), Json(ErrorResponse::from_code(self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use serde_json::json;

    #[test]
    fn test_error_response_from_code() {
        let body = serde_json::to_value(ErrorResponse::from_code(ErrorCode::NotFound)).unwrap();
        assert_eq!(
            body,
            json!({"code": 1004, "error": "NOT_FOUND", "message": "Resource not found"})
        );
    }

    #[test]
    fn test_error_code_into_response_status() {
        let response = ErrorCode::MethodNotAllowed.into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
