//! API error types with JSON responses.
//!
//! Every error leaves the server as `{"error": "<message>"}` with the
//! status implied by the core error variant. The body shape is flat on
//! purpose so browser clients can always read `body.error`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use jot_core::Error;

/// API error that can be returned from handlers.
///
/// Handlers mostly produce this via `?` on core service calls; the
/// `From` impl is derived from the inner error.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub Error);

impl ApiError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match &self.0 {
            // Duplicate registration reports 400 rather than 409, matching
            // what API clients of this service already expect.
            Error::Validation(_) | Error::DuplicateUser => StatusCode::BAD_REQUEST,
            Error::Authentication => StatusCode::UNAUTHORIZED,
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self.0, "Request failed");
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError(Error::validation("x")).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError(Error::DuplicateUser).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError(Error::Authentication).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError(Error::NotFound).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError(Error::internal("boom")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_body_is_flat() {
        let body = ErrorResponse {
            error: "note not found".to_string(),
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"error":"note not found"}"#);
    }

    #[test]
    fn test_message_passes_through() {
        let err = ApiError(Error::Authentication);
        assert_eq!(err.to_string(), "invalid credentials");
    }
}
