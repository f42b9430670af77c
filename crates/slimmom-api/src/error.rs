//! Maps domain errors to HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use slimmom_core::error::{AppError, ErrorKind};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// HTTP-facing wrapper around `AppError`.
///
/// Handlers and extractors return this type so that `?` on any domain
/// result converts into an HTTP response at the API boundary.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status = match err.kind {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::Authentication => StatusCode::UNAUTHORIZED,
            ErrorKind::Authorization => StatusCode::FORBIDDEN,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::Database
            | ErrorKind::Configuration
            | ErrorKind::Mail
            | ErrorKind::Internal => {
                tracing::error!(error = %err, "internal server error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ApiErrorResponse {
            error: err.kind.to_string(),
            message: err.message,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        ApiError::from(err).into_response().status()
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_of(AppError::validation("bad")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(AppError::authentication("no")),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(AppError::authorization("no")),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            status_of(AppError::not_found("gone")),
            StatusCode::NOT_FOUND
        );
        assert_eq!(status_of(AppError::conflict("dup")), StatusCode::CONFLICT);
        assert_eq!(
            status_of(AppError::internal("boom")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(AppError::mail("smtp down")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
