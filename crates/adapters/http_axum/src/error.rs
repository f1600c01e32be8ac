//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use friday_domain::error::FridayError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Every API failure, rendered as `{"error": ...}` with an appropriate status.
pub enum ApiError {
    /// Failure reported by the application layer.
    Domain(FridayError),
    /// The request body is missing, not JSON, or not the expected shape.
    NoData,
    /// A control request without an `action` field.
    NoAction,
}

impl From<FridayError> for ApiError {
    fn from(err: FridayError) -> Self {
        Self::Domain(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::NoData => (StatusCode::BAD_REQUEST, "No data provided".to_string()),
            Self::NoAction => (StatusCode::BAD_REQUEST, "No action provided".to_string()),
            Self::Domain(FridayError::Validation(err)) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            Self::Domain(FridayError::UnknownDevice(err)) => {
                tracing::warn!(device = %err.name, "control request for unknown device");
                (StatusCode::BAD_REQUEST, "Unknown device".to_string())
            }
            Self::Domain(FridayError::Internal(err)) => {
                tracing::error!(error = %err, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
