//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use printbill_domain::error::{PrintBillError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`PrintBillError`] to an HTTP response with appropriate status code.
pub struct ApiError(PrintBillError);

impl From<PrintBillError> for ApiError {
    fn from(err: PrintBillError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            PrintBillError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            PrintBillError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            PrintBillError::Conflict(err) => (StatusCode::CONFLICT, err.to_string()),
            PrintBillError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
