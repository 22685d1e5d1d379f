//! Error types for the forecast generator and the HTTP boundary.
//!
//! [`ForecastError`] is raised by the generator; [`ApiError`] is what handlers
//! return and knows how to render itself as `{"detail": "..."}`.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use tracing::error;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ForecastError {
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Unknown id on `/predict` (400)
    #[error("Unknown temple: {0}")]
    UnknownLocation(String),

    /// Date not in `YYYY-MM-DD` form (400)
    #[error("Invalid date format. Use YYYY-MM-DD")]
    InvalidDateFormat,

    /// Unknown id on status and surge endpoints (404)
    #[error("Temple not found: {0}")]
    LocationNotFound(String),

    /// Rejected request body (400)
    #[error("{0}")]
    BadRequest(String),

    /// Anything else (500)
    #[error("{0}")]
    Internal(String),
}

impl From<ForecastError> for ApiError {
    fn from(err: ForecastError) -> Self {
        match err {
            ForecastError::InvalidDate(_) => ApiError::InvalidDateFormat,
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::UnknownLocation(_) | ApiError::InvalidDateFormat | ApiError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::LocationNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Internal(msg) = self {
            error!(error = %msg, "Internal error occurred");
        }
        HttpResponse::build(self.status_code()).json(json!({ "detail": self.to_string() }))
    }
}
