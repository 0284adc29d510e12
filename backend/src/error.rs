//! Error handling for the Retail Forecast server
//!
//! Provides consistent JSON error responses

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::ForecastError;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    // Engine errors
    #[error(transparent)]
    Forecast(#[from] ForecastError),

    #[error("Export error: {0}")]
    Export(String),

    // Malformed query strings or bodies
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl AppError {
    fn status_and_detail(&self) -> (StatusCode, ErrorDetail) {
        match self {
            AppError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                ErrorDetail {
                    code: "NOT_FOUND".to_string(),
                    message: format!("{} not found", resource),
                    field: None,
                },
            ),
            AppError::Forecast(err) => {
                let code = match err {
                    ForecastError::InvalidHorizon(_) => "INVALID_HORIZON",
                    ForecastError::InvalidMonth(_) => "INVALID_MONTH",
                    ForecastError::InvalidInput { .. } => "VALIDATION_ERROR",
                    ForecastError::InvalidMultiplier { .. } => "INVALID_MULTIPLIER",
                    ForecastError::InvalidSafetyBuffer { .. } => "INVALID_SAFETY_BUFFER",
                };
                (
                    StatusCode::BAD_REQUEST,
                    ErrorDetail {
                        code: code.to_string(),
                        message: err.to_string(),
                        field: err.field().map(str::to_string),
                    },
                )
            }
            AppError::Export(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "EXPORT_ERROR".to_string(),
                    message: format!("Export error: {}", msg),
                    field: None,
                },
            ),
            AppError::Rejected { status, message } => (
                *status,
                ErrorDetail {
                    code: "INVALID_REQUEST".to_string(),
                    message: message.clone(),
                    field: None,
                },
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = self.status_and_detail();

        if status.is_server_error() {
            tracing::error!("Error: {:?}", self);
        } else {
            tracing::debug!("Request rejected: {}", self);
        }

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_horizon_is_bad_request() {
        let (status, detail) =
            AppError::from(ForecastError::InvalidHorizon(45)).status_and_detail();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(detail.code, "INVALID_HORIZON");
        assert_eq!(detail.field.as_deref(), Some("horizon_days"));
    }

    #[test]
    fn test_input_error_carries_field() {
        let err = ForecastError::invalid_input("inputs[2].sku", "SKU must be at least 3 characters");
        let (status, detail) = AppError::from(err).status_and_detail();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(detail.field.as_deref(), Some("inputs[2].sku"));
    }

    #[test]
    fn test_not_found() {
        let (status, detail) = AppError::NotFound("Route /nope".to_string()).status_and_detail();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(detail.message, "Route /nope not found");
    }

    #[test]
    fn test_rejection_keeps_status() {
        let (status, detail) = AppError::Rejected {
            status: StatusCode::UNSUPPORTED_MEDIA_TYPE,
            message: "Expected request with `Content-Type: application/json`".to_string(),
        }
        .status_and_detail();
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(detail.code, "INVALID_REQUEST");
    }
}
