//! Errors raised by the forecasting engine

use thiserror::Error;

use crate::models::Season;

/// Forecasting error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    #[error("Unsupported forecast horizon: {0} days (expected 30, 60 or 90)")]
    InvalidHorizon(u32),

    #[error("Month index out of range: {0} (expected 0-11)")]
    InvalidMonth(u32),

    #[error("Invalid input for {field}: {message}")]
    InvalidInput { field: String, message: String },

    #[error("Multiplier for {category} in {season} is missing or not positive")]
    InvalidMultiplier { category: String, season: Season },

    #[error("Safety buffer must be at most {max} days, got {days}")]
    InvalidSafetyBuffer { days: u32, max: u32 },
}

impl ForecastError {
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        ForecastError::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the offending field, when the error is tied to one
    pub fn field(&self) -> Option<&str> {
        match self {
            ForecastError::InvalidHorizon(_) => Some("horizon_days"),
            ForecastError::InvalidMonth(_) => Some("month"),
            ForecastError::InvalidInput { field, .. } => Some(field),
            ForecastError::InvalidMultiplier { .. } => Some("multipliers"),
            ForecastError::InvalidSafetyBuffer { .. } => Some("safety_buffer_days"),
        }
    }
}

/// Result alias for engine operations
pub type ForecastResult<T> = Result<T, ForecastError>;
