//! Validation utilities for forecast inputs
//!
//! Inputs are validated at the engine boundary; nothing inside the engine
//! produces negative rates or malformed identifiers.

use std::borrow::Cow;

use rust_decimal::Decimal;
use validator::{Validate, ValidationError};

use crate::error::{ForecastError, ForecastResult};

/// Longest safety buffer accepted from configuration
pub const MAX_SAFETY_BUFFER_DAYS: u32 = 365;

/// Highest base daily sales rate accepted, in units per day
pub const MAX_DAILY_SALES: u32 = 1_000_000;

// ============================================================================
// Field Validations
// ============================================================================

/// Validate that a daily sales rate is within 0 and `MAX_DAILY_SALES`
pub fn check_daily_sales(rate: Decimal) -> Result<(), &'static str> {
    if rate < Decimal::ZERO {
        return Err("Daily sales cannot be negative");
    }
    if rate > Decimal::from(MAX_DAILY_SALES) {
        return Err("Daily sales cannot exceed 1,000,000 units");
    }
    Ok(())
}

/// Validate SKU format (3-32 characters, uppercase alphanumeric and hyphens)
pub fn check_sku(sku: &str) -> Result<(), &'static str> {
    if sku.len() < 3 {
        return Err("SKU must be at least 3 characters");
    }
    if sku.len() > 32 {
        return Err("SKU must be at most 32 characters");
    }
    if !sku
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '-')
    {
        return Err("SKU must be uppercase alphanumeric or hyphen only");
    }
    if sku.starts_with('-') || sku.ends_with('-') {
        return Err("SKU cannot start or end with a hyphen");
    }
    Ok(())
}

/// Validate the safety buffer window
pub fn check_safety_buffer_days(days: u32) -> ForecastResult<()> {
    if days > MAX_SAFETY_BUFFER_DAYS {
        return Err(ForecastError::InvalidSafetyBuffer {
            days,
            max: MAX_SAFETY_BUFFER_DAYS,
        });
    }
    Ok(())
}

// ============================================================================
// Derive Hooks
// ============================================================================

pub fn validate_daily_sales(rate: &Decimal) -> Result<(), ValidationError> {
    check_daily_sales(*rate).map_err(|msg| validation_error("daily_sales_out_of_range", msg))
}

pub fn validate_sku(sku: &str) -> Result<(), ValidationError> {
    check_sku(sku).map_err(|msg| validation_error("invalid_sku", msg))
}

fn validation_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

/// Validate every item of an input batch
///
/// The first failure is reported as `{name}[{index}].{field}`.
pub fn validate_batch<T: Validate>(name: &str, items: &[T]) -> ForecastResult<()> {
    for (index, item) in items.iter().enumerate() {
        if let Err(errors) = item.validate() {
            let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
            fields.sort_by_key(|(field, _)| *field);

            let (field, message) = fields
                .first()
                .and_then(|(field, errs)| {
                    errs.first().map(|e| {
                        let message = e
                            .message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string());
                        (field.to_string(), message)
                    })
                })
                .unwrap_or_else(|| ("unknown".to_string(), "invalid value".to_string()));

            return Err(ForecastError::invalid_input(
                format!("{}[{}].{}", name, index, field),
                message,
            ));
        }
    }
    Ok(())
}
