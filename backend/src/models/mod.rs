//! Domain models for the Retail Forecast server
//!
//! Re-exports models and types from the shared crate

pub use shared::models::*;
pub use shared::types::*;
