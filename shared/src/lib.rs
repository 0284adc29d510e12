//! Shared types and forecasting engine for the Retail Dashboard
//!
//! This crate contains the demand forecasting and reorder recommendation
//! engine used by the backend and, via WASM, by the dashboard frontend.

pub mod engine;
pub mod error;
pub mod models;
pub mod types;
pub mod validation;

pub use engine::*;
pub use error::*;
pub use models::*;
pub use types::*;
pub use validation::*;
