//! HTTP handlers for the Retail Forecast API

pub mod forecast;
pub mod health;

pub use forecast::*;
pub use health::*;
