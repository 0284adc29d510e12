//! Business logic services for the Retail Forecast server

pub mod catalog;
pub mod forecast;

pub use forecast::ForecastService;
