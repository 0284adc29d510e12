//! Domain models for the demand forecasting engine

mod category_forecast;
mod multiplier;
mod reorder;
mod season;
mod summary;

pub use category_forecast::*;
pub use multiplier::*;
pub use reorder::*;
pub use season::*;
pub use summary::*;
