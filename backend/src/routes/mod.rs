//! Route definitions for the Retail Forecast API

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Demand forecasting and reorder suggestions
        .nest("/forecast", forecast_routes())
}

/// Forecast routes
fn forecast_routes() -> Router<AppState> {
    Router::new()
        .route("/season", get(handlers::get_season))
        .route("/multipliers", get(handlers::get_multipliers))
        .route(
            "/categories",
            get(handlers::get_category_forecast).post(handlers::post_category_forecast),
        )
        .route(
            "/suggestions",
            get(handlers::get_reorder_suggestions).post(handlers::post_reorder_suggestions),
        )
        .route("/summary", get(handlers::get_forecast_summary))
}
