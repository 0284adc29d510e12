//! Retail Forecast Server
//!
//! Serves seasonal demand forecasts and prioritized reorder suggestions
//! for the retail management dashboard.

use anyhow::Context;
use axum::{http::Uri, routing::get, Router};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod extract;
mod handlers;
mod models;
mod routes;
mod services;

pub use config::Config;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<shared::ForecastEngine>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rfe_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting Retail Forecast Server");
    tracing::info!("Environment: {}", config.environment);

    let engine = config
        .forecast
        .build_engine()
        .context("Invalid forecast configuration")?;

    tracing::info!(
        "Forecast engine ready: {} categories, {}-day safety buffer",
        engine.multipliers().len(),
        engine.safety_buffer_days()
    );

    // Create application state
    let state = AppState {
        engine: Arc::new(engine),
        config: Arc::new(config.clone()),
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api/v1", routes::api_routes())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Retail Forecast API v1.0"
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Fallback for unknown routes
async fn not_found(uri: Uri) -> error::AppError {
    error::AppError::NotFound(format!("Route {}", uri.path()))
}
