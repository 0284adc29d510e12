//! HTTP handlers for demand forecast and reorder suggestion endpoints

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::extract::{JsonBody, Query};
use crate::models::{CategoryForecastInput, ForecastHorizon, ForecastSummary, ReorderSuggestionInput};
use crate::services::catalog::{sample_categories, sample_products};
use crate::services::forecast::{MultiplierTableView, SeasonInfo};
use crate::services::ForecastService;
use crate::AppState;

#[derive(Deserialize)]
pub struct DateQuery {
    pub date: Option<NaiveDate>,
}

#[derive(Deserialize)]
pub struct ForecastQuery {
    pub horizon: Option<u32>,
    pub date: Option<NaiveDate>,
    pub format: Option<String>, // "json" or "csv"
}

/// Body for forecasting caller-supplied categories
#[derive(Deserialize)]
pub struct CategoryForecastRequest {
    pub horizon_days: Option<u32>,
    pub as_of: Option<NaiveDate>,
    pub inputs: Vec<CategoryForecastInput>,
}

/// Body for caller-supplied product suggestions
#[derive(Deserialize)]
pub struct SuggestionRequest {
    pub as_of: Option<NaiveDate>,
    pub inputs: Vec<ReorderSuggestionInput>,
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

fn resolve_horizon(state: &AppState, requested: Option<u32>) -> AppResult<ForecastHorizon> {
    match requested {
        Some(days) => Ok(ForecastHorizon::try_from(days)?),
        None => Ok(state.config.forecast.default_horizon_days),
    }
}

fn respond<T: Serialize>(data: Vec<T>, format: Option<&str>, filename: &str) -> AppResult<Response> {
    if format == Some("csv") {
        let csv = ForecastService::export_to_csv(&data)?;
        let disposition = format!("attachment; filename=\"{}\"", filename);
        Ok((
            [
                (header::CONTENT_TYPE, "text/csv".to_string()),
                (header::CONTENT_DISPOSITION, disposition),
            ],
            csv,
        )
            .into_response())
    } else {
        Ok(Json(data).into_response())
    }
}

/// Get the season for a date (defaults to today)
pub async fn get_season(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Json<SeasonInfo> {
    let service = ForecastService::new(state.engine.clone());
    Json(service.season_for(query.date.unwrap_or_else(today)))
}

/// Get the effective multiplier table
pub async fn get_multipliers(State(state): State<AppState>) -> Json<MultiplierTableView> {
    let service = ForecastService::new(state.engine.clone());
    Json(service.multiplier_table())
}

/// Forecast the dashboard's tracked categories
pub async fn get_category_forecast(
    State(state): State<AppState>,
    Query(query): Query<ForecastQuery>,
) -> AppResult<Response> {
    let horizon = resolve_horizon(&state, query.horizon)?;
    let service = ForecastService::new(state.engine.clone());
    let data = service.forecast_categories(
        &sample_categories(),
        horizon,
        query.date.unwrap_or_else(today),
    )?;
    respond(data, query.format.as_deref(), "category_forecast.csv")
}

/// Forecast caller-supplied categories
pub async fn post_category_forecast(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CategoryForecastRequest>,
) -> AppResult<Response> {
    let horizon = resolve_horizon(&state, request.horizon_days)?;
    let service = ForecastService::new(state.engine.clone());
    let data = service.forecast_categories(
        &request.inputs,
        horizon,
        request.as_of.unwrap_or_else(today),
    )?;
    Ok(Json(data).into_response())
}

/// Prioritized suggestions for the dashboard's tracked products
pub async fn get_reorder_suggestions(
    State(state): State<AppState>,
    Query(query): Query<ForecastQuery>,
) -> AppResult<Response> {
    let service = ForecastService::new(state.engine.clone());
    let data = service.reorder_suggestions(&sample_products(), query.date.unwrap_or_else(today))?;
    respond(data, query.format.as_deref(), "reorder_suggestions.csv")
}

/// Prioritized suggestions for caller-supplied products
pub async fn post_reorder_suggestions(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<SuggestionRequest>,
) -> AppResult<Response> {
    let service = ForecastService::new(state.engine.clone());
    let data = service.reorder_suggestions(&request.inputs, request.as_of.unwrap_or_else(today))?;
    Ok(Json(data).into_response())
}

/// Headline figures for the dashboard's tracked categories and products
pub async fn get_forecast_summary(
    State(state): State<AppState>,
    Query(query): Query<ForecastQuery>,
) -> AppResult<Json<ForecastSummary>> {
    let horizon = resolve_horizon(&state, query.horizon)?;
    let service = ForecastService::new(state.engine.clone());
    let summary = service.summary(
        &sample_categories(),
        &sample_products(),
        horizon,
        query.date.unwrap_or_else(today),
    )?;
    Ok(Json(summary))
}
