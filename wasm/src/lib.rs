//! WebAssembly module for the Retail Dashboard
//!
//! Provides client-side computation for:
//! - Season resolution and multiplier lookup
//! - Category demand forecasts
//! - Prioritized reorder suggestions
//!
//! Forecast functions take and return JSON so the dashboard can render
//! offline with the same numbers the backend serves.

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::{prioritize, ForecastEngine};

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::log_1(&"Retail forecast engine loaded".into());
}

fn parse_date(date_iso: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(date_iso, "%Y-%m-%d")
        .map_err(|e| format!("Invalid date '{}': {}", date_iso, e))
}

fn browser_today() -> Result<NaiveDate, String> {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
        .ok_or_else(|| "Browser clock returned an invalid date".to_string())
}

fn season_name(month: u32) -> Result<String, String> {
    shared::resolve_season(month)
        .map(|season| season.to_string())
        .map_err(|e| e.to_string())
}

fn multiplier(category: &str, season: &str) -> Result<f64, String> {
    let season: Season = season.parse().map_err(|e: shared::ForecastError| e.to_string())?;
    Ok(shared::multiplier_for(category, season)
        .to_f64()
        .unwrap_or(1.0))
}

fn forecast_json(inputs_json: &str, horizon_days: u32, date: NaiveDate) -> Result<String, String> {
    let inputs: Vec<CategoryForecastInput> = serde_json::from_str(inputs_json)
        .map_err(|e| format!("Invalid category inputs JSON: {}", e))?;
    let horizon = ForecastHorizon::try_from(horizon_days).map_err(|e| e.to_string())?;

    let forecasts = ForecastEngine::default()
        .forecast_categories(&inputs, horizon, date)
        .map_err(|e| e.to_string())?;

    serde_json::to_string(&forecasts).map_err(|e| e.to_string())
}

fn suggestions_json(inputs_json: &str, date: NaiveDate) -> Result<String, String> {
    let inputs: Vec<ReorderSuggestionInput> = serde_json::from_str(inputs_json)
        .map_err(|e| format!("Invalid product inputs JSON: {}", e))?;

    let suggestions = ForecastEngine::default()
        .generate_suggestions(&inputs, date)
        .map_err(|e| e.to_string())?;

    serde_json::to_string(&prioritize(suggestions)).map_err(|e| e.to_string())
}

fn to_js(result: Result<String, String>) -> Result<String, JsValue> {
    result.map_err(|e| JsValue::from_str(&e))
}

/// Season name for a 0-indexed month (January = 0)
#[wasm_bindgen]
pub fn season_for_month(month: u32) -> Result<String, JsValue> {
    to_js(season_name(month))
}

/// Demand multiplier for a category in a named season
#[wasm_bindgen]
pub fn seasonal_multiplier(category: &str, season: &str) -> Result<f64, JsValue> {
    multiplier(category, season).map_err(|e| JsValue::from_str(&e))
}

/// Forecast categories as of an ISO date (YYYY-MM-DD)
#[wasm_bindgen]
pub fn forecast_categories(
    inputs_json: &str,
    horizon_days: u32,
    date_iso: &str,
) -> Result<String, JsValue> {
    to_js(parse_date(date_iso).and_then(|date| forecast_json(inputs_json, horizon_days, date)))
}

/// Forecast categories as of the browser's current date
#[wasm_bindgen]
pub fn forecast_categories_today(inputs_json: &str, horizon_days: u32) -> Result<String, JsValue> {
    to_js(browser_today().and_then(|date| forecast_json(inputs_json, horizon_days, date)))
}

/// Prioritized reorder suggestions as of an ISO date (YYYY-MM-DD)
#[wasm_bindgen]
pub fn reorder_suggestions(inputs_json: &str, date_iso: &str) -> Result<String, JsValue> {
    to_js(parse_date(date_iso).and_then(|date| suggestions_json(inputs_json, date)))
}

/// Prioritized reorder suggestions as of the browser's current date
#[wasm_bindgen]
pub fn reorder_suggestions_today(inputs_json: &str) -> Result<String, JsValue> {
    to_js(browser_today().and_then(|date| suggestions_json(inputs_json, date)))
}

fn stockout_days(current_stock: u32, adjusted_daily_sales: f64) -> Result<u32, String> {
    let rate = rust_decimal::Decimal::try_from(adjusted_daily_sales)
        .map_err(|e| format!("Invalid daily sales rate {}: {}", adjusted_daily_sales, e))?;
    shared::days_until_stockout(current_stock, shared::round_rate(rate))
        .ok_or_else(|| "Days until stockout exceed the supported range".to_string())
}

/// Days of cover at a daily rate, 999 when nothing sells
#[wasm_bindgen]
pub fn days_until_stockout(current_stock: u32, adjusted_daily_sales: f64) -> Result<u32, JsValue> {
    stockout_days(current_stock, adjusted_daily_sales).map_err(|e| JsValue::from_str(&e))
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_browser_today_matches_js_clock() {
        let today = browser_today().unwrap();
        let now = js_sys::Date::new_0();
        assert_eq!(today.format("%Y").to_string(), now.get_full_year().to_string());
    }

    #[wasm_bindgen_test]
    fn test_forecast_categories_today() {
        let inputs = r#"[{"category": "Frames", "current_stock": 0,
                          "base_daily_sales": "0", "confidence": "low"}]"#;
        let output = forecast_categories_today(inputs, 30).unwrap();
        assert!(output.contains("\"days_until_stockout\":999"));
    }

    #[wasm_bindgen_test]
    fn test_days_until_stockout_rejects_nan() {
        assert!(days_until_stockout(10, f64::NAN).is_err());
    }
}
