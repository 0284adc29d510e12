//! Demand forecasting and reorder recommendation engine
//!
//! Every run resolves the season from the supplied date, applies the seasonal
//! multiplier to each base rate and derives the stockout and reorder figures.
//! All rounding is half-away-from-zero on exact decimals: rates to one decimal
//! place, counts to whole units.

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{ForecastError, ForecastResult};
use crate::models::{
    CategoryForecast, CategoryForecastInput, ForecastSummary, ReorderSuggestion,
    ReorderSuggestionInput, Season, SeasonalMultiplierTable,
};
use crate::types::{ForecastHorizon, Trend};
use crate::validation::{check_safety_buffer_days, validate_batch};

/// Days of cover added on top of projected demand
pub const DEFAULT_SAFETY_BUFFER_DAYS: u32 = 15;

/// Reported when stock never runs out at the current velocity
pub const STOCKOUT_SENTINEL_DAYS: u32 = 999;

/// Forecasting engine holding the immutable multiplier table
#[derive(Debug, Clone)]
pub struct ForecastEngine {
    multipliers: SeasonalMultiplierTable,
    safety_buffer_days: u32,
}

impl Default for ForecastEngine {
    fn default() -> Self {
        Self {
            multipliers: SeasonalMultiplierTable::standard(),
            safety_buffer_days: DEFAULT_SAFETY_BUFFER_DAYS,
        }
    }
}

impl ForecastEngine {
    pub fn new(
        multipliers: SeasonalMultiplierTable,
        safety_buffer_days: u32,
    ) -> ForecastResult<Self> {
        check_safety_buffer_days(safety_buffer_days)?;
        Ok(Self {
            multipliers,
            safety_buffer_days,
        })
    }

    pub fn multipliers(&self) -> &SeasonalMultiplierTable {
        &self.multipliers
    }

    pub fn safety_buffer_days(&self) -> u32 {
        self.safety_buffer_days
    }

    /// Project demand for each category over the horizon, in input order
    pub fn forecast_categories(
        &self,
        inputs: &[CategoryForecastInput],
        horizon: ForecastHorizon,
        now: NaiveDate,
    ) -> ForecastResult<Vec<CategoryForecast>> {
        validate_batch("inputs", inputs)?;

        let season = Season::from_date(&now);
        let horizon_days = Decimal::from(horizon.days());
        let buffer_days = Decimal::from(self.safety_buffer_days);

        let forecasts = inputs
            .iter()
            .enumerate()
            .map(|(index, input)| -> ForecastResult<CategoryForecast> {
                let multiplier = self.multipliers.multiplier_for(&input.category, season);
                let adjusted = adjusted_daily_sales(input.base_daily_sales, multiplier)
                    .ok_or_else(|| out_of_range(index, "base_daily_sales"))?;
                let projected_demand = adjusted
                    .checked_mul(horizon_days)
                    .and_then(round_count)
                    .ok_or_else(|| out_of_range(index, "base_daily_sales"))?;
                let buffer = adjusted
                    .checked_mul(buffer_days)
                    .and_then(round_count)
                    .ok_or_else(|| out_of_range(index, "base_daily_sales"))?;
                let reorder_quantity = (i64::from(projected_demand)
                    - i64::from(input.current_stock)
                    + i64::from(buffer))
                .max(0);
                let reorder_quantity = u32::try_from(reorder_quantity)
                    .map_err(|_| out_of_range(index, "base_daily_sales"))?;
                let days_until_stockout = days_until_stockout(input.current_stock, adjusted)
                    .ok_or_else(|| out_of_range(index, "current_stock"))?;

                Ok(CategoryForecast {
                    category: input.category.clone(),
                    season,
                    horizon_days: horizon.days(),
                    current_stock: input.current_stock,
                    base_daily_sales: input.base_daily_sales,
                    multiplier,
                    adjusted_daily_sales: adjusted,
                    projected_demand,
                    days_until_stockout,
                    reorder_quantity,
                    trend: Trend::from_multiplier(multiplier),
                    confidence: input.confidence,
                })
            })
            .collect::<ForecastResult<Vec<_>>>()?;

        Ok(forecasts)
    }

    /// Build product suggestions, in input order
    pub fn generate_suggestions(
        &self,
        inputs: &[ReorderSuggestionInput],
        now: NaiveDate,
    ) -> ForecastResult<Vec<ReorderSuggestion>> {
        validate_batch("inputs", inputs)?;

        let season = Season::from_date(&now);

        let suggestions = inputs
            .iter()
            .enumerate()
            .map(|(index, input)| -> ForecastResult<ReorderSuggestion> {
                let multiplier = self.multipliers.multiplier_for(&input.category, season);
                let adjusted = adjusted_daily_sales(input.base_daily_sales, multiplier)
                    .ok_or_else(|| out_of_range(index, "base_daily_sales"))?;
                let days_until_stockout = days_until_stockout(input.current_stock, adjusted)
                    .ok_or_else(|| out_of_range(index, "current_stock"))?;

                Ok(ReorderSuggestion {
                    sku: input.sku.clone(),
                    name: input.name.clone(),
                    category: input.category.clone(),
                    season,
                    current_stock: input.current_stock,
                    base_daily_sales: input.base_daily_sales,
                    multiplier,
                    adjusted_daily_sales: adjusted,
                    days_until_stockout,
                    action: input.action,
                    suggested_quantity: input.suggested_quantity,
                    trend: Trend::from_multiplier(multiplier),
                    confidence: input.confidence,
                    rationale: input.rationale.render(season).to_string(),
                })
            })
            .collect::<ForecastResult<Vec<_>>>()?;

        Ok(suggestions)
    }

    /// Run both generators and aggregate the headline figures
    pub fn summarize(
        &self,
        categories: &[CategoryForecastInput],
        products: &[ReorderSuggestionInput],
        horizon: ForecastHorizon,
        now: NaiveDate,
    ) -> ForecastResult<ForecastSummary> {
        let forecasts = self.forecast_categories(categories, horizon, now)?;
        let suggestions = self.generate_suggestions(products, now)?;
        Ok(ForecastSummary::build(
            Season::from_date(&now),
            horizon.days(),
            &forecasts,
            &suggestions,
        ))
    }
}

/// Order suggestions by action severity, keeping input order within an action
pub fn prioritize(mut suggestions: Vec<ReorderSuggestion>) -> Vec<ReorderSuggestion> {
    // `sort_by_key` is stable
    suggestions.sort_by_key(|s| s.action.severity());
    suggestions
}

fn out_of_range(index: usize, field: &str) -> ForecastError {
    ForecastError::invalid_input(
        format!("inputs[{}].{}", index, field),
        "Forecast figures exceed the supported range",
    )
}

/// Base rate scaled by the seasonal multiplier, one decimal place
///
/// `None` when the product does not fit in a `Decimal`.
pub fn adjusted_daily_sales(base_daily_sales: Decimal, multiplier: Decimal) -> Option<Decimal> {
    base_daily_sales.checked_mul(multiplier).map(round_rate)
}

/// Whole days of cover at the adjusted rate, or the sentinel for zero velocity
///
/// `None` when the cover does not fit in a `u32`.
pub fn days_until_stockout(current_stock: u32, adjusted_daily_sales: Decimal) -> Option<u32> {
    if adjusted_daily_sales <= Decimal::ZERO {
        return Some(STOCKOUT_SENTINEL_DAYS);
    }
    Decimal::from(current_stock)
        .checked_div(adjusted_daily_sales)
        .and_then(round_count)
}

pub fn round_rate(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// Round to whole units; negative values clamp to zero, values past `u32::MAX` are `None`
pub fn round_count(value: Decimal) -> Option<u32> {
    if value <= Decimal::ZERO {
        return Some(0);
    }
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
}
