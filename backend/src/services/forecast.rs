//! Forecast service wrapping the shared engine for HTTP handlers

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use shared::{
    prioritize, CategoryForecast, CategoryForecastInput, CategoryMultipliers, ForecastEngine,
    ForecastHorizon, ForecastSummary, ReorderSuggestion, ReorderSuggestionInput, Season,
};

use crate::error::{AppError, AppResult};

/// Forecast service for category projections and reorder suggestions
#[derive(Clone)]
pub struct ForecastService {
    engine: Arc<ForecastEngine>,
}

/// Season resolved for a date
#[derive(Debug, Serialize)]
pub struct SeasonInfo {
    pub date: NaiveDate,
    pub season: Season,
}

/// Effective multiplier table and safety buffer
#[derive(Debug, Serialize)]
pub struct MultiplierTableView {
    pub safety_buffer_days: u32,
    pub categories: Vec<CategoryMultipliers>,
}

impl ForecastService {
    pub fn new(engine: Arc<ForecastEngine>) -> Self {
        Self { engine }
    }

    pub fn season_for(&self, date: NaiveDate) -> SeasonInfo {
        SeasonInfo {
            date,
            season: Season::from_date(&date),
        }
    }

    pub fn multiplier_table(&self) -> MultiplierTableView {
        MultiplierTableView {
            safety_buffer_days: self.engine.safety_buffer_days(),
            categories: self.engine.multipliers().rows(),
        }
    }

    /// Category forecasts, in input order
    pub fn forecast_categories(
        &self,
        inputs: &[CategoryForecastInput],
        horizon: ForecastHorizon,
        as_of: NaiveDate,
    ) -> AppResult<Vec<CategoryForecast>> {
        let forecasts = self.engine.forecast_categories(inputs, horizon, as_of)?;

        tracing::debug!(
            "Forecast {} categories over {} as of {}",
            forecasts.len(),
            horizon,
            as_of
        );
        let at_risk = forecasts.iter().filter(|f| f.is_at_risk()).count();
        if at_risk > 0 {
            tracing::info!("{} categories stock out within {}", at_risk, horizon);
        }

        Ok(forecasts)
    }

    /// Reorder suggestions, most severe action first
    pub fn reorder_suggestions(
        &self,
        inputs: &[ReorderSuggestionInput],
        as_of: NaiveDate,
    ) -> AppResult<Vec<ReorderSuggestion>> {
        let suggestions = prioritize(self.engine.generate_suggestions(inputs, as_of)?);

        tracing::debug!(
            "Generated {} reorder suggestions as of {}",
            suggestions.len(),
            as_of
        );

        Ok(suggestions)
    }

    pub fn summary(
        &self,
        categories: &[CategoryForecastInput],
        products: &[ReorderSuggestionInput],
        horizon: ForecastHorizon,
        as_of: NaiveDate,
    ) -> AppResult<ForecastSummary> {
        Ok(self.engine.summarize(categories, products, horizon, as_of)?)
    }

    /// Export rows to CSV format
    pub fn export_to_csv<T: Serialize>(data: &[T]) -> AppResult<String> {
        let mut wtr = csv::Writer::from_writer(vec![]);
        for record in data {
            wtr.serialize(record)
                .map_err(|e| AppError::Export(format!("CSV serialization error: {}", e)))?;
        }
        let csv_data = String::from_utf8(
            wtr.into_inner()
                .map_err(|e| AppError::Export(format!("CSV writer error: {}", e)))?,
        )
        .map_err(|e| AppError::Export(format!("UTF-8 conversion error: {}", e)))?;
        Ok(csv_data)
    }
}
