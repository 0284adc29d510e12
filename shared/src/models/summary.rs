//! Dashboard summary of a forecast run

use serde::{Deserialize, Serialize};

use super::{CategoryForecast, ReorderSuggestion, Season};
use crate::types::ReorderAction;

/// Headline figures shown above the forecast tables
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastSummary {
    pub season: Season,
    pub horizon_days: u32,
    pub total_projected_demand: u64,
    pub total_reorder_quantity: u64,
    /// Categories that stock out before the horizon ends
    pub categories_at_risk: Vec<String>,
    pub actions: ActionCounts,
    pub total_suggested_quantity: u64,
}

/// Number of suggestions per action
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ActionCounts {
    pub urgent_reorder: u32,
    pub increase_order: u32,
    pub reduce_order: u32,
    pub monitor: u32,
}

impl ActionCounts {
    pub fn record(&mut self, action: ReorderAction) {
        match action {
            ReorderAction::UrgentReorder => self.urgent_reorder += 1,
            ReorderAction::IncreaseOrder => self.increase_order += 1,
            ReorderAction::ReduceOrder => self.reduce_order += 1,
            ReorderAction::Monitor => self.monitor += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.urgent_reorder + self.increase_order + self.reduce_order + self.monitor
    }
}

impl ForecastSummary {
    pub fn build(
        season: Season,
        horizon_days: u32,
        forecasts: &[CategoryForecast],
        suggestions: &[ReorderSuggestion],
    ) -> Self {
        let mut actions = ActionCounts::default();
        for suggestion in suggestions {
            actions.record(suggestion.action);
        }

        Self {
            season,
            horizon_days,
            total_projected_demand: forecasts.iter().map(|f| u64::from(f.projected_demand)).sum(),
            total_reorder_quantity: forecasts.iter().map(|f| u64::from(f.reorder_quantity)).sum(),
            categories_at_risk: forecasts
                .iter()
                .filter(|f| f.is_at_risk())
                .map(|f| f.category.clone())
                .collect(),
            actions,
            total_suggested_quantity: suggestions
                .iter()
                .map(|s| u64::from(s.suggested_quantity))
                .sum(),
        }
    }
}
