//! Category-level demand forecast models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::Season;
use crate::types::{Confidence, Trend};
use crate::validation::validate_daily_sales;

/// Stock and sales velocity for one tracked category
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CategoryForecastInput {
    #[validate(length(min = 1, max = 100))]
    pub category: String,
    pub current_stock: u32,
    /// Average units sold per day before seasonal adjustment
    #[validate(custom = "validate_daily_sales")]
    pub base_daily_sales: Decimal,
    pub confidence: Confidence,
}

/// Projected demand and reorder need for one category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryForecast {
    pub category: String,
    pub season: Season,
    pub horizon_days: u32,
    pub current_stock: u32,
    pub base_daily_sales: Decimal,
    pub multiplier: Decimal,
    pub adjusted_daily_sales: Decimal,
    pub projected_demand: u32,
    /// 999 when the adjusted velocity is zero
    pub days_until_stockout: u32,
    pub reorder_quantity: u32,
    pub trend: Trend,
    pub confidence: Confidence,
}

impl CategoryForecast {
    /// Stock runs out before the forecast window closes
    pub fn is_at_risk(&self) -> bool {
        self.days_until_stockout < self.horizon_days
    }
}
