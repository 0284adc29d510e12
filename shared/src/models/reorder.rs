//! Product-level reorder suggestion models

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::Season;
use crate::types::{Confidence, ReorderAction, Trend};
use crate::validation::{validate_daily_sales, validate_sku};

/// Rationale text, optionally varying by season
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RationaleTemplate {
    pub default: String,
    /// Season-specific wording that replaces the default
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub seasonal: BTreeMap<Season, String>,
}

impl RationaleTemplate {
    pub fn new(default: impl Into<String>) -> Self {
        Self {
            default: default.into(),
            seasonal: BTreeMap::new(),
        }
    }

    pub fn with_season(mut self, season: Season, text: impl Into<String>) -> Self {
        self.seasonal.insert(season, text.into());
        self
    }

    /// Text for the given season
    pub fn render(&self, season: Season) -> &str {
        self.seasonal
            .get(&season)
            .map(String::as_str)
            .unwrap_or(&self.default)
    }
}

/// A tracked product with its curated recommendation
///
/// `action` and `suggested_quantity` are curated per product by the buyer;
/// the engine passes them through unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReorderSuggestionInput {
    #[validate(custom = "validate_sku")]
    pub sku: String,
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(min = 1, max = 100))]
    pub category: String,
    pub current_stock: u32,
    #[validate(custom = "validate_daily_sales")]
    pub base_daily_sales: Decimal,
    pub confidence: Confidence,
    pub rationale: RationaleTemplate,
    pub action: ReorderAction,
    pub suggested_quantity: u32,
}

/// A reorder recommendation ready for display
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReorderSuggestion {
    pub sku: String,
    pub name: String,
    pub category: String,
    pub season: Season,
    pub current_stock: u32,
    pub base_daily_sales: Decimal,
    pub multiplier: Decimal,
    pub adjusted_daily_sales: Decimal,
    /// 999 when the adjusted velocity is zero
    pub days_until_stockout: u32,
    pub action: ReorderAction,
    pub suggested_quantity: u32,
    pub trend: Trend,
    pub confidence: Confidence,
    pub rationale: String,
}
