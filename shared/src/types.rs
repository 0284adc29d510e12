//! Common types used across the forecasting engine

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ForecastError;

/// Forecast window length. Only 30, 60 and 90 days are supported.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(try_from = "u32", into = "u32")]
pub enum ForecastHorizon {
    #[default]
    Days30,
    Days60,
    Days90,
}

impl ForecastHorizon {
    pub const ALL: [ForecastHorizon; 3] = [
        ForecastHorizon::Days30,
        ForecastHorizon::Days60,
        ForecastHorizon::Days90,
    ];

    pub fn days(&self) -> u32 {
        match self {
            ForecastHorizon::Days30 => 30,
            ForecastHorizon::Days60 => 60,
            ForecastHorizon::Days90 => 90,
        }
    }
}

impl TryFrom<u32> for ForecastHorizon {
    type Error = ForecastError;

    fn try_from(days: u32) -> Result<Self, Self::Error> {
        match days {
            30 => Ok(ForecastHorizon::Days30),
            60 => Ok(ForecastHorizon::Days60),
            90 => Ok(ForecastHorizon::Days90),
            other => Err(ForecastError::InvalidHorizon(other)),
        }
    }
}

impl From<ForecastHorizon> for u32 {
    fn from(horizon: ForecastHorizon) -> Self {
        horizon.days()
    }
}

impl std::fmt::Display for ForecastHorizon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} days", self.days())
    }
}

/// How much sales history backs a base rate
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Confidence::High => write!(f, "High"),
            Confidence::Medium => write!(f, "Medium"),
            Confidence::Low => write!(f, "Low"),
        }
    }
}

/// Direction of seasonal demand relative to the base rate
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Stable,
    Down,
}

impl Trend {
    /// Up above 1.1, down below 0.9, stable in between (bounds inclusive)
    pub fn from_multiplier(multiplier: Decimal) -> Self {
        if multiplier > Decimal::new(11, 1) {
            Trend::Up
        } else if multiplier < Decimal::new(9, 1) {
            Trend::Down
        } else {
            Trend::Stable
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Trend::Up => write!(f, "Up"),
            Trend::Stable => write!(f, "Stable"),
            Trend::Down => write!(f, "Down"),
        }
    }
}

/// Recommended action for a product
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ReorderAction {
    UrgentReorder,
    IncreaseOrder,
    ReduceOrder,
    Monitor,
}

impl ReorderAction {
    pub const ALL: [ReorderAction; 4] = [
        ReorderAction::UrgentReorder,
        ReorderAction::IncreaseOrder,
        ReorderAction::ReduceOrder,
        ReorderAction::Monitor,
    ];

    /// Severity rank used for prioritizing; lower sorts first
    pub fn severity(&self) -> u8 {
        match self {
            ReorderAction::UrgentReorder => 0,
            ReorderAction::IncreaseOrder => 1,
            ReorderAction::ReduceOrder => 2,
            ReorderAction::Monitor => 3,
        }
    }
}

impl std::fmt::Display for ReorderAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReorderAction::UrgentReorder => write!(f, "Urgent Reorder"),
            ReorderAction::IncreaseOrder => write!(f, "Increase Order"),
            ReorderAction::ReduceOrder => write!(f, "Reduce Order"),
            ReorderAction::Monitor => write!(f, "Monitor"),
        }
    }
}
