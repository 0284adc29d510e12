//! Retail seasons

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::error::{ForecastError, ForecastResult};

/// One of the four yearly retail periods
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Summer,
    Monsoon,
    Festival,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [
        Season::Summer,
        Season::Monsoon,
        Season::Festival,
        Season::Winter,
    ];

    /// Season for any calendar date
    pub fn from_date<D: Datelike>(date: &D) -> Self {
        season_for_month0(date.month0())
    }

    /// Position of this season in [`Season::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Season::Summer => 0,
            Season::Monsoon => 1,
            Season::Festival => 2,
            Season::Winter => 3,
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Season::Summer => write!(f, "Summer"),
            Season::Monsoon => write!(f, "Monsoon"),
            Season::Festival => write!(f, "Festival"),
            Season::Winter => write!(f, "Winter"),
        }
    }
}

impl std::str::FromStr for Season {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "summer" => Ok(Season::Summer),
            "monsoon" => Ok(Season::Monsoon),
            "festival" => Ok(Season::Festival),
            "winter" => Ok(Season::Winter),
            _ => Err(ForecastError::invalid_input("season", format!("unknown season '{}'", s))),
        }
    }
}

/// Resolve the season for a 0-indexed month (January = 0)
///
/// Summer is April-June, Monsoon July-September, Festival October-December
/// and Winter January-March.
pub fn resolve_season(month: u32) -> ForecastResult<Season> {
    if month > 11 {
        return Err(ForecastError::InvalidMonth(month));
    }
    Ok(season_for_month0(month))
}

fn season_for_month0(month: u32) -> Season {
    match month {
        3..=5 => Season::Summer,
        6..=8 => Season::Monsoon,
        9..=11 => Season::Festival,
        _ => Season::Winter,
    }
}
