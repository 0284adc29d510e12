//! Seasonal demand multipliers per product category

use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Season;
use crate::error::{ForecastError, ForecastResult};

/// Multipliers for one category across all four seasons
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryMultipliers {
    pub category: String,
    pub summer: Decimal,
    pub monsoon: Decimal,
    pub festival: Decimal,
    pub winter: Decimal,
}

impl CategoryMultipliers {
    pub fn get(&self, season: Season) -> Decimal {
        match season {
            Season::Summer => self.summer,
            Season::Monsoon => self.monsoon,
            Season::Festival => self.festival,
            Season::Winter => self.winter,
        }
    }

    fn set(&mut self, season: Season, value: Decimal) {
        match season {
            Season::Summer => self.summer = value,
            Season::Monsoon => self.monsoon = value,
            Season::Festival => self.festival = value,
            Season::Winter => self.winter = value,
        }
    }
}

/// Lookup table from (category, season) to demand multiplier
///
/// Category names match case-insensitively after trimming. Categories not in
/// the table resolve to a neutral 1.0.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonalMultiplierTable {
    entries: BTreeMap<String, CategoryMultipliers>,
}

/// Standard table: (category, summer, monsoon, festival, winter), hundredths
const STANDARD_TABLE: &[(&str, [i64; 4])] = &[
    ("Sunglasses", [140, 70, 110, 85]),
    ("Frames", [100, 95, 125, 100]),
    ("Contact Lenses", [110, 90, 115, 100]),
    ("Lenses", [105, 95, 120, 100]),
    ("Accessories", [115, 105, 130, 90]),
    ("Lens Solutions", [105, 125, 100, 95]),
];

fn category_key(category: &str) -> String {
    category.trim().to_lowercase()
}

impl SeasonalMultiplierTable {
    /// The built-in table for the six tracked optical categories
    pub fn standard() -> Self {
        let entries = STANDARD_TABLE
            .iter()
            .map(|(category, [summer, monsoon, festival, winter])| {
                (
                    category_key(category),
                    CategoryMultipliers {
                        category: category.to_string(),
                        summer: Decimal::new(*summer, 2),
                        monsoon: Decimal::new(*monsoon, 2),
                        festival: Decimal::new(*festival, 2),
                        winter: Decimal::new(*winter, 2),
                    },
                )
            })
            .collect();
        Self { entries }
    }

    /// Build a table from complete rows, rejecting non-positive multipliers
    pub fn from_rows(rows: Vec<CategoryMultipliers>) -> ForecastResult<Self> {
        let mut entries = BTreeMap::new();
        for row in rows {
            for season in Season::ALL {
                check_positive(&row.category, season, row.get(season))?;
            }
            entries.insert(category_key(&row.category), row);
        }
        Ok(Self { entries })
    }

    /// Merge `{category: {season: multiplier}}` overrides over this table
    ///
    /// Known categories may override any subset of seasons. New categories
    /// must supply all four seasons so every lookup resolves.
    pub fn with_overrides(
        mut self,
        overrides: &HashMap<String, HashMap<Season, Decimal>>,
    ) -> ForecastResult<Self> {
        for (category, seasons) in overrides {
            for (season, value) in seasons {
                check_positive(category, *season, *value)?;
            }

            let key = category_key(category);
            match self.entries.get_mut(&key) {
                Some(row) => {
                    for (season, value) in seasons {
                        row.set(*season, *value);
                    }
                }
                None => {
                    let value_for = |season: Season| {
                        seasons.get(&season).copied().ok_or_else(|| {
                            ForecastError::InvalidMultiplier {
                                category: category.clone(),
                                season,
                            }
                        })
                    };
                    let row = CategoryMultipliers {
                        category: category.trim().to_string(),
                        summer: value_for(Season::Summer)?,
                        monsoon: value_for(Season::Monsoon)?,
                        festival: value_for(Season::Festival)?,
                        winter: value_for(Season::Winter)?,
                    };
                    self.entries.insert(key, row);
                }
            }
        }
        Ok(self)
    }

    /// Multiplier for a category in a season, 1.0 for unknown categories
    pub fn multiplier_for(&self, category: &str, season: Season) -> Decimal {
        self.entries
            .get(&category_key(category))
            .map(|row| row.get(season))
            .unwrap_or(Decimal::ONE)
    }

    pub fn contains(&self, category: &str) -> bool {
        self.entries.contains_key(&category_key(category))
    }

    /// All rows, ordered by category name
    pub fn rows(&self) -> Vec<CategoryMultipliers> {
        self.entries.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SeasonalMultiplierTable {
    fn default() -> Self {
        Self::standard()
    }
}

fn check_positive(category: &str, season: Season, value: Decimal) -> ForecastResult<()> {
    if value <= Decimal::ZERO {
        return Err(ForecastError::InvalidMultiplier {
            category: category.to_string(),
            season,
        });
    }
    Ok(())
}

/// Shared standard table, built once
pub fn standard_table() -> &'static SeasonalMultiplierTable {
    static TABLE: OnceLock<SeasonalMultiplierTable> = OnceLock::new();
    TABLE.get_or_init(SeasonalMultiplierTable::standard)
}

/// Look up a multiplier in the standard table
pub fn multiplier_for(category: &str, season: Season) -> Decimal {
    standard_table().multiplier_for(category, season)
}
