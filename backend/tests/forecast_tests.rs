//! Demand forecast tests
//!
//! Tests for the forecasting engine including:
//! - Season resolution and multiplier lookup
//! - Category projection, stockout and reorder formulas
//! - Suggestion prioritization order and stability

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};
use shared::{
    multiplier_for, prioritize, resolve_season, CategoryForecastInput, Confidence,
    ForecastEngine, ForecastHorizon, RationaleTemplate, ReorderAction, ReorderSuggestion,
    ReorderSuggestionInput, Season, Trend, STOCKOUT_SENTINEL_DAYS,
};
use std::str::FromStr;

// Helper to create Decimal from string
fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

fn first_day_of(month0: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month0 + 1, 1).unwrap()
}

const CATEGORIES: [&str; 6] = [
    "Sunglasses",
    "Frames",
    "Contact Lenses",
    "Lenses",
    "Accessories",
    "Lens Solutions",
];

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// Sunglasses in summer over 30 days
    #[test]
    fn test_sunglasses_summer_example() {
        let engine = ForecastEngine::default();
        let input = CategoryForecastInput {
            category: "Sunglasses".to_string(),
            current_stock: 15,
            base_daily_sales: dec("2.0"),
            confidence: Confidence::High,
        };
        let result = engine
            .forecast_categories(&[input], ForecastHorizon::Days30, first_day_of(4))
            .unwrap();

        assert_eq!(result[0].adjusted_daily_sales, dec("2.8"));
        assert_eq!(result[0].projected_demand, 84);
        assert_eq!(result[0].days_until_stockout, 5);
        assert_eq!(result[0].reorder_quantity, 111);
    }

    /// Zero velocity never divides
    #[test]
    fn test_contact_lenses_zero_velocity_example() {
        let engine = ForecastEngine::default();
        let input = CategoryForecastInput {
            category: "Contact Lenses".to_string(),
            current_stock: 520,
            base_daily_sales: Decimal::ZERO,
            confidence: Confidence::Medium,
        };
        for horizon in ForecastHorizon::ALL {
            let result = engine
                .forecast_categories(std::slice::from_ref(&input), horizon, first_day_of(9))
                .unwrap();
            assert_eq!(result[0].adjusted_daily_sales, Decimal::ZERO);
            assert_eq!(result[0].days_until_stockout, 999);
            assert_eq!(result[0].projected_demand, 0);
            assert_eq!(result[0].reorder_quantity, 0);
        }
    }

    /// Winter months wrap around the year start
    #[test]
    fn test_season_table() {
        assert_eq!(resolve_season(0).unwrap(), Season::Winter);
        assert_eq!(resolve_season(2).unwrap(), Season::Winter);
        assert_eq!(resolve_season(3).unwrap(), Season::Summer);
        assert_eq!(resolve_season(6).unwrap(), Season::Monsoon);
        assert_eq!(resolve_season(9).unwrap(), Season::Festival);
        assert_eq!(resolve_season(11).unwrap(), Season::Festival);
        assert!(resolve_season(12).is_err());
    }

    /// Monitor, Urgent, Reduce prioritizes to Urgent, Reduce, Monitor
    #[test]
    fn test_prioritize_example() {
        let engine = ForecastEngine::default();
        let inputs: Vec<ReorderSuggestionInput> = [
            ReorderAction::Monitor,
            ReorderAction::UrgentReorder,
            ReorderAction::ReduceOrder,
        ]
        .iter()
        .enumerate()
        .map(|(i, action)| ReorderSuggestionInput {
            sku: format!("SKU-{}", i),
            name: format!("Product {}", i),
            category: "Accessories".to_string(),
            current_stock: 5,
            base_daily_sales: dec("0.5"),
            confidence: Confidence::Low,
            rationale: RationaleTemplate::new("Curated"),
            action: *action,
            suggested_quantity: 0,
        })
        .collect();

        let suggestions = engine.generate_suggestions(&inputs, first_day_of(0)).unwrap();
        let actions: Vec<ReorderAction> = prioritize(suggestions).iter().map(|s| s.action).collect();
        assert_eq!(
            actions,
            vec![
                ReorderAction::UrgentReorder,
                ReorderAction::ReduceOrder,
                ReorderAction::Monitor
            ]
        );
    }

    /// Unsupported horizons are rejected rather than clamped
    #[test]
    fn test_horizon_rejected() {
        assert!(ForecastHorizon::try_from(45).is_err());
        assert!(ForecastHorizon::try_from(120).is_err());
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    fn sales_strategy() -> impl Strategy<Value = Decimal> {
        (0i64..=500i64).prop_map(|n| Decimal::new(n, 1)) // 0.0 to 50.0
    }

    fn positive_sales_strategy() -> impl Strategy<Value = Decimal> {
        (1i64..=500i64).prop_map(|n| Decimal::new(n, 1)) // 0.1 to 50.0
    }

    fn category_strategy() -> impl Strategy<Value = &'static str> {
        prop::sample::select(CATEGORIES.to_vec())
    }

    fn horizon_strategy() -> impl Strategy<Value = ForecastHorizon> {
        prop_oneof![
            Just(ForecastHorizon::Days30),
            Just(ForecastHorizon::Days60),
            Just(ForecastHorizon::Days90),
        ]
    }

    fn action_strategy() -> impl Strategy<Value = ReorderAction> {
        prop::sample::select(ReorderAction::ALL.to_vec())
    }

    fn suggestion(index: usize, action: ReorderAction) -> ReorderSuggestion {
        ReorderSuggestion {
            sku: format!("SKU-{}", index),
            name: String::new(),
            category: "Frames".to_string(),
            season: Season::Winter,
            current_stock: 0,
            base_daily_sales: Decimal::ZERO,
            multiplier: Decimal::ONE,
            adjusted_daily_sales: Decimal::ZERO,
            days_until_stockout: STOCKOUT_SENTINEL_DAYS,
            action,
            suggested_quantity: 0,
            trend: Trend::Stable,
            confidence: Confidence::Low,
            rationale: String::new(),
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Projection and stockout follow the rounded adjusted rate
        #[test]
        fn prop_projection_formulas(
            category in category_strategy(),
            stock in 0u32..5000,
            sales in positive_sales_strategy(),
            horizon in horizon_strategy(),
            month in 0u32..12
        ) {
            let engine = ForecastEngine::default();
            let season = resolve_season(month).unwrap();
            let input = CategoryForecastInput {
                category: category.to_string(),
                current_stock: stock,
                base_daily_sales: sales,
                confidence: Confidence::High,
            };
            let result = engine
                .forecast_categories(&[input], horizon, first_day_of(month))
                .unwrap();
            let forecast = &result[0];

            let multiplier = multiplier_for(category, season);
            let adjusted = round_half_up(sales * multiplier, 1);
            prop_assert_eq!(forecast.multiplier, multiplier);
            prop_assert_eq!(forecast.adjusted_daily_sales, adjusted);
            prop_assert_eq!(
                Decimal::from(forecast.projected_demand),
                round_half_up(adjusted * Decimal::from(horizon.days()), 0)
            );
            if adjusted > Decimal::ZERO {
                prop_assert_eq!(
                    Decimal::from(forecast.days_until_stockout),
                    round_half_up(Decimal::from(stock) / adjusted, 0)
                );
            }
        }

        /// Zero adjusted velocity always reports the sentinel
        #[test]
        fn prop_zero_velocity_sentinel(
            category in category_strategy(),
            stock in 0u32..5000,
            month in 0u32..12
        ) {
            let engine = ForecastEngine::default();
            let input = CategoryForecastInput {
                category: category.to_string(),
                current_stock: stock,
                base_daily_sales: Decimal::ZERO,
                confidence: Confidence::Low,
            };
            let result = engine
                .forecast_categories(&[input], ForecastHorizon::Days30, first_day_of(month))
                .unwrap();
            prop_assert_eq!(result[0].days_until_stockout, STOCKOUT_SENTINEL_DAYS);
        }

        /// Reorder quantity is never negative and matches the buffer formula
        #[test]
        fn prop_reorder_quantity_formula(
            category in category_strategy(),
            stock in 0u32..5000,
            sales in sales_strategy(),
            horizon in horizon_strategy()
        ) {
            let engine = ForecastEngine::default();
            let input = CategoryForecastInput {
                category: category.to_string(),
                current_stock: stock,
                base_daily_sales: sales,
                confidence: Confidence::Medium,
            };
            let result = engine
                .forecast_categories(&[input], horizon, first_day_of(7))
                .unwrap();
            let forecast = &result[0];

            let buffer = round_half_up(forecast.adjusted_daily_sales * Decimal::from(15), 0);
            let expected = (Decimal::from(forecast.projected_demand) - Decimal::from(stock) + buffer)
                .max(Decimal::ZERO);
            prop_assert_eq!(Decimal::from(forecast.reorder_quantity), expected);
        }

        /// Trend depends only on the multiplier
        #[test]
        fn prop_trend_classification(hundredths in 1i64..300) {
            let multiplier = Decimal::new(hundredths, 2);
            let trend = Trend::from_multiplier(multiplier);
            if multiplier > dec("1.1") {
                prop_assert_eq!(trend, Trend::Up);
            } else if multiplier < dec("0.9") {
                prop_assert_eq!(trend, Trend::Down);
            } else {
                prop_assert_eq!(trend, Trend::Stable);
            }
        }

        /// Unknown categories are neutral in every season
        #[test]
        fn prop_unknown_category_neutral(name in "[a-z]{3,12} [a-z]{3,12}", month in 0u32..12) {
            prop_assume!(!CATEGORIES.iter().any(|c| c.eq_ignore_ascii_case(&name)));
            let season = resolve_season(month).unwrap();
            prop_assert_eq!(multiplier_for(&name, season), Decimal::ONE);
        }

        /// Forecast output keeps input order
        #[test]
        fn prop_forecast_preserves_order(
            picks in prop::collection::vec((category_strategy(), sales_strategy()), 0..12)
        ) {
            let engine = ForecastEngine::default();
            let inputs: Vec<CategoryForecastInput> = picks
                .iter()
                .map(|(category, sales)| CategoryForecastInput {
                    category: category.to_string(),
                    current_stock: 100,
                    base_daily_sales: *sales,
                    confidence: Confidence::High,
                })
                .collect();
            let result = engine
                .forecast_categories(&inputs, ForecastHorizon::Days60, first_day_of(10))
                .unwrap();
            prop_assert_eq!(result.len(), inputs.len());
            for (forecast, input) in result.iter().zip(inputs.iter()) {
                prop_assert_eq!(&forecast.category, &input.category);
            }
        }

        /// Lower severity always comes first
        #[test]
        fn prop_prioritize_ordering(actions in prop::collection::vec(action_strategy(), 0..30)) {
            let suggestions: Vec<ReorderSuggestion> = actions
                .iter()
                .enumerate()
                .map(|(i, a)| suggestion(i, *a))
                .collect();
            let sorted = prioritize(suggestions);
            prop_assert_eq!(sorted.len(), actions.len());
            for pair in sorted.windows(2) {
                prop_assert!(pair[0].action.severity() <= pair[1].action.severity());
            }
        }

        /// Equal actions keep their original relative order
        #[test]
        fn prop_prioritize_stability(actions in prop::collection::vec(action_strategy(), 0..30)) {
            let suggestions: Vec<ReorderSuggestion> = actions
                .iter()
                .enumerate()
                .map(|(i, a)| suggestion(i, *a))
                .collect();
            let sorted = prioritize(suggestions);
            for action in ReorderAction::ALL {
                let original: Vec<String> = actions
                    .iter()
                    .enumerate()
                    .filter(|(_, a)| **a == action)
                    .map(|(i, _)| format!("SKU-{}", i))
                    .collect();
                let kept: Vec<String> = sorted
                    .iter()
                    .filter(|s| s.action == action)
                    .map(|s| s.sku.clone())
                    .collect();
                prop_assert_eq!(original, kept);
            }
        }
    }
}
