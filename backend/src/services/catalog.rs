//! Default dashboard catalog
//!
//! Category and product inputs shown when the caller does not post its own.
//! Stock levels and velocities mirror a single optical store's sales history.

use rust_decimal::Decimal;
use shared::{
    CategoryForecastInput, Confidence, RationaleTemplate, ReorderAction, ReorderSuggestionInput,
    Season,
};

fn category(name: &str, stock: u32, tenths_per_day: i64, confidence: Confidence) -> CategoryForecastInput {
    CategoryForecastInput {
        category: name.to_string(),
        current_stock: stock,
        base_daily_sales: Decimal::new(tenths_per_day, 1),
        confidence,
    }
}

/// Tracked categories with current stock and base velocity
pub fn sample_categories() -> Vec<CategoryForecastInput> {
    vec![
        category("Sunglasses", 15, 20, Confidence::High),
        category("Frames", 120, 35, Confidence::High),
        category("Contact Lenses", 520, 60, Confidence::Medium),
        category("Lenses", 200, 42, Confidence::High),
        category("Accessories", 85, 18, Confidence::Medium),
        category("Lens Solutions", 40, 25, Confidence::Low),
    ]
}

struct ProductRow {
    sku: &'static str,
    name: &'static str,
    category: &'static str,
    stock: u32,
    tenths_per_day: i64,
    confidence: Confidence,
    action: ReorderAction,
    quantity: u32,
    rationale: RationaleTemplate,
}

impl From<ProductRow> for ReorderSuggestionInput {
    fn from(row: ProductRow) -> Self {
        ReorderSuggestionInput {
            sku: row.sku.to_string(),
            name: row.name.to_string(),
            category: row.category.to_string(),
            current_stock: row.stock,
            base_daily_sales: Decimal::new(row.tenths_per_day, 1),
            confidence: row.confidence,
            rationale: row.rationale,
            action: row.action,
            suggested_quantity: row.quantity,
        }
    }
}

/// Tracked products with buyer-curated actions and quantities
pub fn sample_products() -> Vec<ReorderSuggestionInput> {
    let rows = vec![
        ProductRow {
            sku: "SG-RAYBAN-AVI",
            name: "Ray-Ban Aviator Classic",
            category: "Sunglasses",
            stock: 4,
            tenths_per_day: 8,
            confidence: Confidence::High,
            action: ReorderAction::UrgentReorder,
            quantity: 25,
            rationale: RationaleTemplate::new("Fast mover with under a week of cover")
                .with_season(Season::Summer, "Summer peak: aviators sell out first"),
        },
        ProductRow {
            sku: "FR-TITAN-RIM",
            name: "Titan Eye+ Rimless Frame",
            category: "Frames",
            stock: 35,
            tenths_per_day: 11,
            confidence: Confidence::High,
            action: ReorderAction::Monitor,
            quantity: 0,
            rationale: RationaleTemplate::new("Stock matches demand; review next cycle"),
        },
        ProductRow {
            sku: "CL-ACUVUE-1DAY",
            name: "Acuvue Oasys 1-Day (30 pack)",
            category: "Contact Lenses",
            stock: 18,
            tenths_per_day: 15,
            confidence: Confidence::High,
            action: ReorderAction::IncreaseOrder,
            quantity: 40,
            rationale: RationaleTemplate::new("Subscription customers growing month on month"),
        },
        ProductRow {
            sku: "FR-VC-ACETATE",
            name: "Vincent Chase Acetate Frame",
            category: "Frames",
            stock: 60,
            tenths_per_day: 4,
            confidence: Confidence::Low,
            action: ReorderAction::ReduceOrder,
            quantity: 0,
            rationale: RationaleTemplate::new("Slow mover; stock covers more than four months"),
        },
        ProductRow {
            sku: "LS-RENU-360",
            name: "Bausch + Lomb ReNu 360ml",
            category: "Lens Solutions",
            stock: 6,
            tenths_per_day: 9,
            confidence: Confidence::Medium,
            action: ReorderAction::UrgentReorder,
            quantity: 36,
            rationale: RationaleTemplate::new("Low stock against steady repeat purchases")
                .with_season(
                    Season::Monsoon,
                    "Monsoon humidity lifts solution sales; stock runs out within a week",
                ),
        },
        ProductRow {
            sku: "SG-FASTRACK-WAY",
            name: "Fastrack Wayfarer",
            category: "Sunglasses",
            stock: 12,
            tenths_per_day: 12,
            confidence: Confidence::Medium,
            action: ReorderAction::IncreaseOrder,
            quantity: 30,
            rationale: RationaleTemplate::new("Popular gifting pick")
                .with_season(Season::Festival, "Festival gifting demand for budget sunglasses"),
        },
        ProductRow {
            sku: "LN-CRIZAL-BLUE",
            name: "Essilor Crizal Blue Cut Lens",
            category: "Lenses",
            stock: 50,
            tenths_per_day: 10,
            confidence: Confidence::Medium,
            action: ReorderAction::Monitor,
            quantity: 0,
            rationale: RationaleTemplate::new("Lab turnaround covers demand swings"),
        },
        ProductRow {
            sku: "AC-CASE-HARD",
            name: "Hard Shell Spectacle Case",
            category: "Accessories",
            stock: 150,
            tenths_per_day: 6,
            confidence: Confidence::Low,
            action: ReorderAction::ReduceOrder,
            quantity: 0,
            rationale: RationaleTemplate::new("Overstocked after bulk purchase"),
        },
    ];

    rows.into_iter().map(ReorderSuggestionInput::from).collect()
}
