use crate::grocery::constants::FALLBACK_UNIT_PRICE;
use crate::models::GroceryItem;

/// Pricing knobs for cost estimation.
#[derive(Debug, Clone)]
pub struct CostConfig {
    pub fallback_unit_price: f64,
}

impl Default for CostConfig {
    fn default() -> Self {
        Self {
            fallback_unit_price: FALLBACK_UNIT_PRICE,
        }
    }
}

/// Cost of `amount` units at `unit_price`, or at the fallback price when unknown.
///
/// The same rule backs both the per-line figure and the plan total.
pub fn line_cost(unit_price: Option<f64>, amount: f64, config: &CostConfig) -> f64 {
    unit_price.unwrap_or(config.fallback_unit_price) * amount
}

/// Cost estimate for one grocery line.
pub fn estimate_line_cost(item: &GroceryItem, config: &CostConfig) -> f64 {
    line_cost(item.unit_price, item.amount, config)
}

/// Sum of line costs, unrounded.
pub fn estimate_total_cost(items: &[GroceryItem], config: &CostConfig) -> f64 {
    items.iter().map(|item| estimate_line_cost(item, config)).sum()
}

/// Money rendering: two decimal places.
pub fn format_cost(value: f64) -> String {
    format!("{:.2}", value)
}
