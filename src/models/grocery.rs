use serde::{Deserialize, Serialize};

use crate::grocery::Category;

/// One deduplicated shopping-list line derived from a meal plan.
///
/// Unique per (name, aisle) within a generated list. `amount` is the plain sum of
/// every contributing ingredient amount; `unit` is the first contributor's unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroceryItem {
    pub id: u64,
    pub name: String,
    pub amount: f64,
    pub unit: String,
    pub aisle: Option<String>,

    /// Stored as `{name, icon, color}`.
    pub category: Category,

    /// Unit price carried over from the first contributing ingredient.
    #[serde(rename = "unitPrice", default, skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,

    /// Line cost: unit price (or fallback) times amount.
    #[serde(rename = "estimatedCost")]
    pub estimated_cost: f64,
}
