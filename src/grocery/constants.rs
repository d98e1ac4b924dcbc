use std::collections::HashMap;
use std::sync::LazyLock;

use crate::grocery::classifier::Category;

/// Unit price assumed when the recipe source gives none (currency-less).
pub const FALLBACK_UNIT_PRICE: f64 = 2.5;

/// Stand-in for a missing or empty aisle while sorting. Never stored.
pub const MISSING_AISLE_SORT_KEY: &str = "ZZZ";

/// Aisle label to category, matched exactly (case-sensitive, untrimmed).
pub static AISLE_CATEGORIES: LazyLock<HashMap<&'static str, Category>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert("Produce", Category::Produce);
    m.insert("Dairy", Category::Dairy);
    m.insert("Meat", Category::Meat);
    m.insert("Baking", Category::Baking);
    m.insert("Canned Goods", Category::CannedGoods);
    m.insert("Spices", Category::Spices);
    m.insert("Frozen", Category::Frozen);
    m.insert("Other", Category::Other);
    m
});
