use std::fmt;

use serde::{Deserialize, Serialize};

use crate::grocery::constants::AISLE_CATEGORIES;

/// Display category of a grocery line.
///
/// Serializes as its [`CategoryInfo`] object and reads back by `name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "CategoryInfo", from = "CategoryRecord")]
pub enum Category {
    Produce,
    Dairy,
    Meat,
    Baking,
    CannedGoods,
    Spices,
    Frozen,
    Other,
}

/// Name, icon glyph and color used when rendering a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryInfo {
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

/// Stored category object; icon and color are derived again from the name.
#[derive(Deserialize)]
struct CategoryRecord {
    name: String,
}

impl Category {
    /// Render order of the grocery list sections.
    pub const ALL: [Category; 8] = [
        Category::Produce,
        Category::Dairy,
        Category::Meat,
        Category::Baking,
        Category::CannedGoods,
        Category::Spices,
        Category::Frozen,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Produce => "Produce",
            Category::Dairy => "Dairy",
            Category::Meat => "Meat",
            Category::Baking => "Baking",
            Category::CannedGoods => "Canned Goods",
            Category::Spices => "Spices",
            Category::Frozen => "Frozen",
            Category::Other => "Other",
        }
    }

    pub fn info(&self) -> CategoryInfo {
        let (icon, color) = match self {
            Category::Produce => ("🥦", "#8BC34A"),
            Category::Dairy => ("🥛", "#FFF8E1"),
            Category::Meat => ("🥩", "#FFCDD2"),
            Category::Baking => ("🍞", "#D7CCC8"),
            Category::CannedGoods => ("🥫", "#BCAAA4"),
            Category::Spices => ("🌶", "#FFAB91"),
            Category::Frozen => ("❄", "#B3E5FC"),
            Category::Other => ("📦", "#CFD8DC"),
        };
        CategoryInfo {
            name: self.as_str(),
            icon,
            color,
        }
    }
}

impl From<Category> for CategoryInfo {
    fn from(category: Category) -> Self {
        category.info()
    }
}

impl From<CategoryRecord> for Category {
    fn from(record: CategoryRecord) -> Self {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == record.name)
            .unwrap_or(Category::Other)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve an aisle label to its category.
///
/// Exact match only: `"produce"` or `" Produce"` fall through to `Other`, as does
/// a missing aisle.
pub fn classify(aisle: Option<&str>) -> Category {
    aisle
        .and_then(|a| AISLE_CATEGORIES.get(a))
        .copied()
        .unwrap_or(Category::Other)
}

/// Resolve an aisle label straight to its display info.
pub fn classify_info(aisle: Option<&str>) -> CategoryInfo {
    classify(aisle).info()
}
