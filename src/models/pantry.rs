use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Units offered when recording pantry stock.
pub const PANTRY_UNITS: [&str; 10] = [
    "units", "g", "kg", "oz", "lb", "ml", "l", "tsp", "tbsp", "cups",
];

/// Storage category of a pantry item.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum PantryCategory {
    Dairy,
    Meat,
    Produce,
    Grains,
    Canned,
    Frozen,
    Spices,
    Baking,
    #[default]
    Other,
}

impl PantryCategory {
    pub const ALL: [PantryCategory; 9] = [
        PantryCategory::Dairy,
        PantryCategory::Meat,
        PantryCategory::Produce,
        PantryCategory::Grains,
        PantryCategory::Canned,
        PantryCategory::Frozen,
        PantryCategory::Spices,
        PantryCategory::Baking,
        PantryCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PantryCategory::Dairy => "dairy",
            PantryCategory::Meat => "meat",
            PantryCategory::Produce => "produce",
            PantryCategory::Grains => "grains",
            PantryCategory::Canned => "canned",
            PantryCategory::Frozen => "frozen",
            PantryCategory::Spices => "spices",
            PantryCategory::Baking => "baking",
            PantryCategory::Other => "other",
        }
    }
}

impl fmt::Display for PantryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stock the user keeps at home.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PantryItem {
    pub name: String,

    #[serde(default)]
    pub quantity: f64,

    #[serde(default = "default_unit")]
    pub unit: String,

    #[serde(default)]
    pub category: PantryCategory,

    /// Free-form date as entered, e.g. `2026-11-02`.
    #[serde(rename = "expirationDate", default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
}

fn default_unit() -> String {
    PANTRY_UNITS[0].to_string()
}

impl PantryItem {
    pub fn new(name: &str, quantity: f64, unit: &str, category: PantryCategory) -> Self {
        Self {
            name: name.to_string(),
            quantity,
            unit: unit.to_string(),
            category,
            expiration_date: None,
        }
    }
}
