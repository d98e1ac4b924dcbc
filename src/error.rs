use thiserror::Error;

use crate::models::{Day, MealSlot};

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("No recipe at index {index} in {day} {slot}")]
    RecipeNotFound {
        day: Day,
        slot: MealSlot,
        index: usize,
    },

    #[error("No pantry item at index {0}")]
    PantryItemNotFound(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
