pub mod cli;
pub mod config;
pub mod error;
pub mod grocery;
pub mod interface;
pub mod logging;
pub mod models;
pub mod nutrition;
pub mod state;

pub use error::{PlannerError, Result};
pub use grocery::{aggregate, build_grocery_list, classify, CostConfig, GroceryList};
pub use models::{GroceryItem, Ingredient, MealPlan, PlannedRecipe};
