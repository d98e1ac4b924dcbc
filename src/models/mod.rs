mod grocery;
mod pantry;
mod plan;
mod recipe;

pub use grocery::GroceryItem;
pub use pantry::{PantryCategory, PantryItem, PANTRY_UNITS};
pub use plan::{Day, MealPlan, MealSlot, SlotPosition};
pub use recipe::{EstimatedCost, Ingredient, Nutrition, PlannedRecipe};
