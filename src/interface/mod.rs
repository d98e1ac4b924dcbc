pub mod export;
pub mod prompts;
pub mod render;

pub use export::write_grocery_csv;
pub use prompts::{collect_pantry_item, prompt_check_items, prompt_yes_no};
pub use render::{display_grocery_list, display_meal_plan, display_nutrition, display_pantry};
