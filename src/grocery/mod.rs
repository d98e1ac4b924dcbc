pub mod aggregator;
pub mod checklist;
pub mod classifier;
pub mod constants;
pub mod cost;

pub use aggregator::{aggregate, build_grocery_list, GroceryList};
pub use checklist::Checklist;
pub use classifier::{classify, classify_info, Category, CategoryInfo};
pub use constants::*;
pub use cost::{estimate_line_cost, estimate_total_cost, format_cost, line_cost, CostConfig};
