mod pantry;
mod persistence;

pub use pantry::Pantry;
pub use persistence::{
    load_grocery_list, load_meal_plan, load_pantry, save_grocery_list, save_meal_plan,
    save_pantry, DataPaths,
};
