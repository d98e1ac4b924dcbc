use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::models::{Day, MealSlot, PantryCategory};

/// MealPlanner — weekly meal plans, grocery lists, pantry and nutrition.
#[derive(Parser, Debug)]
#[command(name = "meal_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Directory holding the JSON state files (overrides the settings file).
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Path to a TOML settings file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show or edit the weekly meal plan.
    Plan {
        #[command(subcommand)]
        action: Option<PlanAction>,
    },

    /// Build the grocery list from the meal plan.
    Grocery {
        /// Also export the list as CSV.
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Check items off interactively.
        #[arg(long)]
        check: bool,
    },

    /// Summarize planned nutrition against daily goals.
    Nutrition,

    /// Track pantry inventory.
    Pantry {
        #[command(subcommand)]
        action: Option<PantryAction>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan { action: None }
    }
}

#[derive(Subcommand, Debug, Default)]
pub enum PlanAction {
    /// Print every slot of the week.
    #[default]
    Show,

    /// Add a recipe (JSON document) to a slot.
    Add {
        #[arg(long, value_enum)]
        day: Day,

        #[arg(long, value_enum)]
        meal: MealSlot,

        /// Path to the recipe JSON.
        #[arg(long)]
        recipe: PathBuf,
    },

    /// Remove the recipe at an index from a slot.
    Remove {
        #[arg(long, value_enum)]
        day: Day,

        #[arg(long, value_enum)]
        meal: MealSlot,

        #[arg(long)]
        index: usize,
    },

    /// Move a recipe to another slot or position.
    Move {
        #[arg(long, value_enum)]
        from_day: Day,

        #[arg(long, value_enum)]
        from_meal: MealSlot,

        #[arg(long)]
        from_index: usize,

        #[arg(long, value_enum)]
        to_day: Day,

        #[arg(long, value_enum)]
        to_meal: MealSlot,

        /// Clamped to the end of the destination slot.
        #[arg(long, default_value = "0")]
        to_index: usize,
    },

    /// Empty every slot.
    Clear {
        /// Skip the confirmation prompt.
        #[arg(long, short)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum PantryAction {
    /// List pantry items.
    List {
        /// Case-insensitive name filter.
        #[arg(long)]
        search: Option<String>,

        #[arg(long, value_enum)]
        category: Option<PantryCategory>,
    },

    /// Add an item; prompts for anything not given.
    Add(PantryFields),

    /// Edit the item at an index; prompts for anything not given.
    Edit {
        #[arg(long)]
        index: usize,

        #[command(flatten)]
        fields: PantryFields,
    },

    /// Remove the item at an index.
    Remove {
        #[arg(long)]
        index: usize,
    },
}

impl Default for PantryAction {
    fn default() -> Self {
        PantryAction::List {
            search: None,
            category: None,
        }
    }
}

/// Pantry item fields settable from flags.
#[derive(Args, Debug, Default, Clone)]
pub struct PantryFields {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub quantity: Option<f64>,

    #[arg(long)]
    pub unit: Option<String>,

    #[arg(long, value_enum)]
    pub category: Option<PantryCategory>,

    /// Expiration date, e.g. 2026-11-02.
    #[arg(long)]
    pub expires: Option<String>,
}
