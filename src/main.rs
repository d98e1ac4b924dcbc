use std::fs;
use std::path::Path;

use clap::Parser;
use tracing::info;

use meal_planner_rs::cli::{Cli, Command, PantryAction, PantryFields, PlanAction};
use meal_planner_rs::config::Settings;
use meal_planner_rs::error::{PlannerError, Result};
use meal_planner_rs::grocery::build_grocery_list;
use meal_planner_rs::interface::{
    collect_pantry_item, display_grocery_list, display_meal_plan, display_nutrition,
    display_pantry, prompt_check_items, prompt_yes_no, write_grocery_csv,
};
use meal_planner_rs::logging::init_logging;
use meal_planner_rs::models::{PantryCategory, PlannedRecipe, SlotPosition};
use meal_planner_rs::nutrition::{daily_breakdown, macro_distribution, progress, summarize};
use meal_planner_rs::state::{
    load_meal_plan, load_pantry, save_grocery_list, save_meal_plan, save_pantry, DataPaths,
    Pantry,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(dir) = cli.data_dir {
        settings.data_dir = dir;
    }
    init_logging(&settings.log_level);

    let paths = DataPaths::new(&settings.data_dir);
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan { action } => cmd_plan(&paths, action.unwrap_or_default()),
        Command::Grocery { csv, check } => cmd_grocery(&paths, &settings, csv.as_deref(), check),
        Command::Nutrition => cmd_nutrition(&paths, &settings),
        Command::Pantry { action } => cmd_pantry(&paths, action.unwrap_or_default()),
    }
}

/// Show or edit the meal plan.
fn cmd_plan(paths: &DataPaths, action: PlanAction) -> Result<()> {
    let mut plan = load_meal_plan(paths.meal_plan())?;

    match action {
        PlanAction::Show => {
            display_meal_plan(&plan);
            return Ok(());
        }
        PlanAction::Add { day, meal, recipe } => {
            let content = fs::read_to_string(&recipe)?;
            let recipe: PlannedRecipe = serde_json::from_str(&content)?;
            println!("Added '{}' to {} {}.", recipe.title, day, meal);
            plan.add_recipe(day, meal, recipe);
        }
        PlanAction::Remove { day, meal, index } => {
            let removed = plan.remove_recipe(day, meal, index)?;
            println!("Removed '{}' from {} {}.", removed.title, day, meal);
        }
        PlanAction::Move {
            from_day,
            from_meal,
            from_index,
            to_day,
            to_meal,
            to_index,
        } => {
            plan.move_recipe(
                SlotPosition::new(from_day, from_meal, from_index),
                SlotPosition::new(to_day, to_meal, to_index),
            )?;
            println!("Moved recipe to {} {}.", to_day, to_meal);
        }
        PlanAction::Clear { yes } => {
            if !yes && !prompt_yes_no("Remove every recipe from the plan?", false)? {
                return Ok(());
            }
            plan.clear();
            println!("Meal plan cleared.");
        }
    }

    save_meal_plan(paths.meal_plan(), &plan)?;
    Ok(())
}

/// Regenerate, persist and print the grocery list.
fn cmd_grocery(
    paths: &DataPaths,
    settings: &Settings,
    csv: Option<&Path>,
    check: bool,
) -> Result<()> {
    let plan = load_meal_plan(paths.meal_plan())?;
    let list = build_grocery_list(&plan, &settings.cost_config());
    info!(items = list.len(), total = list.total_cost, "grocery list generated");

    save_grocery_list(paths.grocery_list(), &list.items)?;

    if let Some(path) = csv {
        write_grocery_csv(&list, path)?;
        println!("Exported grocery list to {}", path.display());
    }

    if check && !list.is_empty() {
        let checklist = prompt_check_items(&list)?;
        display_grocery_list(&list, Some(&checklist));
    } else {
        display_grocery_list(&list, None);
    }

    Ok(())
}

/// Print the nutrition summary for the plan.
fn cmd_nutrition(paths: &DataPaths, settings: &Settings) -> Result<()> {
    let plan = load_meal_plan(paths.meal_plan())?;

    let totals = summarize(&plan);
    let percent = progress(&totals, &settings.goals);
    let share = macro_distribution(&totals);
    let daily = daily_breakdown(&plan);

    display_nutrition(&totals, &settings.goals, &percent, &share, &daily);
    Ok(())
}

/// List or edit the pantry.
fn cmd_pantry(paths: &DataPaths, action: PantryAction) -> Result<()> {
    let mut pantry = Pantry::new(load_pantry(paths.pantry())?);

    match action {
        PantryAction::List { search, category } => {
            list_pantry(&pantry, search.as_deref().unwrap_or(""), category);
            return Ok(());
        }
        PantryAction::Add(fields) => {
            let item = collect_pantry_item(&fields, None)?;
            let name = item.name.clone();
            pantry.add(item)?;
            println!("Added '{}'.", name.trim());
        }
        PantryAction::Edit { index, fields } => {
            edit_pantry_item(&mut pantry, index, &fields)?;
        }
        PantryAction::Remove { index } => {
            let removed = pantry.remove(index)?;
            println!("Removed '{}'.", removed.name);
        }
    }

    save_pantry(paths.pantry(), pantry.items())?;
    Ok(())
}

fn list_pantry(pantry: &Pantry, search: &str, category: Option<PantryCategory>) {
    let matches = pantry.filter(search, category);
    let suggestions = if matches.is_empty() {
        pantry.suggest(search)
    } else {
        Vec::new()
    };
    display_pantry(&matches, &suggestions);
}

fn edit_pantry_item(pantry: &mut Pantry, index: usize, fields: &PantryFields) -> Result<()> {
    let current = pantry
        .get(index)
        .cloned()
        .ok_or(PlannerError::PantryItemNotFound(index))?;
    let item = collect_pantry_item(fields, Some(&current))?;
    pantry.update(index, item)?;
    println!("Updated item {}.", index);
    Ok(())
}
