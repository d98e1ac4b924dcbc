use dialoguer::{Confirm, Input, MultiSelect, Select};

use crate::cli::PantryFields;
use crate::error::{PlannerError, Result};
use crate::grocery::{Checklist, GroceryList};
use crate::models::{PantryCategory, PantryItem, PANTRY_UNITS};

/// Prompt for a pantry item name.
pub fn prompt_name(current: Option<&str>) -> Result<String> {
    let mut input = Input::<String>::new().with_prompt("Item name");
    if let Some(current) = current {
        input = input.default(current.to_string());
    }
    Ok(input.interact_text()?)
}

/// Prompt for a quantity.
pub fn prompt_quantity(current: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("Quantity")
        .default(current.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| PlannerError::InvalidInput(format!("Invalid quantity: {}", input)))
}

/// Prompt for a unit from the fixed list.
pub fn prompt_unit(current: &str) -> Result<String> {
    let default = PANTRY_UNITS.iter().position(|u| *u == current).unwrap_or(0);
    let selection = Select::new()
        .with_prompt("Unit")
        .items(&PANTRY_UNITS)
        .default(default)
        .interact()?;
    Ok(PANTRY_UNITS[selection].to_string())
}

/// Prompt for a pantry category.
pub fn prompt_category(current: PantryCategory) -> Result<PantryCategory> {
    let names: Vec<&str> = PantryCategory::ALL.iter().map(|c| c.as_str()).collect();
    let default = PantryCategory::ALL
        .iter()
        .position(|c| *c == current)
        .unwrap_or(0);
    let selection = Select::new()
        .with_prompt("Category")
        .items(&names)
        .default(default)
        .interact()?;
    Ok(PantryCategory::ALL[selection])
}

/// Prompt for an optional expiration date. Empty input clears it.
pub fn prompt_expiration(current: Option<&str>) -> Result<Option<String>> {
    let input: String = Input::new()
        .with_prompt("Expiration date (YYYY-MM-DD, Enter to skip)")
        .default(current.unwrap_or_default().to_string())
        .allow_empty(true)
        .interact_text()?;

    let input = input.trim();
    Ok((!input.is_empty()).then(|| input.to_string()))
}

/// Build a pantry item from flags, prompting for whatever was not given.
///
/// `base` supplies the current values when editing.
pub fn collect_pantry_item(
    fields: &PantryFields,
    base: Option<&PantryItem>,
) -> Result<PantryItem> {
    let name = match &fields.name {
        Some(name) => name.clone(),
        None => prompt_name(base.map(|b| b.name.as_str()))?,
    };

    let quantity = match fields.quantity {
        Some(q) => q,
        None => prompt_quantity(base.map(|b| b.quantity).unwrap_or(1.0))?,
    };

    let unit = match &fields.unit {
        Some(unit) => unit.clone(),
        None => prompt_unit(base.map(|b| b.unit.as_str()).unwrap_or(PANTRY_UNITS[0]))?,
    };

    let category = match fields.category {
        Some(c) => c,
        None => prompt_category(base.map(|b| b.category).unwrap_or_default())?,
    };

    let expiration_date = match &fields.expires {
        Some(date) => Some(date.clone()),
        None => prompt_expiration(base.and_then(|b| b.expiration_date.as_deref()))?,
    };

    Ok(PantryItem {
        name,
        quantity,
        unit,
        category,
        expiration_date,
    })
}

/// Interactive check-off of grocery items.
pub fn prompt_check_items(list: &GroceryList) -> Result<Checklist> {
    let labels: Vec<String> = list
        .items
        .iter()
        .map(|item| format!("{} ({} {})", item.name, item.amount, item.unit))
        .collect();

    let selected = MultiSelect::new()
        .with_prompt("Check off items (space to toggle, enter to finish)")
        .items(&labels)
        .interact()?;

    let mut checklist = Checklist::new();
    for i in selected {
        checklist.check(list.items[i].id);
    }
    Ok(checklist)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
