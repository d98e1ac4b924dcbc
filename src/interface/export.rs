use std::path::Path;

use crate::error::Result;
use crate::grocery::{format_cost, GroceryList};

/// Write the grocery list to a CSV file, one row per line plus a total row.
pub fn write_grocery_csv(list: &GroceryList, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["category", "name", "amount", "unit", "aisle", "estimated_cost"])?;

    for (category, items) in list.sections() {
        for item in items {
            wtr.write_record([
                category.as_str().to_string(),
                item.name.clone(),
                item.amount.to_string(),
                item.unit.clone(),
                item.aisle.clone().unwrap_or_default(),
                format_cost(item.estimated_cost),
            ])?;
        }
    }

    wtr.write_record([
        "Total".to_string(),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        format_cost(list.total_cost),
    ])?;

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grocery::{build_grocery_list, CostConfig};
    use crate::models::{Day, Ingredient, MealPlan, MealSlot, PlannedRecipe};
    use tempfile::NamedTempFile;

    #[test]
    fn test_csv_has_header_lines_and_total() {
        let mut plan = MealPlan::new();
        plan.add_recipe(
            Day::Monday,
            MealSlot::Dinner,
            PlannedRecipe::new(
                1,
                "Tacos",
                vec![
                    Ingredient::new("tortilla", 4.0, "", Some("Bakery/Bread")),
                    Ingredient::new("beef", 1.0, "lb", Some("Meat")),
                ],
            ),
        );
        let list = build_grocery_list(&plan, &CostConfig::default());

        let file = NamedTempFile::new().unwrap();
        write_grocery_csv(&list, file.path()).unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "category,name,amount,unit,aisle,estimated_cost");
        assert_eq!(lines[1], "Meat,beef,1,lb,Meat,2.50");
        assert_eq!(lines[3], "Total,,,,,12.50");
    }
}
