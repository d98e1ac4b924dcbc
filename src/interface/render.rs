use crate::grocery::{format_cost, Checklist, GroceryList};
use crate::models::{Day, MealPlan, MealSlot, Nutrition, PantryItem};
use crate::nutrition::{MacroShare, NutritionGoals, NutritionProgress};

/// Width of the text progress bars.
const BAR_WIDTH: usize = 20;

fn bar(percent: f64) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

/// Format an amount without trailing zeros.
fn format_amount(amount: f64) -> String {
    let s = format!("{:.2}", amount);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Print the week, one day per block, with indices usable by `plan remove`/`move`.
pub fn display_meal_plan(plan: &MealPlan) {
    if plan.is_empty() {
        println!("Meal plan is empty. Add recipes with 'plan add'.");
        return;
    }

    println!();
    println!("=== Weekly Meal Plan ===");

    for day in Day::ALL {
        println!();
        println!("{}", day);
        for slot in MealSlot::ALL {
            let recipes = plan.slot(day, slot);
            if recipes.is_empty() {
                println!("  {:<10} -", slot);
                continue;
            }
            for (i, recipe) in recipes.iter().enumerate() {
                let label = if i == 0 { slot.as_str() } else { "" };
                println!(
                    "  {:<10} [{}] {} ({:.0} kcal)",
                    label, i, recipe.title, recipe.nutrition.calories
                );
            }
        }
    }

    println!();
    println!("Total recipes: {}", plan.recipe_count());
    println!();
}

/// Print the grocery list grouped by category, with line costs and total.
pub fn display_grocery_list(list: &GroceryList, checklist: Option<&Checklist>) {
    if list.is_empty() {
        println!("Grocery list is empty (no recipes with ingredients in the plan).");
        return;
    }

    println!();
    println!("=== Smart Grocery List ===");

    let max_name_len = list.items.iter().map(|i| i.name.len()).max().unwrap_or(10);

    for (category, items) in list.sections() {
        let info = category.info();
        println!();
        println!("{} {}", info.icon, category);

        for item in items {
            let checked = checklist.is_some_and(|c| c.is_checked(item.id));
            let mark = if checked { "x" } else { " " };
            let quantity = format!("{} {}", format_amount(item.amount), item.unit);
            println!(
                "  [{}] {:<width$}  {:<14} ${:>7}",
                mark,
                item.name,
                quantity.trim_end(),
                format_cost(item.estimated_cost),
                width = max_name_len
            );
        }
    }

    println!();
    println!("Items: {}", list.len());
    if let Some(checklist) = checklist {
        println!("Remaining: {}", checklist.remaining(&list.items).len());
    }
    println!("Estimated Total: ${}", format_cost(list.total_cost));
    println!();
}

/// Print totals, goal progress, macro split and per-day calories.
pub fn display_nutrition(
    totals: &Nutrition,
    goals: &NutritionGoals,
    progress: &NutritionProgress,
    share: &MacroShare,
    daily: &[(Day, Nutrition)],
) {
    println!();
    println!("=== Nutrition Summary ===");
    println!();

    let rows = [
        ("Calories", totals.calories, goals.calories, "kcal", progress.calories),
        ("Protein", totals.protein, goals.protein, "g", progress.protein),
        ("Carbs", totals.carbs, goals.carbs, "g", progress.carbs),
        ("Fat", totals.fat, goals.fat, "g", progress.fat),
    ];
    for (label, value, goal, unit, percent) in rows {
        println!(
            "  {:<9} {:>7.0}/{:<5.0}{:<5} {} {:>3.0}%",
            label,
            value,
            goal,
            unit,
            bar(percent),
            percent
        );
    }

    println!();
    println!(
        "Macro split: protein {:.0}% | carbs {:.0}% | fat {:.0}%",
        share.protein, share.carbs, share.fat
    );

    println!();
    println!("--- Daily Intake ---");
    for (day, n) in daily {
        println!(
            "  {:<10} {:>6.0} kcal  P:{:.0} C:{:.0} F:{:.0}",
            day, n.calories, n.protein, n.carbs, n.fat
        );
    }
    println!();
}

/// Print pantry items with their indices into the full list.
pub fn display_pantry(items: &[(usize, &PantryItem)], suggestions: &[&str]) {
    if items.is_empty() {
        println!("No pantry items found.");
        if !suggestions.is_empty() {
            println!("Did you mean: {}?", suggestions.join(", "));
        }
        return;
    }

    println!();
    println!("=== Pantry ({} items) ===", items.len());
    println!();

    for (index, item) in items {
        let expires = item
            .expiration_date
            .as_deref()
            .map(|d| format!("  expires {}", d))
            .unwrap_or_default();
        println!(
            "  [{}] {} - {} {} ({}){}",
            index,
            item.name,
            format_amount(item.quantity),
            item.unit,
            item.category,
            expires
        );
    }

    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_trims_zeros() {
        assert_eq!(format_amount(2.0), "2");
        assert_eq!(format_amount(1.5), "1.5");
        assert_eq!(format_amount(0.333), "0.33");
    }

    #[test]
    fn test_bar_bounds() {
        assert_eq!(bar(0.0), format!("[{}]", "-".repeat(BAR_WIDTH)));
        assert_eq!(bar(150.0), format!("[{}]", "#".repeat(BAR_WIDTH)));
        assert_eq!(bar(50.0).matches('#').count(), BAR_WIDTH / 2);
    }
}
