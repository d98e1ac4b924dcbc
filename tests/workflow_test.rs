#[macro_use]
extern crate assert_float_eq;

use std::fs;

use meal_planner_rs::grocery::{build_grocery_list, Checklist, CostConfig};
use meal_planner_rs::models::{Day, MealSlot, PlannedRecipe, SlotPosition};
use meal_planner_rs::nutrition::{progress, summarize, NutritionGoals};
use meal_planner_rs::state::{
    load_grocery_list, load_meal_plan, save_grocery_list, save_meal_plan, DataPaths,
};
use tempfile::tempdir;

const STEW_JSON: &str = r#"{
    "id": 715538,
    "title": "Beef Stew",
    "image": "https://img.example/715538.jpg",
    "nutrition": {"calories": 620, "protein": 42, "carbs": 35, "fat": 30},
    "ingredients": [
        {"id": 23572, "name": "beef chuck", "amount": 1.5, "unit": "lb", "aisle": "Meat"},
        {"id": 11124, "name": "carrot", "amount": 3, "unit": "", "aisle": "Produce"},
        {"id": 11282, "name": "onion", "amount": 1, "unit": "", "aisle": "Produce",
         "estimatedCost": {"value": 0.8, "unit": "USD"}},
        {"id": 1002030, "name": "black pepper", "amount": 1, "unit": "tsp", "aisle": "Spices"}
    ]
}"#;

const SOUP_JSON: &str = r#"{
    "id": 641975,
    "title": "Onion Soup",
    "nutrition": {"calories": 300, "protein": 8, "carbs": 30},
    "ingredients": [
        {"id": 11282, "name": "onion", "amount": 4, "unit": "", "aisle": "Produce"},
        {"id": 1001, "name": "butter", "amount": 2, "unit": "tbsp", "aisle": "Milk, Eggs, Other Dairy"}
    ]
}"#;

fn stew() -> PlannedRecipe {
    serde_json::from_str(STEW_JSON).unwrap()
}

fn soup() -> PlannedRecipe {
    serde_json::from_str(SOUP_JSON).unwrap()
}

#[test]
fn test_plan_to_grocery_list_roundtrip() {
    let dir = tempdir().unwrap();
    let paths = DataPaths::new(dir.path());

    let mut plan = load_meal_plan(paths.meal_plan()).unwrap();
    plan.add_recipe(Day::Monday, MealSlot::Dinner, stew());
    plan.add_recipe(Day::Thursday, MealSlot::Lunch, soup());
    save_meal_plan(paths.meal_plan(), &plan).unwrap();

    let reloaded = load_meal_plan(paths.meal_plan()).unwrap();
    let list = build_grocery_list(&reloaded, &CostConfig::default());
    save_grocery_list(paths.grocery_list(), &list.items).unwrap();

    assert_eq!(list.len(), 5);
    let onion = list.items.iter().find(|i| i.name == "onion").unwrap();
    assert_float_absolute_eq!(onion.amount, 5.0, 1e-9);
    assert_eq!(onion.id, 11282);
    // First contributor carried a price; it applies to the summed amount.
    assert_float_absolute_eq!(onion.estimated_cost, 4.0, 1e-9);

    // beef 1.5 * 2.5 + carrot 3 * 2.5 + onion 4.0 + pepper 2.5 + butter 2 * 2.5
    assert_float_absolute_eq!(list.total_cost, 22.75, 1e-9);

    let stored = load_grocery_list(paths.grocery_list()).unwrap();
    assert_eq!(stored, list.items);
}

#[test]
fn test_persisted_list_is_item_array_with_category_info() {
    let mut plan = meal_planner_rs::MealPlan::new();
    plan.add_recipe(Day::Monday, MealSlot::Dinner, stew());
    let list = build_grocery_list(&plan, &CostConfig::default());

    let dir = tempdir().unwrap();
    let path = dir.path().join("grocery_list.json");
    save_grocery_list(&path, &list.items).unwrap();

    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert!(raw.is_array());
    assert_eq!(raw[0]["aisle"], "Meat");
    assert_eq!(raw[0]["category"]["name"], "Meat");
    assert_eq!(raw[0]["category"]["icon"], "🥩");
    assert_eq!(raw[0]["category"]["color"], "#FFCDD2");
    assert!(raw[0]["estimatedCost"].is_number());
}

#[test]
fn test_moving_recipes_does_not_change_grocery_totals() {
    let mut plan = meal_planner_rs::MealPlan::new();
    plan.add_recipe(Day::Monday, MealSlot::Dinner, stew());
    plan.add_recipe(Day::Monday, MealSlot::Dinner, soup());
    let before = build_grocery_list(&plan, &CostConfig::default());

    plan.move_recipe(
        SlotPosition::new(Day::Monday, MealSlot::Dinner, 1),
        SlotPosition::new(Day::Saturday, MealSlot::Breakfast, 0),
    )
    .unwrap();
    let after = build_grocery_list(&plan, &CostConfig::default());

    assert_eq!(before, after);
}

#[test]
fn test_checklist_is_dropped_on_regeneration() {
    let mut plan = meal_planner_rs::MealPlan::new();
    plan.add_recipe(Day::Monday, MealSlot::Dinner, stew());
    let list = build_grocery_list(&plan, &CostConfig::default());

    let mut checklist = Checklist::new();
    checklist.mark_all(&list.items);
    assert!(checklist.remaining(&list.items).is_empty());

    let fresh = Checklist::new();
    assert_eq!(fresh.remaining(&list.items).len(), list.len());
}

#[test]
fn test_nutrition_from_planned_recipes() {
    let mut plan = meal_planner_rs::MealPlan::new();
    plan.add_recipe(Day::Monday, MealSlot::Dinner, stew());
    plan.add_recipe(Day::Tuesday, MealSlot::Lunch, soup());

    let totals = summarize(&plan);
    assert_float_absolute_eq!(totals.calories, 920.0, 1e-9);
    assert_float_absolute_eq!(totals.fat, 30.0, 1e-9);

    let percent = progress(&totals, &NutritionGoals::default());
    assert_float_absolute_eq!(percent.calories, 46.0, 1e-9);
    assert_float_absolute_eq!(percent.protein, 100.0, 1e-9);
}
