use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::grocery::classifier::{classify, Category};
use crate::grocery::constants::MISSING_AISLE_SORT_KEY;
use crate::grocery::cost::{estimate_total_cost, line_cost, CostConfig};
use crate::models::{GroceryItem, Ingredient, MealPlan};

/// Identity of a grocery line. A missing aisle is its own key, distinct from `""`.
type ItemKey = (String, Option<String>);

/// Aggregated list plus its estimated total.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroceryList {
    pub items: Vec<GroceryItem>,

    #[serde(rename = "totalCost")]
    pub total_cost: f64,
}

impl GroceryList {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items of one category, in list order.
    pub fn in_category(&self, category: Category) -> Vec<&GroceryItem> {
        self.items
            .iter()
            .filter(|item| item.category == category)
            .collect()
    }

    /// Non-empty category sections in display order.
    pub fn sections(&self) -> Vec<(Category, Vec<&GroceryItem>)> {
        Category::ALL
            .into_iter()
            .map(|category| (category, self.in_category(category)))
            .filter(|(_, items)| !items.is_empty())
            .collect()
    }
}

fn new_item(ingredient: &Ingredient) -> GroceryItem {
    GroceryItem {
        id: ingredient.id,
        name: ingredient.name.clone(),
        amount: ingredient.amount,
        unit: ingredient.unit.clone(),
        aisle: ingredient.aisle.clone(),
        category: classify(ingredient.aisle.as_deref()),
        unit_price: ingredient.unit_price(),
        estimated_cost: 0.0,
    }
}

fn aisle_sort_key(aisle: Option<&str>) -> &str {
    aisle
        .filter(|s| !s.is_empty())
        .unwrap_or(MISSING_AISLE_SORT_KEY)
}

/// Byte-order aisle comparison. Missing or empty aisles compare as "ZZZ".
fn compare_aisles(a: Option<&str>, b: Option<&str>) -> Ordering {
    aisle_sort_key(a).cmp(aisle_sort_key(b))
}

/// Fold every ingredient of every planned recipe into a deduplicated list.
///
/// Lines merge on (name, aisle) and their amounts are summed without unit
/// conversion. The result is ordered by aisle; ties keep first-seen order.
pub fn aggregate(plan: &MealPlan, config: &CostConfig) -> Vec<GroceryItem> {
    let mut items: Vec<GroceryItem> = Vec::new();
    let mut index: HashMap<ItemKey, usize> = HashMap::new();
    let mut occurrences = 0usize;

    for recipe in plan.recipes() {
        for ingredient in &recipe.ingredients {
            occurrences += 1;
            let key = (ingredient.name.clone(), ingredient.aisle.clone());
            match index.get(&key) {
                Some(&i) => items[i].amount += ingredient.amount,
                None => {
                    index.insert(key, items.len());
                    items.push(new_item(ingredient));
                }
            }
        }
    }

    for item in &mut items {
        item.estimated_cost = line_cost(item.unit_price, item.amount, config);
    }

    items.sort_by(|a, b| compare_aisles(a.aisle.as_deref(), b.aisle.as_deref()));

    debug!(
        recipes = plan.recipe_count(),
        ingredients = occurrences,
        lines = items.len(),
        "aggregated grocery list"
    );

    items
}

/// Aggregate a plan and price the result.
pub fn build_grocery_list(plan: &MealPlan, config: &CostConfig) -> GroceryList {
    let items = aggregate(plan, config);
    let total_cost = estimate_total_cost(&items, config);
    GroceryList { items, total_cost }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, MealSlot, PlannedRecipe};

    fn plan_with(recipes: Vec<(Day, MealSlot, Vec<Ingredient>)>) -> MealPlan {
        let mut plan = MealPlan::new();
        for (i, (day, slot, ingredients)) in recipes.into_iter().enumerate() {
            let recipe = PlannedRecipe::new(i as u64, "Recipe", ingredients);
            plan.add_recipe(day, slot, recipe);
        }
        plan
    }

    #[test]
    fn test_compare_aisles_missing_as_zzz() {
        assert_eq!(compare_aisles(Some("Produce"), None), Ordering::Less);
        assert_eq!(compare_aisles(Some(""), Some("Baking")), Ordering::Greater);
        assert_eq!(compare_aisles(None, Some("")), Ordering::Equal);
        assert_eq!(compare_aisles(None, Some("ZZZ")), Ordering::Equal);
        assert_eq!(compare_aisles(None, Some("ZZZZ")), Ordering::Less);
        assert_eq!(compare_aisles(Some("Dairy"), Some("Baking")), Ordering::Greater);
    }

    #[test]
    fn test_compare_aisles_case_sensitive() {
        // Uppercase sorts before lowercase in byte order.
        assert_eq!(compare_aisles(Some("Spices"), Some("bakery")), Ordering::Less);
    }

    #[test]
    fn test_missing_aisle_and_empty_aisle_are_distinct_lines() {
        let plan = plan_with(vec![(
            Day::Monday,
            MealSlot::Lunch,
            vec![
                Ingredient::new("salt", 1.0, "tsp", None),
                Ingredient::new("salt", 1.0, "tsp", Some("")),
            ],
        )]);
        let items = aggregate(&plan, &CostConfig::default());
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_first_contributor_fields_kept() {
        let mut first = Ingredient::new("milk", 1.0, "cup", Some("Dairy"));
        first.id = 11;
        let mut second = Ingredient::new("milk", 2.0, "tbsp", Some("Dairy"));
        second.id = 12;

        let plan = plan_with(vec![
            (Day::Monday, MealSlot::Breakfast, vec![first]),
            (Day::Tuesday, MealSlot::Breakfast, vec![second]),
        ]);
        let items = aggregate(&plan, &CostConfig::default());

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, 11);
        assert_eq!(items[0].unit, "cup");
        assert!((items[0].amount - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_line_cost_uses_summed_amount() {
        let rice = |amount| Ingredient::new("rice", amount, "cup", Some("Pasta and Rice"));
        let plan = plan_with(vec![
            (Day::Monday, MealSlot::Dinner, vec![rice(1.0)]),
            (Day::Friday, MealSlot::Dinner, vec![rice(2.0)]),
        ]);
        let items = aggregate(&plan, &CostConfig::default());
        assert!((items[0].estimated_cost - 7.5).abs() < 1e-9);
        assert_eq!(items[0].category, Category::Other);
    }

    #[test]
    fn test_sections_follow_category_order() {
        let plan = plan_with(vec![(
            Day::Monday,
            MealSlot::Dinner,
            vec![
                Ingredient::new("oregano", 1.0, "tsp", Some("Spices")),
                Ingredient::new("beef", 1.0, "lb", Some("Meat")),
                Ingredient::new("mystery", 1.0, "", None),
                Ingredient::new("onion", 1.0, "", Some("Produce")),
            ],
        )]);
        let list = build_grocery_list(&plan, &CostConfig::default());
        let order: Vec<Category> = list.sections().into_iter().map(|(c, _)| c).collect();
        assert_eq!(
            order,
            vec![Category::Produce, Category::Meat, Category::Spices, Category::Other]
        );
    }
}
