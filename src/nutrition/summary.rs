use serde::Deserialize;

use crate::models::{Day, MealPlan, Nutrition, PlannedRecipe};

/// Daily targets the summary is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct NutritionGoals {
    #[serde(default = "default_calories")]
    pub calories: f64,

    #[serde(default = "default_protein")]
    pub protein: f64,

    #[serde(default = "default_carbs")]
    pub carbs: f64,

    #[serde(default = "default_fat")]
    pub fat: f64,
}

fn default_calories() -> f64 {
    2000.0
}

fn default_protein() -> f64 {
    50.0
}

fn default_carbs() -> f64 {
    300.0
}

fn default_fat() -> f64 {
    65.0
}

impl Default for NutritionGoals {
    fn default() -> Self {
        Self {
            calories: default_calories(),
            protein: default_protein(),
            carbs: default_carbs(),
            fat: default_fat(),
        }
    }
}

/// Percent of goal reached per nutrient, capped at 100.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NutritionProgress {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Share of macro grams, in percent.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MacroShare {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

fn add(total: &mut Nutrition, n: &Nutrition) {
    total.calories += n.calories;
    total.protein += n.protein;
    total.carbs += n.carbs;
    total.fat += n.fat;
}

fn sum<'a>(recipes: impl Iterator<Item = &'a PlannedRecipe>) -> Nutrition {
    let mut total = Nutrition::default();
    for recipe in recipes {
        add(&mut total, &recipe.nutrition);
    }
    total
}

/// Totals across every recipe in the plan.
pub fn summarize(plan: &MealPlan) -> Nutrition {
    sum(plan.recipes())
}

/// Totals per day, Monday first. Days without recipes report zeros.
pub fn daily_breakdown(plan: &MealPlan) -> Vec<(Day, Nutrition)> {
    Day::ALL
        .into_iter()
        .map(|day| (day, sum(plan.recipes_on(day))))
        .collect()
}

fn percent_of(value: f64, goal: f64) -> f64 {
    if goal <= 0.0 {
        return 0.0;
    }
    (value / goal * 100.0).min(100.0)
}

pub fn progress(totals: &Nutrition, goals: &NutritionGoals) -> NutritionProgress {
    NutritionProgress {
        calories: percent_of(totals.calories, goals.calories),
        protein: percent_of(totals.protein, goals.protein),
        carbs: percent_of(totals.carbs, goals.carbs),
        fat: percent_of(totals.fat, goals.fat),
    }
}

/// Protein/carbs/fat split by grams. All zeros when nothing is planned.
pub fn macro_distribution(totals: &Nutrition) -> MacroShare {
    let grams = totals.protein + totals.carbs + totals.fat;
    if grams <= 0.0 {
        return MacroShare::default();
    }
    MacroShare {
        protein: totals.protein / grams * 100.0,
        carbs: totals.carbs / grams * 100.0,
        fat: totals.fat / grams * 100.0,
    }
}
