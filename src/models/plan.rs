use std::collections::BTreeMap;
use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::models::PlannedRecipe;

/// Day of the planning week. Ordering follows the week, Monday first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum,
)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Meal slot within a day.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum,
)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl MealSlot {
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Dinner,
        MealSlot::Snacks,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Dinner => "Dinner",
            MealSlot::Snacks => "Snacks",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Address of one recipe inside the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotPosition {
    pub day: Day,
    pub slot: MealSlot,
    pub index: usize,
}

impl SlotPosition {
    pub fn new(day: Day, slot: MealSlot, index: usize) -> Self {
        Self { day, slot, index }
    }
}

type DayPlan = BTreeMap<MealSlot, Vec<PlannedRecipe>>;

/// Weekly plan: day -> meal slot -> ordered recipes.
///
/// Serializes as the nested object `{"Monday": {"Breakfast": [...], ...}, ...}`.
/// Days or slots missing from a stored plan read as empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MealPlan {
    days: BTreeMap<Day, DayPlan>,
}

impl Default for MealPlan {
    fn default() -> Self {
        Self::new()
    }
}

impl MealPlan {
    /// Plan with all 7 x 4 slots present and empty.
    pub fn new() -> Self {
        let mut plan = Self {
            days: BTreeMap::new(),
        };
        plan.ensure_all_slots();
        plan
    }

    /// Insert any day or slot that is missing. Existing recipes are untouched.
    ///
    /// Returns the number of slots that had to be created.
    pub fn ensure_all_slots(&mut self) -> usize {
        let mut created = 0;
        for day in Day::ALL {
            let day_plan = self.days.entry(day).or_default();
            for slot in MealSlot::ALL {
                if !day_plan.contains_key(&slot) {
                    day_plan.insert(slot, Vec::new());
                    created += 1;
                }
            }
        }
        created
    }

    /// Recipes in a slot; empty when the slot is absent.
    pub fn slot(&self, day: Day, slot: MealSlot) -> &[PlannedRecipe] {
        self.days
            .get(&day)
            .and_then(|d| d.get(&slot))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn slot_mut(&mut self, day: Day, slot: MealSlot) -> &mut Vec<PlannedRecipe> {
        self.days.entry(day).or_default().entry(slot).or_default()
    }

    /// Every recipe in day order, then slot order, then list order.
    pub fn recipes(&self) -> impl Iterator<Item = &PlannedRecipe> {
        self.days
            .values()
            .flat_map(|day_plan| day_plan.values())
            .flatten()
    }

    /// Recipes of one day in slot order.
    pub fn recipes_on(&self, day: Day) -> impl Iterator<Item = &PlannedRecipe> {
        self.days
            .get(&day)
            .into_iter()
            .flat_map(|day_plan| day_plan.values())
            .flatten()
    }

    pub fn recipe_count(&self) -> usize {
        self.recipes().count()
    }

    pub fn is_empty(&self) -> bool {
        self.recipe_count() == 0
    }

    /// Append a recipe to the end of a slot.
    pub fn add_recipe(&mut self, day: Day, slot: MealSlot, recipe: PlannedRecipe) {
        self.slot_mut(day, slot).push(recipe);
    }

    /// Remove and return the recipe at `index` in a slot.
    pub fn remove_recipe(
        &mut self,
        day: Day,
        slot: MealSlot,
        index: usize,
    ) -> Result<PlannedRecipe> {
        let recipes = self.slot_mut(day, slot);
        if index >= recipes.len() {
            return Err(PlannerError::RecipeNotFound { day, slot, index });
        }
        Ok(recipes.remove(index))
    }

    /// Move a recipe between (or within) slots.
    ///
    /// The destination index is clamped to the destination list length.
    pub fn move_recipe(&mut self, from: SlotPosition, to: SlotPosition) -> Result<()> {
        let recipe = self.remove_recipe(from.day, from.slot, from.index)?;
        let dest = self.slot_mut(to.day, to.slot);
        let index = to.index.min(dest.len());
        dest.insert(index, recipe);
        Ok(())
    }

    /// Empty every slot.
    pub fn clear(&mut self) {
        for day_plan in self.days.values_mut() {
            for recipes in day_plan.values_mut() {
                recipes.clear();
            }
        }
    }
}
