use serde::{Deserialize, Serialize};

/// Price attached to an ingredient by the recipe source, per unit of `amount`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatedCost {
    pub value: f64,

    #[serde(default)]
    pub unit: String,
}

/// One ingredient line of a recipe.
///
/// Any field the recipe source leaves out is defaulted rather than rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(default)]
    pub id: u64,

    pub name: String,

    #[serde(default)]
    pub amount: f64,

    #[serde(default)]
    pub unit: String,

    #[serde(default)]
    pub aisle: Option<String>,

    #[serde(
        rename = "estimatedCost",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub estimated_cost: Option<EstimatedCost>,
}

impl Ingredient {
    pub fn new(name: &str, amount: f64, unit: &str, aisle: Option<&str>) -> Self {
        Self {
            id: 0,
            name: name.to_string(),
            amount,
            unit: unit.to_string(),
            aisle: aisle.map(str::to_string),
            estimated_cost: None,
        }
    }

    /// Known unit price, if the recipe source supplied one.
    pub fn unit_price(&self) -> Option<f64> {
        self.estimated_cost.as_ref().map(|c| c.value)
    }
}

/// Macro totals for a single serving of a recipe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    #[serde(default)]
    pub calories: f64,

    #[serde(default)]
    pub protein: f64,

    #[serde(default)]
    pub carbs: f64,

    #[serde(default)]
    pub fat: f64,
}

/// A recipe as it sits in a meal-plan slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedRecipe {
    #[serde(default)]
    pub id: u64,

    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default)]
    pub nutrition: Nutrition,

    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

impl PlannedRecipe {
    pub fn new(id: u64, title: &str, ingredients: Vec<Ingredient>) -> Self {
        Self {
            id,
            title: title.to_string(),
            image: None,
            nutrition: Nutrition::default(),
            ingredients,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_without_ingredients_deserializes() {
        let json = r#"{"id": 7, "title": "Toast"}"#;
        let recipe: PlannedRecipe = serde_json::from_str(json).unwrap();
        assert!(recipe.ingredients.is_empty());
        assert_eq!(recipe.nutrition, Nutrition::default());
    }

    #[test]
    fn test_ingredient_missing_aisle_and_price() {
        let json = r#"{"id": 1, "name": "salt", "amount": 1, "unit": "tsp"}"#;
        let ingredient: Ingredient = serde_json::from_str(json).unwrap();
        assert_eq!(ingredient.aisle, None);
        assert_eq!(ingredient.unit_price(), None);
    }

    #[test]
    fn test_ingredient_estimated_cost() {
        let json = r#"{"name": "egg", "amount": 2, "estimatedCost": {"value": 0.4, "unit": "USD"}}"#;
        let ingredient: Ingredient = serde_json::from_str(json).unwrap();
        assert_eq!(ingredient.unit_price(), Some(0.4));
    }
}
