use strsim::jaro_winkler;

use crate::error::{PlannerError, Result};
use crate::models::{PantryCategory, PantryItem};

/// Minimum Jaro-Winkler similarity for a "did you mean" suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Maximum number of suggestions offered.
const MAX_SUGGESTIONS: usize = 3;

/// Manages the pantry inventory in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Pantry {
    items: Vec<PantryItem>,
}

fn validate(item: &mut PantryItem) -> Result<()> {
    let trimmed = item.name.trim();
    if trimmed.is_empty() {
        return Err(PlannerError::InvalidInput(
            "Pantry item name must not be blank".to_string(),
        ));
    }
    item.name = trimmed.to_string();
    Ok(())
}

impl Pantry {
    pub fn new(items: Vec<PantryItem>) -> Self {
        Self { items }
    }

    /// Add an item to the end of the pantry. Blank names are rejected.
    pub fn add(&mut self, mut item: PantryItem) -> Result<()> {
        validate(&mut item)?;
        self.items.push(item);
        Ok(())
    }

    /// Replace the item at `index`.
    pub fn update(&mut self, index: usize, mut item: PantryItem) -> Result<()> {
        validate(&mut item)?;
        let slot = self
            .items
            .get_mut(index)
            .ok_or(PlannerError::PantryItemNotFound(index))?;
        *slot = item;
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<PantryItem> {
        if index >= self.items.len() {
            return Err(PlannerError::PantryItemNotFound(index));
        }
        Ok(self.items.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&PantryItem> {
        self.items.get(index)
    }

    /// Items whose name contains `search` (case-insensitive) and that belong to
    /// `category` when one is given. Indices refer to the full list.
    pub fn filter(
        &self,
        search: &str,
        category: Option<PantryCategory>,
    ) -> Vec<(usize, &PantryItem)> {
        let needle = search.to_lowercase();
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.name.to_lowercase().contains(&needle))
            .filter(|(_, item)| category.is_none_or(|c| item.category == c))
            .collect()
    }

    /// Close-but-not-contained names for a search that matched nothing.
    pub fn suggest(&self, search: &str) -> Vec<&str> {
        let needle = search.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        let mut candidates: Vec<(&str, f64)> = self
            .items
            .iter()
            .map(|item| {
                (
                    item.name.as_str(),
                    jaro_winkler(&item.name.to_lowercase(), &needle),
                )
            })
            .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        candidates.dedup_by(|a, b| a.0.eq_ignore_ascii_case(b.0));

        candidates
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(|(name, _)| name)
            .collect()
    }

    pub fn items(&self) -> &[PantryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_pantry() -> Pantry {
        Pantry::new(vec![
            PantryItem::new("Whole Milk", 1.0, "l", PantryCategory::Dairy),
            PantryItem::new("Cheddar", 200.0, "g", PantryCategory::Dairy),
            PantryItem::new("Basmati Rice", 2.0, "kg", PantryCategory::Grains),
            PantryItem::new("Frozen Peas", 500.0, "g", PantryCategory::Frozen),
        ])
    }

    #[test]
    fn test_add_rejects_blank_name() {
        let mut pantry = Pantry::default();
        let err = pantry.add(PantryItem::new("   ", 1.0, "units", PantryCategory::Other));
        assert!(matches!(err, Err(PlannerError::InvalidInput(_))));
        assert!(pantry.is_empty());
    }

    #[test]
    fn test_add_trims_name() {
        let mut pantry = Pantry::default();
        pantry
            .add(PantryItem::new("  Eggs ", 12.0, "units", PantryCategory::Dairy))
            .unwrap();
        assert_eq!(pantry.get(0).unwrap().name, "Eggs");
    }

    #[test]
    fn test_update_and_remove() {
        let mut pantry = sample_pantry();
        pantry
            .update(1, PantryItem::new("Gouda", 150.0, "g", PantryCategory::Dairy))
            .unwrap();
        assert_eq!(pantry.get(1).unwrap().name, "Gouda");

        let removed = pantry.remove(0).unwrap();
        assert_eq!(removed.name, "Whole Milk");
        assert_eq!(pantry.len(), 3);

        assert!(matches!(
            pantry.remove(10),
            Err(PlannerError::PantryItemNotFound(10))
        ));
    }

    #[test]
    fn test_filter_by_search_and_category() {
        let pantry = sample_pantry();

        let rice = pantry.filter("RICE", None);
        assert_eq!(rice.len(), 1);
        assert_eq!(rice[0].0, 2);

        let dairy = pantry.filter("", Some(PantryCategory::Dairy));
        assert_eq!(dairy.len(), 2);

        assert!(pantry.filter("milk", Some(PantryCategory::Frozen)).is_empty());
    }

    #[test]
    fn test_suggest_close_names() {
        let pantry = sample_pantry();
        let suggestions = pantry.suggest("chedar");
        assert_eq!(suggestions, vec!["Cheddar"]);
        assert!(pantry.suggest("zzzz").is_empty());
    }
}
