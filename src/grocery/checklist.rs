use std::collections::HashSet;

use crate::models::GroceryItem;

/// Checked-off state layered over a generated grocery list.
///
/// Keyed by item id and never persisted; a regenerated list starts unchecked.
#[derive(Debug, Clone, Default)]
pub struct Checklist {
    checked: HashSet<u64>,
}

impl Checklist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip an item. Returns the new state.
    pub fn toggle(&mut self, id: u64) -> bool {
        if self.checked.remove(&id) {
            false
        } else {
            self.checked.insert(id);
            true
        }
    }

    pub fn check(&mut self, id: u64) {
        self.checked.insert(id);
    }

    pub fn is_checked(&self, id: u64) -> bool {
        self.checked.contains(&id)
    }

    pub fn mark_all(&mut self, items: &[GroceryItem]) {
        self.checked.extend(items.iter().map(|item| item.id));
    }

    pub fn clear(&mut self) {
        self.checked.clear();
    }

    /// Items still to buy, in list order.
    pub fn remaining<'a>(&self, items: &'a [GroceryItem]) -> Vec<&'a GroceryItem> {
        items.iter().filter(|item| !self.is_checked(item.id)).collect()
    }

    pub fn len(&self) -> usize {
        self.checked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checked.is_empty()
    }
}
