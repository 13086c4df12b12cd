//! Hero inventory.
//!
//! Insertion-ordered, uncapped; duplicates are kept as separate entries.

use super::{Item, ItemCategory};
use crate::error::{ErrorSeverity, GameError};

/// Errors reported by inventory operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    /// No entry matched the requested item.
    #[error("item '{0}' is not in the inventory")]
    NotFound(String),

    /// Index past the end of the inventory.
    #[error("inventory slot {index} out of range (len {len})")]
    SlotOutOfRange { index: usize, len: usize },
}

impl GameError for InventoryError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            InventoryError::NotFound(_) => ErrorSeverity::Recoverable,
            InventoryError::SlotOutOfRange { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            InventoryError::NotFound(_) => "INVENTORY_NOT_FOUND",
            InventoryError::SlotOutOfRange { .. } => "INVENTORY_SLOT_OUT_OF_RANGE",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Removes the first entry equal to `item`.
    pub fn remove(&mut self, item: &Item) -> Result<Item, InventoryError> {
        let index = self
            .items
            .iter()
            .position(|owned| owned == item)
            .ok_or_else(|| InventoryError::NotFound(item.name.clone()))?;
        Ok(self.items.remove(index))
    }

    pub fn remove_at(&mut self, index: usize) -> Result<Item, InventoryError> {
        if index >= self.items.len() {
            return Err(InventoryError::SlotOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    pub fn get(&self, index: usize) -> Result<&Item, InventoryError> {
        self.items.get(index).ok_or(InventoryError::SlotOutOfRange {
            index,
            len: self.items.len(),
        })
    }

    pub fn contains(&self, item: &Item) -> bool {
        self.items.contains(item)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Entries of one category, paired with their inventory index.
    pub fn of_category(&self, category: ItemCategory) -> impl Iterator<Item = (usize, &Item)> {
        self.items
            .iter()
            .enumerate()
            .filter(move |(_, item)| item.category() == category)
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
    use crate::character::AttributeSet;

    fn potion() -> Item {
        Item::potion("Healing_Potion", 250.0, 1, 100.0, AttributeSet::HEALTH)
    }

    #[test]
    fn duplicates_are_separate_entries() {
        let mut inventory = Inventory::new();
        inventory.add(potion());
        inventory.add(potion());
        assert_eq!(inventory.len(), 2);

        inventory.remove(&potion()).unwrap();
        assert_eq!(inventory.len(), 1);
        assert!(inventory.contains(&potion()));
    }

    #[test]
    fn removing_missing_item_reports_not_found() {
        let mut inventory = Inventory::new();
        let err = inventory.remove(&potion()).unwrap_err();
        assert_eq!(err, InventoryError::NotFound("Healing_Potion".into()));
        assert!(err.severity().is_recoverable());
    }

    #[test]
    fn remove_at_checks_bounds() {
        let mut inventory = Inventory::new();
        inventory.add(potion());
        assert!(matches!(
            inventory.remove_at(3),
            Err(InventoryError::SlotOutOfRange { index: 3, len: 1 })
        ));
        assert_eq!(inventory.remove_at(0).unwrap().name, "Healing_Potion");
        assert!(inventory.is_empty());
    }

    #[test]
    fn category_filter_keeps_original_indices() {
        let mut inventory = Inventory::new();
        inventory.add(Item::weapon("Sword", 500.0, 1, 800.0, 1));
        inventory.add(potion());
        let potions: Vec<_> = inventory.of_category(ItemCategory::Potion).collect();
        assert_eq!(potions.len(), 1);
        assert_eq!(potions[0].0, 1);
    }
}
