//! Equipment slots for heroes.
//!
//! Equipping copies an item into its slot; the inventory keeps its entry.
//! The equipped weapon sets melee damage and the equipped armor mitigates
//! incoming hits.

use super::{Armor, Item, ItemCategory, Weapon};

/// Equipment slot an item can occupy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EquipmentSlot {
    Weapon,
    Armor,
}

impl EquipmentSlot {
    /// Slot for an item, or `None` for consumables and spells.
    pub fn for_item(item: &Item) -> Option<Self> {
        match item.category() {
            ItemCategory::Weapon => Some(EquipmentSlot::Weapon),
            ItemCategory::Armor => Some(EquipmentSlot::Armor),
            ItemCategory::Potion | ItemCategory::Spell => None,
        }
    }
}

/// Equipment state for a hero: zero or one item per slot.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equipment {
    weapon: Option<Item>,
    armor: Option<Item>,
}

impl Equipment {
    /// Creates empty equipment (no weapon or armor).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Puts the item in its slot, returning the item it replaced.
    ///
    /// Returns `Err(item)` unchanged if the item is not equippable.
    pub fn equip(&mut self, item: Item) -> Result<Option<Item>, Item> {
        match EquipmentSlot::for_item(&item) {
            Some(EquipmentSlot::Weapon) => Ok(self.weapon.replace(item)),
            Some(EquipmentSlot::Armor) => Ok(self.armor.replace(item)),
            None => Err(item),
        }
    }

    pub fn unequip(&mut self, slot: EquipmentSlot) -> Option<Item> {
        match slot {
            EquipmentSlot::Weapon => self.weapon.take(),
            EquipmentSlot::Armor => self.armor.take(),
        }
    }

    pub fn weapon_item(&self) -> Option<&Item> {
        self.weapon.as_ref()
    }

    pub fn armor_item(&self) -> Option<&Item> {
        self.armor.as_ref()
    }

    pub fn weapon(&self) -> Option<&Weapon> {
        self.weapon.as_ref().and_then(Item::as_weapon)
    }

    pub fn armor(&self) -> Option<&Armor> {
        self.armor.as_ref().and_then(Item::as_armor)
    }

    /// Returns the slot holding an item equal to `item`, if any.
    pub fn slot_of(&self, item: &Item) -> Option<EquipmentSlot> {
        if self.weapon.as_ref() == Some(item) {
            Some(EquipmentSlot::Weapon)
        } else if self.armor.as_ref() == Some(item) {
            Some(EquipmentSlot::Armor)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::AttributeSet;

    #[test]
    fn equipping_replaces_previous_item() {
        let mut equipment = Equipment::empty();
        let dagger = Item::weapon("Dagger", 200.0, 1, 250.0, 1);
        let axe = Item::weapon("Axe", 550.0, 5, 850.0, 1);

        assert_eq!(equipment.equip(dagger.clone()), Ok(None));
        assert_eq!(equipment.equip(axe.clone()), Ok(Some(dagger)));
        assert_eq!(equipment.weapon().unwrap().damage, 850.0);
        assert_eq!(equipment.slot_of(&axe), Some(EquipmentSlot::Weapon));
    }

    #[test]
    fn consumables_are_not_equippable() {
        let mut equipment = Equipment::empty();
        let potion = Item::potion("Mermaid_Tears", 850.0, 5, 100.0, AttributeSet::ALL);
        assert_eq!(equipment.equip(potion.clone()), Err(potion));
        assert!(equipment.weapon_item().is_none());
        assert!(equipment.armor_item().is_none());
    }

    #[test]
    fn unequip_empties_slot() {
        let mut equipment = Equipment::empty();
        equipment
            .equip(Item::armor("Breastplate", 350.0, 3, 600.0))
            .unwrap();
        assert!(equipment.unequip(EquipmentSlot::Armor).is_some());
        assert!(equipment.armor().is_none());
    }
}
