//! Item catalog types.
//!
//! # Design: Base + Kind Pattern
//!
//! - [`Item`] holds the fields every purchasable item shares (name, price,
//!   minimum level)
//! - [`ItemKind`] holds type-specific data (weapon damage, potion effect, ...)
//!
//! Items are immutable value objects once loaded. Markets and inventories
//! hold copies; a sold item is removed and goes nowhere.

mod equipment;
mod inventory;

pub use equipment::{Equipment, EquipmentSlot};
pub use inventory::{Inventory, InventoryError};

use crate::character::AttributeSet;
use crate::error::{ErrorSeverity, GameError};

/// A purchasable item with its type-specific payload.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub name: String,
    /// Purchase price in gold.
    pub price: f64,
    /// Minimum hero level required to buy this item.
    pub min_level: u32,
    pub kind: ItemKind,
}

impl Item {
    pub fn new(name: impl Into<String>, price: f64, min_level: u32, kind: ItemKind) -> Self {
        Self {
            name: name.into(),
            price,
            min_level,
            kind,
        }
    }

    pub fn weapon(
        name: impl Into<String>,
        price: f64,
        min_level: u32,
        damage: f64,
        hands_required: u8,
    ) -> Self {
        Self::new(
            name,
            price,
            min_level,
            ItemKind::Weapon(Weapon {
                damage,
                hands_required,
            }),
        )
    }

    pub fn armor(name: impl Into<String>, price: f64, min_level: u32, damage_reduction: f64) -> Self {
        Self::new(
            name,
            price,
            min_level,
            ItemKind::Armor(Armor {
                damage_reduction,
            }),
        )
    }

    pub fn potion(
        name: impl Into<String>,
        price: f64,
        min_level: u32,
        attribute_increase: f64,
        affected: AttributeSet,
    ) -> Self {
        Self::new(
            name,
            price,
            min_level,
            ItemKind::Potion(Potion {
                attribute_increase,
                affected,
            }),
        )
    }

    pub fn spell(
        name: impl Into<String>,
        price: f64,
        min_level: u32,
        damage: f64,
        mana_cost: f64,
        element: SpellElement,
    ) -> Self {
        Self::new(
            name,
            price,
            min_level,
            ItemKind::Spell(Spell {
                damage,
                mana_cost,
                element,
            }),
        )
    }

    /// Returns the item if its price and stats are finite and non-negative.
    pub fn validated(self) -> Result<Self, ItemError> {
        require_amount("cost", self.price)?;
        match &self.kind {
            ItemKind::Weapon(weapon) => require_amount("damage", weapon.damage)?,
            ItemKind::Armor(armor) => require_amount("damage reduction", armor.damage_reduction)?,
            ItemKind::Potion(potion) => {
                require_amount("attribute increase", potion.attribute_increase)?
            }
            ItemKind::Spell(spell) => {
                require_amount("damage", spell.damage)?;
                require_amount("mana cost", spell.mana_cost)?
            }
        }
        Ok(self)
    }

    pub fn category(&self) -> ItemCategory {
        self.kind.category()
    }

    pub fn as_weapon(&self) -> Option<&Weapon> {
        match &self.kind {
            ItemKind::Weapon(weapon) => Some(weapon),
            _ => None,
        }
    }

    pub fn as_armor(&self) -> Option<&Armor> {
        match &self.kind {
            ItemKind::Armor(armor) => Some(armor),
            _ => None,
        }
    }

    pub fn as_potion(&self) -> Option<&Potion> {
        match &self.kind {
            ItemKind::Potion(potion) => Some(potion),
            _ => None,
        }
    }

    pub fn as_spell(&self) -> Option<&Spell> {
        match &self.kind {
            ItemKind::Spell(spell) => Some(spell),
            _ => None,
        }
    }

    /// Short stat summary used by item tables (`Weapon (Dmg: 500)`).
    pub fn describe(&self) -> String {
        self.kind.to_string()
    }
}

/// Errors raised when an item carries an impossible stat.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ItemError {
    #[error("{field} must be a finite value >= 0 (got {value})")]
    InvalidStat { field: &'static str, value: f64 },
}

impl GameError for ItemError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            ItemError::InvalidStat { .. } => "ITEM_INVALID_STAT",
        }
    }
}

fn require_amount(field: &'static str, value: f64) -> Result<(), ItemError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ItemError::InvalidStat { field, value })
    }
}

/// Item type with type-specific data.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    /// Equippable weapon.
    Weapon(Weapon),

    /// Equippable armor.
    Armor(Armor),

    /// Single-use consumable.
    Potion(Potion),

    /// Reusable spell, paid for with mana.
    Spell(Spell),
}

impl ItemKind {
    pub fn category(&self) -> ItemCategory {
        match self {
            ItemKind::Weapon(_) => ItemCategory::Weapon,
            ItemKind::Armor(_) => ItemCategory::Armor,
            ItemKind::Potion(_) => ItemCategory::Potion,
            ItemKind::Spell(_) => ItemCategory::Spell,
        }
    }
}

impl core::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ItemKind::Weapon(w) => write!(f, "Weapon (Dmg: {:.0}, Hands: {})", w.damage, w.hands_required),
            ItemKind::Armor(a) => write!(f, "Armor (Def: {:.0})", a.damage_reduction),
            ItemKind::Potion(p) => write!(f, "Potion (+{:.0} {})", p.attribute_increase, p.affected),
            ItemKind::Spell(s) => write!(
                f,
                "Spell ({}, Dmg: {:.0}, Mana: {:.0})",
                s.element, s.damage, s.mana_cost
            ),
        }
    }
}

/// Coarse item category used for filtering inventories and catalogs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemCategory {
    Weapon,
    Armor,
    Potion,
    Spell,
}

/// Weapon-specific data.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weapon {
    pub damage: f64,
    pub hands_required: u8,
}

/// Armor-specific data.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Armor {
    /// Flat amount subtracted from every incoming hit.
    pub damage_reduction: f64,
}

/// Potion-specific data.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Potion {
    pub attribute_increase: f64,
    pub affected: AttributeSet,
}

/// Spell-specific data.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spell {
    pub damage: f64,
    pub mana_cost: f64,
    pub element: SpellElement,
}

/// Spell element; decides which monster stat a landed spell weakens.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum SpellElement {
    /// Lowers the target's defense.
    Fire,
    /// Lowers the target's base damage.
    Ice,
    /// Lowers the target's dodge chance.
    Lightning,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_rejects_negative_or_non_finite_stats() {
        assert_eq!(
            Item::weapon("Rusty", -5.0, 1, 10.0, 1).validated(),
            Err(ItemError::InvalidStat { field: "cost", value: -5.0 })
        );
        assert_eq!(
            Item::armor("Paper", 10.0, 1, -1.0).validated(),
            Err(ItemError::InvalidStat { field: "damage reduction", value: -1.0 })
        );
        let spell = Item::spell("Fizzle", 10.0, 1, 5.0, f64::INFINITY, SpellElement::Fire);
        assert!(matches!(
            spell.validated(),
            Err(ItemError::InvalidStat { field: "mana cost", .. })
        ));

        let free = Item::potion("Water", 0.0, 1, 0.0, AttributeSet::HEALTH);
        assert_eq!(free.clone().validated(), Ok(free));
    }

    #[test]
    fn describe_summarizes_each_kind() {
        let sword = Item::weapon("Sword", 500.0, 1, 800.0, 1);
        let plate = Item::armor("Platinum_Shield", 150.0, 1, 200.0);
        let elixir = Item::potion("Healing_Potion", 250.0, 1, 100.0, AttributeSet::HEALTH);
        let bolt = Item::spell("Lightning_Dagger", 400.0, 1, 500.0, 150.0, SpellElement::Lightning);

        assert_eq!(sword.describe(), "Weapon (Dmg: 800, Hands: 1)");
        assert_eq!(plate.describe(), "Armor (Def: 200)");
        assert_eq!(elixir.describe(), "Potion (+100 Health)");
        assert_eq!(bolt.describe(), "Spell (LIGHTNING, Dmg: 500, Mana: 150)");
    }

    #[test]
    fn accessors_match_kind() {
        let bolt = Item::spell("Frost_Blizzard", 750.0, 5, 850.0, 350.0, SpellElement::Ice);
        assert!(bolt.as_weapon().is_none());
        assert_eq!(bolt.category(), ItemCategory::Spell);
        assert_eq!(bolt.as_spell().unwrap().element, SpellElement::Ice);
    }

    #[test]
    fn element_parses_case_insensitively() {
        assert_eq!("fire".parse::<SpellElement>().unwrap(), SpellElement::Fire);
        assert_eq!(SpellElement::Lightning.to_string(), "LIGHTNING");
    }
}
