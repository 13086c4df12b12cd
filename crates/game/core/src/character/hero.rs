//! Playable heroes: stats, progression, money and gear.

use super::{
    Attribute, AttributeSet, Character, CharacterError, Vitals, max_hp_for_level,
    reduce_toward_zero, require_positive, require_stat,
};
use crate::config::{GameConfig, LevelUpPolicy};
use crate::error::{ErrorSeverity, GameError};
use crate::item::{Equipment, Inventory, InventoryError, Item, Potion};

/// Hero class. Drives which attributes grow faster on level-up.
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
pub enum HeroClass {
    Warrior,
    Sorcerer,
    Paladin,
}

impl HeroClass {
    /// Attributes that grow at the favored rate on level-up.
    pub const fn favored(self) -> AttributeSet {
        match self {
            HeroClass::Warrior => AttributeSet::STRENGTH.union(AttributeSet::AGILITY),
            HeroClass::Sorcerer => AttributeSet::AGILITY.union(AttributeSet::DEXTERITY),
            HeroClass::Paladin => AttributeSet::STRENGTH.union(AttributeSet::DEXTERITY),
        }
    }

    /// Growth multiplier for one combat attribute on level-up.
    pub fn growth(self, attribute: Attribute, config: &GameConfig) -> f64 {
        if self.favored().affects(attribute) {
            config.favored_growth
        } else {
            config.standard_growth
        }
    }
}

/// Errors from hero gear operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HeroError {
    #[error("'{0}' cannot be equipped in that slot")]
    NotEquippable(String),

    #[error(transparent)]
    Inventory(#[from] InventoryError),
}

impl GameError for HeroError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            HeroError::NotEquippable(_) => ErrorSeverity::Recoverable,
            HeroError::Inventory(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            HeroError::NotEquippable(_) => "HERO_NOT_EQUIPPABLE",
            HeroError::Inventory(err) => err.error_code(),
        }
    }
}

/// A playable hero.
///
/// Heroes always start at level 1 with `hp = 100`. Health is capped at
/// `level * 100`; heals past the cap are discarded.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hero {
    vitals: Vitals,
    class: HeroClass,
    mana: f64,
    strength: f64,
    agility: f64,
    dexterity: f64,
    money: f64,
    experience: u32,
    inventory: Inventory,
    equipment: Equipment,
}

impl Hero {
    /// Creates a level 1 hero from catalog values.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        class: HeroClass,
        mana: f64,
        strength: f64,
        agility: f64,
        dexterity: f64,
        money: f64,
        experience: u32,
    ) -> Result<Self, CharacterError> {
        Ok(Self {
            vitals: Vitals::new(name, 1)?,
            class,
            mana: require_stat("mana", mana, 0.0)?,
            strength: require_positive("strength", strength)?,
            agility: require_positive("agility", agility)?,
            dexterity: require_positive("dexterity", dexterity)?,
            money: require_stat("money", money, 0.0)?,
            experience,
            inventory: Inventory::new(),
            equipment: Equipment::empty(),
        })
    }

    pub fn class(&self) -> HeroClass {
        self.class
    }

    pub fn mana(&self) -> f64 {
        self.mana
    }

    pub fn strength(&self) -> f64 {
        self.strength
    }

    pub fn agility(&self) -> f64 {
        self.agility
    }

    pub fn dexterity(&self) -> f64 {
        self.dexterity
    }

    pub fn money(&self) -> f64 {
        self.money
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    pub fn max_hp(&self) -> f64 {
        self.vitals.max_hp()
    }

    /// Current value of any attribute, health included.
    pub fn attribute(&self, attribute: Attribute) -> f64 {
        match attribute {
            Attribute::Health => self.hp(),
            Attribute::Mana => self.mana,
            Attribute::Strength => self.strength,
            Attribute::Agility => self.agility,
            Attribute::Dexterity => self.dexterity,
        }
    }

    // ===== progression =====

    /// Adds experience and levels up according to the configured policy.
    ///
    /// Returns the number of levels gained.
    pub fn gain_experience(&mut self, amount: u32, config: &GameConfig) -> u32 {
        self.experience = self.experience.saturating_add(amount);

        let mut gained = 0;
        while self.experience >= config.experience_threshold(self.level()) {
            match config.level_up_policy {
                LevelUpPolicy::Carry => {
                    self.experience -= config.experience_threshold(self.level());
                    self.level_up(config);
                    gained += 1;
                }
                LevelUpPolicy::Single => {
                    self.experience = 0;
                    self.level_up(config);
                    return 1;
                }
            }
        }
        gained
    }

    /// Raises the level by one and applies the class growth table.
    ///
    /// Experience bookkeeping is left to [`Hero::gain_experience`].
    pub fn level_up(&mut self, config: &GameConfig) {
        let level = self.level() + 1;
        self.vitals.set_level(level);
        self.mana *= config.mana_growth;
        self.strength *= self.class.growth(Attribute::Strength, config);
        self.agility *= self.class.growth(Attribute::Agility, config);
        self.dexterity *= self.class.growth(Attribute::Dexterity, config);

        tracing::info!(hero = %self.name(), level, "hero leveled up");
    }

    /// Brings a fainted hero back with half health and no mana.
    pub fn revive(&mut self) {
        self.vitals.set_hp(max_hp_for_level(self.level()) / 2.0);
        self.mana = 0.0;
    }

    /// Restores hp up to the level cap. Returns the hp actually gained.
    pub fn heal(&mut self, amount: f64) -> f64 {
        self.vitals.heal(amount)
    }

    /// Deducts mana if enough is available.
    pub fn spend_mana(&mut self, amount: f64) -> bool {
        if amount < 0.0 || self.mana < amount {
            return false;
        }
        self.mana = reduce_toward_zero(self.mana, amount);
        true
    }

    /// Applies a potion's increase to every attribute it affects.
    pub fn apply_potion(&mut self, potion: &Potion) {
        let amount = potion.attribute_increase.max(0.0);
        for attribute in potion.affected.attributes() {
            match attribute {
                Attribute::Health => {
                    self.heal(amount);
                }
                Attribute::Mana => self.mana += amount,
                Attribute::Strength => self.strength += amount,
                Attribute::Agility => self.agility += amount,
                Attribute::Dexterity => self.dexterity += amount,
            }
        }
    }

    // ===== money =====

    pub fn add_money(&mut self, amount: f64) {
        self.money += amount.max(0.0);
    }

    /// Deducts money if the hero can afford it; leaves state unchanged otherwise.
    pub fn deduct_money(&mut self, amount: f64) -> bool {
        if amount < 0.0 || self.money < amount {
            return false;
        }
        self.money -= amount;
        true
    }

    // ===== gear =====

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    pub fn equipment(&self) -> &Equipment {
        &self.equipment
    }

    /// Equips a weapon, returning the one it replaced.
    pub fn equip_weapon(&mut self, item: Item) -> Result<Option<Item>, HeroError> {
        if item.as_weapon().is_none() {
            return Err(HeroError::NotEquippable(item.name));
        }
        self.equip(item)
    }

    /// Equips armor, returning the piece it replaced.
    pub fn equip_armor(&mut self, item: Item) -> Result<Option<Item>, HeroError> {
        if item.as_armor().is_none() {
            return Err(HeroError::NotEquippable(item.name));
        }
        self.equip(item)
    }

    /// Equips a copy of the inventory entry at `index`.
    pub fn equip_from_inventory(&mut self, index: usize) -> Result<Option<Item>, HeroError> {
        let item = self.inventory.get(index)?.clone();
        self.equip(item)
    }

    /// Removes one matching item from the inventory, unequipping it if no
    /// other copy remains.
    pub fn discard(&mut self, item: &Item) -> Result<Item, HeroError> {
        let removed = self.inventory.remove(item)?;
        self.release_equipped(&removed);
        Ok(removed)
    }

    /// Removes the inventory entry at `index`, unequipping it if no other copy
    /// remains.
    pub fn discard_at(&mut self, index: usize) -> Result<Item, HeroError> {
        let removed = self.inventory.remove_at(index)?;
        self.release_equipped(&removed);
        Ok(removed)
    }

    /// Damage of a melee attack: equipped weapon or the unarmed baseline.
    pub fn attack_damage(&self, config: &GameConfig) -> f64 {
        self.equipment
            .weapon()
            .map_or(config.unarmed_damage, |weapon| weapon.damage)
    }

    /// Flat reduction from equipped armor (0 when unarmored).
    pub fn damage_reduction(&self) -> f64 {
        self.equipment
            .armor()
            .map_or(0.0, |armor| armor.damage_reduction)
    }

    fn equip(&mut self, item: Item) -> Result<Option<Item>, HeroError> {
        let name = item.name.clone();
        let replaced = self
            .equipment
            .equip(item)
            .map_err(|item| HeroError::NotEquippable(item.name))?;
        tracing::debug!(hero = %self.name(), item = %name, "equipped");
        Ok(replaced)
    }

    fn release_equipped(&mut self, removed: &Item) {
        if let Some(slot) = self.equipment.slot_of(removed) {
            if !self.inventory.contains(removed) {
                self.equipment.unequip(slot);
            }
        }
    }
}

impl Character for Hero {
    fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    fn vitals_mut(&mut self) -> &mut Vitals {
        &mut self.vitals
    }
}

impl core::fmt::Display for Hero {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "[{}] {:<15} | Lvl: {} | HP: {:<4.0} | MP: {:<4.0} | Str: {:<4.0} | Dex: {:<4.0} | Agi: {:<4.0} | Gold: {:.0}",
            self.class,
            self.name(),
            self.level(),
            self.hp(),
            self.mana,
            self.strength,
            self.dexterity,
            self.agility,
            self.money
        )
    }
}
