//! Monsters sampled from the catalog for encounters.

use super::{Character, CharacterError, Vitals, reduce_toward_zero, require_stat};
use crate::item::SpellElement;

/// Monster family. Purely descriptive; all families fight the same way.
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
pub enum MonsterKind {
    Dragon,
    Exoskeleton,
    Spirit,
}

/// A monster. Its level and health cap are fixed at construction.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Monster {
    vitals: Vitals,
    kind: MonsterKind,
    base_damage: f64,
    defense: f64,
    /// Raw percentage as found in the catalog (35 means 35%).
    dodge_chance: f64,
}

impl Monster {
    pub fn new(
        name: impl Into<String>,
        kind: MonsterKind,
        level: u32,
        base_damage: f64,
        defense: f64,
        dodge_chance: f64,
    ) -> Result<Self, CharacterError> {
        Ok(Self {
            vitals: Vitals::new(name, level)?,
            kind,
            base_damage: require_stat("base_damage", base_damage, 0.0)?,
            defense: require_stat("defense", defense, 0.0)?,
            dodge_chance: require_stat("dodge_chance", dodge_chance, 0.0)?,
        })
    }

    pub fn kind(&self) -> MonsterKind {
        self.kind
    }

    pub fn base_damage(&self) -> f64 {
        self.base_damage
    }

    pub fn defense(&self) -> f64 {
        self.defense
    }

    /// Stored dodge value, in percent.
    pub fn dodge_chance(&self) -> f64 {
        self.dodge_chance
    }

    /// Dodge chance as a probability in `[0, 1]`.
    pub fn dodge_probability(&self) -> f64 {
        (self.dodge_chance / 100.0).clamp(0.0, 1.0)
    }

    pub fn reduce_defense(&mut self, amount: f64) {
        self.defense = reduce_toward_zero(self.defense, amount);
    }

    pub fn reduce_base_damage(&mut self, amount: f64) {
        self.base_damage = reduce_toward_zero(self.base_damage, amount);
    }

    pub fn reduce_dodge_chance(&mut self, amount: f64) {
        self.dodge_chance = reduce_toward_zero(self.dodge_chance, amount);
    }

    /// Weakens the stat tied to `element` by `ratio` of its current value.
    ///
    /// Returns the amount removed.
    pub fn weaken(&mut self, element: SpellElement, ratio: f64) -> f64 {
        let ratio = ratio.clamp(0.0, 1.0);
        match element {
            SpellElement::Fire => {
                let amount = self.defense * ratio;
                self.reduce_defense(amount);
                amount
            }
            SpellElement::Ice => {
                let amount = self.base_damage * ratio;
                self.reduce_base_damage(amount);
                amount
            }
            SpellElement::Lightning => {
                let amount = self.dodge_chance * ratio;
                self.reduce_dodge_chance(amount);
                amount
            }
        }
    }
}

impl Character for Monster {
    fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    fn vitals_mut(&mut self) -> &mut Vitals {
        &mut self.vitals
    }
}

impl core::fmt::Display for Monster {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "[{}] {} (Lvl {}) | HP: {:.0} | Dmg: {:.0} | Def: {:.0} | Dodge: {:.0}%",
            self.kind,
            self.name(),
            self.level(),
            self.hp(),
            self.base_damage,
            self.defense,
            self.dodge_chance
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dragon() -> Monster {
        Monster::new("Desghidorrah", MonsterKind::Dragon, 3, 300.0, 400.0, 35.0).unwrap()
    }

    #[test]
    fn health_follows_level() {
        let monster = dragon();
        assert_eq!(monster.hp(), 300.0);
        assert_eq!(monster.level(), 3);
    }

    #[test]
    fn dodge_is_stored_as_percent() {
        let monster = dragon();
        assert_eq!(monster.dodge_chance(), 35.0);
        assert!((monster.dodge_probability() - 0.35).abs() < 1e-12);

        let slippery = Monster::new("Phantom", MonsterKind::Spirit, 1, 1.0, 1.0, 250.0).unwrap();
        assert_eq!(slippery.dodge_probability(), 1.0);
    }

    #[test]
    fn reductions_floor_at_zero() {
        let mut monster = dragon();
        monster.reduce_defense(1_000.0);
        monster.reduce_base_damage(1_000.0);
        monster.reduce_dodge_chance(1_000.0);
        assert_eq!(monster.defense(), 0.0);
        assert_eq!(monster.base_damage(), 0.0);
        assert_eq!(monster.dodge_chance(), 0.0);
    }

    #[test]
    fn weaken_targets_element_stat() {
        let mut monster = dragon();
        assert_eq!(monster.weaken(SpellElement::Fire, 0.1), 40.0);
        assert_eq!(monster.defense(), 360.0);
        assert_eq!(monster.weaken(SpellElement::Ice, 0.1), 30.0);
        assert_eq!(monster.base_damage(), 270.0);
        monster.weaken(SpellElement::Lightning, 0.1);
        assert!((monster.dodge_chance() - 31.5).abs() < 1e-12);
    }

    #[test]
    fn rejects_negative_stats() {
        assert!(Monster::new("Bad", MonsterKind::Exoskeleton, 1, -1.0, 0.0, 0.0).is_err());
        assert!(Monster::new("Bad", MonsterKind::Exoskeleton, 0, 1.0, 0.0, 0.0).is_err());
    }
}
