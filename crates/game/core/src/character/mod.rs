//! Characters: heroes, monsters and the base attributes they share.
//!
//! Every character has an immutable name, a level of at least 1 and a current
//! hp that never drops below zero. Health caps are derived from the level
//! (`level * 100`) rather than stored.

mod attributes;
mod hero;
mod monster;

pub use attributes::{Attribute, AttributeSet, ParseAttributeError};
pub use hero::{Hero, HeroClass, HeroError};
pub use monster::{Monster, MonsterKind};

use crate::error::{ErrorSeverity, GameError};

/// Health granted per character level.
pub const HP_PER_LEVEL: f64 = 100.0;

/// Health cap for a character of the given level.
pub fn max_hp_for_level(level: u32) -> f64 {
    f64::from(level) * HP_PER_LEVEL
}

/// Subtracts `amount` from `value`, flooring the result at zero.
pub(crate) fn reduce_toward_zero(value: f64, amount: f64) -> f64 {
    (value - amount.max(0.0)).max(0.0)
}

/// Errors raised when constructing a character from invalid data.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum CharacterError {
    #[error("character name must not be empty")]
    EmptyName,

    #[error("level must be at least 1")]
    InvalidLevel,

    #[error("{field} must be a finite value >= {min} (got {value})")]
    InvalidStat {
        field: &'static str,
        min: f64,
        value: f64,
    },
}

impl GameError for CharacterError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            CharacterError::EmptyName => "CHARACTER_EMPTY_NAME",
            CharacterError::InvalidLevel => "CHARACTER_INVALID_LEVEL",
            CharacterError::InvalidStat { .. } => "CHARACTER_INVALID_STAT",
        }
    }
}

pub(crate) fn require_stat(field: &'static str, value: f64, min: f64) -> Result<f64, CharacterError> {
    if value.is_finite() && value >= min {
        Ok(value)
    } else {
        Err(CharacterError::InvalidStat { field, min, value })
    }
}

pub(crate) fn require_positive(field: &'static str, value: f64) -> Result<f64, CharacterError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(CharacterError::InvalidStat {
            field,
            min: f64::MIN_POSITIVE,
            value,
        })
    }
}

/// Name, level and health shared by every character.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vitals {
    name: String,
    level: u32,
    hp: f64,
}

impl Vitals {
    /// Creates vitals at full health for the given level.
    pub fn new(name: impl Into<String>, level: u32) -> Result<Self, CharacterError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CharacterError::EmptyName);
        }
        if level == 0 {
            return Err(CharacterError::InvalidLevel);
        }
        Ok(Self {
            name,
            level,
            hp: max_hp_for_level(level),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn hp(&self) -> f64 {
        self.hp
    }

    pub fn max_hp(&self) -> f64 {
        max_hp_for_level(self.level)
    }

    /// Removes hp, clamped at zero. Returns the hp actually lost.
    pub fn take_damage(&mut self, amount: f64) -> f64 {
        let before = self.hp;
        self.hp = reduce_toward_zero(self.hp, amount);
        before - self.hp
    }

    /// Adds hp, clamped at the level cap. Returns the hp actually gained.
    pub fn heal(&mut self, amount: f64) -> f64 {
        let before = self.hp;
        self.hp = (self.hp + amount.max(0.0)).min(self.max_hp());
        self.hp - before
    }

    pub(crate) fn set_level(&mut self, level: u32) {
        self.level = level.max(1);
        self.hp = self.max_hp();
    }

    pub(crate) fn set_hp(&mut self, hp: f64) {
        self.hp = hp.clamp(0.0, self.max_hp());
    }
}

/// Common read access and damage handling for heroes and monsters.
pub trait Character {
    fn vitals(&self) -> &Vitals;

    fn vitals_mut(&mut self) -> &mut Vitals;

    fn name(&self) -> &str {
        self.vitals().name()
    }

    fn level(&self) -> u32 {
        self.vitals().level()
    }

    fn hp(&self) -> f64 {
        self.vitals().hp()
    }

    fn is_alive(&self) -> bool {
        self.hp() > 0.0
    }

    /// Applies already-mitigated damage. Returns the hp actually lost.
    fn take_damage(&mut self, amount: f64) -> f64 {
        self.vitals_mut().take_damage(amount)
    }
}
