use crate::error::{ErrorSeverity, GameError};

/// How surplus experience is handled when a single gain crosses more than one
/// level threshold.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LevelUpPolicy {
    /// Level up repeatedly while the threshold is met, subtracting each
    /// threshold from the pool so no experience is lost.
    #[default]
    Carry,
    /// At most one level per gain; experience resets to zero on level-up.
    Single,
}

/// Game configuration constants and tunable rule parameters.
///
/// `Default` reproduces the standard rules. With the `serde` feature every
/// field is optional in config files and falls back to its default.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Experience needed per level to trigger a level-up.
    pub experience_per_level: u32,
    pub level_up_policy: LevelUpPolicy,
    /// Mana multiplier applied on level-up.
    pub mana_growth: f64,
    /// Attribute multiplier for non-favored attributes on level-up.
    pub standard_growth: f64,
    /// Attribute multiplier for the class's favored attributes on level-up.
    pub favored_growth: f64,

    /// Damage dealt by a hero with no weapon equipped.
    pub unarmed_damage: f64,
    /// Fraction of the affected monster stat removed by a landed spell.
    pub spell_debuff_ratio: f64,

    /// Experience per defeated monster level, shared by the survivors.
    pub experience_per_monster_level: u32,
    /// Gold per surviving hero, multiplied by the highest monster level.
    pub gold_per_monster_level: f64,
    /// Probability that a victory drops one catalog item.
    pub loot_drop_chance: f64,

    /// Probability that entering a common tile starts an encounter.
    pub ambush_chance: f64,
    pub min_board_size: usize,
    pub max_board_size: usize,
    pub inaccessible_ratio: f64,
    pub market_ratio: f64,

    /// Number of distinct catalog items a market offers.
    pub market_stock_size: usize,
    /// Fraction of the price paid back when an item is sold.
    pub resale_ratio: f64,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of heroes in a party.
    pub const MAX_PARTY_SIZE: usize = 3;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_EXPERIENCE_PER_LEVEL: u32 = 10;
    pub const DEFAULT_AMBUSH_CHANCE: f64 = 0.5;
    pub const DEFAULT_RESALE_RATIO: f64 = 0.5;

    pub fn new() -> Self {
        Self {
            experience_per_level: Self::DEFAULT_EXPERIENCE_PER_LEVEL,
            level_up_policy: LevelUpPolicy::Carry,
            mana_growth: 1.1,
            standard_growth: 1.05,
            favored_growth: 1.10,
            unarmed_damage: 10.0,
            spell_debuff_ratio: 0.1,
            experience_per_monster_level: 2,
            gold_per_monster_level: 100.0,
            loot_drop_chance: 0.25,
            ambush_chance: Self::DEFAULT_AMBUSH_CHANCE,
            min_board_size: 4,
            max_board_size: 20,
            inaccessible_ratio: 0.20,
            market_ratio: 0.30,
            market_stock_size: 10,
            resale_ratio: Self::DEFAULT_RESALE_RATIO,
        }
    }

    /// Experience needed to leave the given level. Never below 1.
    pub fn experience_threshold(&self, level: u32) -> u32 {
        level.saturating_mul(self.experience_per_level).max(1)
    }

    /// Checks the rule parameters a config file may override.
    ///
    /// Growth factors must be positive, probabilities and ratios must lie in
    /// `[0, 1]`, and the board size range must be non-empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("mana_growth", self.mana_growth),
            ("standard_growth", self.standard_growth),
            ("favored_growth", self.favored_growth),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidGrowth { field, value });
            }
        }

        for (field, value) in [
            ("spell_debuff_ratio", self.spell_debuff_ratio),
            ("loot_drop_chance", self.loot_drop_chance),
            ("ambush_chance", self.ambush_chance),
            ("inaccessible_ratio", self.inaccessible_ratio),
            ("market_ratio", self.market_ratio),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidProbability { field, value });
            }
        }

        for (field, value) in [
            ("unarmed_damage", self.unarmed_damage),
            ("gold_per_monster_level", self.gold_per_monster_level),
            ("resale_ratio", self.resale_ratio),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::NegativeAmount { field, value });
            }
        }

        if self.min_board_size == 0 || self.min_board_size > self.max_board_size {
            return Err(ConfigError::InvalidBoardSize {
                min: self.min_board_size,
                max: self.max_board_size,
            });
        }

        Ok(())
    }

    pub fn with_level_up_policy(mut self, policy: LevelUpPolicy) -> Self {
        self.level_up_policy = policy;
        self
    }

    pub fn with_loot_drop_chance(mut self, chance: f64) -> Self {
        self.loot_drop_chance = chance.clamp(0.0, 1.0);
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Rule parameters rejected by [`GameConfig::validate`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be a finite value > 0 (got {value})")]
    InvalidGrowth { field: &'static str, value: f64 },

    #[error("{field} must lie in [0, 1] (got {value})")]
    InvalidProbability { field: &'static str, value: f64 },

    #[error("{field} must be a finite value >= 0 (got {value})")]
    NegativeAmount { field: &'static str, value: f64 },

    #[error("board size range {min}..={max} is empty or starts at 0")]
    InvalidBoardSize { min: usize, max: usize },
}

impl GameError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::InvalidGrowth { .. } => "CONFIG_INVALID_GROWTH",
            ConfigError::InvalidProbability { .. } => "CONFIG_INVALID_PROBABILITY",
            ConfigError::NegativeAmount { .. } => "CONFIG_NEGATIVE_AMOUNT",
            ConfigError::InvalidBoardSize { .. } => "CONFIG_INVALID_BOARD_SIZE",
        }
    }
}
