//! Battle errors and rule rejections.

use crate::error::{ErrorSeverity, GameError};
use crate::item::{InventoryError, ItemCategory};

/// Structural failures. The action is not applied and must not be retried
/// unchanged.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BattleError {
    #[error("encounter needs at least one monster")]
    EmptyRoster,

    #[error("encounter has already finished")]
    Finished,

    #[error("encounter is still in progress")]
    Unfinished,

    #[error("no hero in party slot {0}")]
    UnknownHero(usize),

    #[error("hero in slot {0} has fainted")]
    HeroFainted(usize),

    #[error("hero in slot {0} already acted this round")]
    AlreadyActed(usize),

    #[error("no monster at roster index {0}")]
    UnknownTarget(usize),

    #[error("monster at roster index {0} is already defeated")]
    TargetDefeated(usize),

    #[error("inventory slot {index} holds a {found}, expected {expected}")]
    WrongItemKind {
        index: usize,
        expected: &'static str,
        found: ItemCategory,
    },

    #[error(transparent)]
    Inventory(#[from] InventoryError),
}

impl GameError for BattleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            BattleError::Finished | BattleError::Unfinished => ErrorSeverity::Internal,
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            BattleError::EmptyRoster => "BATTLE_EMPTY_ROSTER",
            BattleError::Finished => "BATTLE_FINISHED",
            BattleError::Unfinished => "BATTLE_UNFINISHED",
            BattleError::UnknownHero(_) => "BATTLE_UNKNOWN_HERO",
            BattleError::HeroFainted(_) => "BATTLE_HERO_FAINTED",
            BattleError::AlreadyActed(_) => "BATTLE_ALREADY_ACTED",
            BattleError::UnknownTarget(_) => "BATTLE_UNKNOWN_TARGET",
            BattleError::TargetDefeated(_) => "BATTLE_TARGET_DEFEATED",
            BattleError::WrongItemKind { .. } => "BATTLE_WRONG_ITEM_KIND",
            BattleError::Inventory(_) => "BATTLE_BAD_ITEM_INDEX",
        }
    }
}

/// Game-rule rejections. State is unchanged and the hero may choose again.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleRejection {
    #[error("not enough mana: {required:.0} needed, {available:.0} available")]
    InsufficientMana { required: f64, available: f64 },
}

impl GameError for BattleRejection {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            BattleRejection::InsufficientMana { .. } => "BATTLE_INSUFFICIENT_MANA",
        }
    }
}
