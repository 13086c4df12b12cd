//! Deterministic rules for Legends: Monsters and Heroes.
//!
//! `legends-core` defines the character and item model, the party, the
//! turn-based battle engine and the overworld/market rules. It performs no
//! I/O: catalogs come from `legends-content` and every random draw goes
//! through a caller-supplied [`rand::Rng`], so a seeded generator replays a
//! session exactly.
pub mod battle;
pub mod character;
pub mod combat;
pub mod config;
pub mod error;
pub mod item;
pub mod market;
pub mod party;
pub mod world;

pub use battle::{
    ActionKind, AutoCommander, Battle, BattleError, BattleEvent, BattlePhase, BattleRejection,
    BattleReport, Commander, HeroAction, Outcome, Resolution, Rewards, resolve_encounter,
};
pub use character::{
    Attribute, AttributeSet, Character, CharacterError, Hero, HeroClass, HeroError, Monster,
    MonsterKind, Vitals,
};
pub use config::{ConfigError, GameConfig, LevelUpPolicy};
pub use error::{ErrorSeverity, GameError};
pub use item::{
    Armor, Equipment, EquipmentSlot, Inventory, InventoryError, Item, ItemCategory, ItemError,
    ItemKind, Potion, Spell, SpellElement, Weapon,
};
pub use market::{Market, MarketError, TradeRejection};
pub use party::{Party, PartyError};
pub use world::{Board, CellKind, Direction, MoveOutcome, Position, WorldError, sample_roster};
