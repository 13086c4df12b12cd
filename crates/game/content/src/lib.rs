//! Data-driven content for Legends.
//!
//! This crate reads the flat-file catalogs and the TOML rule overrides:
//! - Hero rosters (`Warriors.txt`, `Sorcerers.txt`, `Paladins.txt`)
//! - Monster catalog (`Dragons.txt`, `Exoskeletons.txt`, `Spirits.txt`)
//! - Item catalog (weapons, armor, potions and the three spell schools)
//! - Game configuration (`config.toml`)
//!
//! Malformed catalog lines are logged and skipped; only an empty hero roster
//! is fatal. Loaded content is handed to `legends-core` by value.

pub mod catalog;
pub mod loaders;

pub use catalog::{Content, HeroRoster};
pub use loaders::{
    ConfigLoader, ContentFactory, HeroLoader, ItemFile, ItemLoader, LoadResult, MonsterLoader,
};
