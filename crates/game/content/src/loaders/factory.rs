//! Content factory for loading every catalog from a data directory.

use std::path::{Path, PathBuf};

use legends_core::{GameConfig, HeroClass, Item, Monster, MonsterKind, SpellElement};

use crate::catalog::{Content, HeroRoster};
use crate::loaders::{ConfigLoader, HeroLoader, ItemFile, ItemLoader, LoadResult, MonsterLoader};

const HERO_FILES: [(HeroClass, &str); 3] = [
    (HeroClass::Warrior, "Warriors.txt"),
    (HeroClass::Sorcerer, "Sorcerers.txt"),
    (HeroClass::Paladin, "Paladins.txt"),
];

const MONSTER_FILES: [(MonsterKind, &str); 3] = [
    (MonsterKind::Dragon, "Dragons.txt"),
    (MonsterKind::Exoskeleton, "Exoskeletons.txt"),
    (MonsterKind::Spirit, "Spirits.txt"),
];

const ITEM_FILES: [(ItemFile, &str); 6] = [
    (ItemFile::Weapons, "Weaponry.txt"),
    (ItemFile::Armor, "Armory.txt"),
    (ItemFile::Potions, "Potions.txt"),
    (ItemFile::Spells(SpellElement::Fire), "FireSpells.txt"),
    (ItemFile::Spells(SpellElement::Ice), "IceSpells.txt"),
    (ItemFile::Spells(SpellElement::Lightning), "LightningSpells.txt"),
];

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml          (optional)
/// ├── Warriors.txt  Sorcerers.txt  Paladins.txt
/// ├── Dragons.txt   Exoskeletons.txt  Spirits.txt
/// ├── Weaponry.txt  Armory.txt  Potions.txt
/// └── FireSpells.txt  IceSpells.txt  LightningSpells.txt
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Directory bundled with this crate.
    pub fn bundled() -> Self {
        Self::new(concat!(env!("CARGO_MANIFEST_DIR"), "/data"))
    }

    /// Load game configuration from `config.toml`, defaulting when absent.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load_or_default(&self.data_dir.join("config.toml"))
    }

    pub fn load_heroes(&self) -> HeroRoster {
        let mut roster = HeroRoster::new();
        for (class, file) in HERO_FILES {
            let heroes = self.load_or_skip(file, |path| HeroLoader::load(path, class));
            roster.extend(class, heroes);
        }
        roster
    }

    pub fn load_monsters(&self) -> Vec<Monster> {
        MONSTER_FILES
            .into_iter()
            .flat_map(|(kind, file)| self.load_or_skip(file, |path| MonsterLoader::load(path, kind)))
            .collect()
    }

    pub fn load_items(&self) -> Vec<Item> {
        ITEM_FILES
            .into_iter()
            .flat_map(|(kind, file)| self.load_or_skip(file, |path| ItemLoader::load(path, kind)))
            .collect()
    }

    /// Loads everything. Fails only on a bad config file or when no hero
    /// could be loaded.
    pub fn load_all(&self) -> LoadResult<Content> {
        let config = self.load_config()?;
        let heroes = self.load_heroes();
        if heroes.is_empty() {
            anyhow::bail!(
                "No heroes could be loaded from {}",
                self.data_dir.display()
            );
        }
        let monsters = self.load_monsters();
        let items = self.load_items();
        if monsters.is_empty() {
            tracing::warn!("monster catalog is empty; encounters will be skipped");
        }

        tracing::info!(
            heroes = heroes.len(),
            monsters = monsters.len(),
            items = items.len(),
            "content loaded"
        );
        Ok(Content {
            config,
            heroes,
            monsters,
            items,
        })
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn load_or_skip<T>(&self, file: &str, load: impl FnOnce(&Path) -> LoadResult<Vec<T>>) -> Vec<T> {
        let path = self.data_dir.join(file);
        load(&path).unwrap_or_else(|e| {
            tracing::warn!(file, error = %e, "skipping unreadable catalog");
            Vec::new()
        })
    }
}
