//! Hero roster loader.

use std::path::Path;

use legends_core::{Hero, HeroClass};

use crate::loaders::{LoadResult, field, parse_records, read_catalog};

/// Loader for hero rosters.
///
/// Format: `name mana strength agility dexterity money experience`.
pub struct HeroLoader;

impl HeroLoader {
    pub const FIELDS: usize = 7;

    /// Load one class's heroes from a file. A missing file yields no heroes.
    pub fn load(path: &Path, class: HeroClass) -> LoadResult<Vec<Hero>> {
        let Some(content) = read_catalog(path)? else {
            return Ok(Vec::new());
        };
        Ok(Self::parse(&path.display().to_string(), &content, class))
    }

    pub fn parse(source: &str, content: &str, class: HeroClass) -> Vec<Hero> {
        parse_records(source, content, Self::FIELDS, |fields| {
            Ok(Hero::new(
                fields[0],
                class,
                field(fields, 1, "mana")?,
                field(fields, 2, "strength")?,
                field(fields, 3, "agility")?,
                field(fields, 4, "dexterity")?,
                field(fields, 5, "money")?,
                field(fields, 6, "experience")?,
            )?)
        })
    }
}
