//! Monster catalog loader.

use std::path::Path;

use legends_core::{Monster, MonsterKind};

use crate::loaders::{LoadResult, field, parse_records, read_catalog};

/// Loader for monster catalogs.
///
/// Format: `name level damage defense dodge_chance`, dodge in percent.
pub struct MonsterLoader;

impl MonsterLoader {
    pub const FIELDS: usize = 5;

    pub fn load(path: &Path, kind: MonsterKind) -> LoadResult<Vec<Monster>> {
        let Some(content) = read_catalog(path)? else {
            return Ok(Vec::new());
        };
        Ok(Self::parse(&path.display().to_string(), &content, kind))
    }

    pub fn parse(source: &str, content: &str, kind: MonsterKind) -> Vec<Monster> {
        parse_records(source, content, Self::FIELDS, |fields| {
            Ok(Monster::new(
                fields[0],
                kind,
                field(fields, 1, "level")?,
                field(fields, 2, "damage")?,
                field(fields, 3, "defense")?,
                field(fields, 4, "dodge chance")?,
            )?)
        })
    }
}
