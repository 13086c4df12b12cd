//! Content loaders for reading game data from files.
//!
//! Catalog files are whitespace-separated, one record per line. Blank lines
//! and `Name/...` header lines are ignored.

pub mod config;
pub mod factory;
pub mod heroes;
pub mod items;
pub mod monsters;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use heroes::HeroLoader;
pub use items::{ItemFile, ItemLoader};
pub use monsters::MonsterLoader;

use std::fmt::Display;
use std::io::ErrorKind;
use std::path::Path;
use std::str::FromStr;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Reads a catalog file, treating a missing file as empty.
pub(crate) fn read_catalog(path: &Path) -> LoadResult<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "catalog file not found");
            Ok(None)
        }
        Err(e) => Err(anyhow::anyhow!(
            "Failed to read file {}: {}",
            path.display(),
            e
        )),
    }
}

/// Parses every record line of a catalog.
///
/// Lines with fewer than `min_fields` fields, or that `parse` rejects, are
/// logged and skipped.
pub(crate) fn parse_records<T>(
    source: &str,
    content: &str,
    min_fields: usize,
    mut parse: impl FnMut(&[&str]) -> LoadResult<T>,
) -> Vec<T> {
    let mut records = Vec::new();
    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with("Name/") {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < min_fields {
            tracing::warn!(
                source,
                line = index + 1,
                expected = min_fields,
                found = fields.len(),
                "skipping short record"
            );
            continue;
        }

        match parse(&fields) {
            Ok(record) => records.push(record),
            Err(e) => tracing::warn!(source, line = index + 1, error = %e, "skipping malformed record"),
        }
    }
    records
}

/// Parses one numeric field, naming it in the error.
pub(crate) fn field<T>(fields: &[&str], index: usize, name: &str) -> LoadResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = fields
        .get(index)
        .ok_or_else(|| anyhow::anyhow!("missing {name}"))?;
    raw.parse()
        .map_err(|e| anyhow::anyhow!("invalid {name} '{raw}': {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_headers_blanks_and_bad_lines() {
        let content = "Name/level\n\nalpha 1\nbeta x\ngamma\n  delta 4  \n";
        let records = parse_records("test.txt", content, 2, |fields| {
            Ok((fields[0].to_string(), field::<u32>(fields, 1, "level")?))
        });
        assert_eq!(
            records,
            vec![("alpha".to_string(), 1), ("delta".to_string(), 4)]
        );
    }

    #[test]
    fn field_reports_name_and_value() {
        let err = field::<f64>(&["x", "abc"], 1, "mana").unwrap_err();
        assert!(err.to_string().contains("invalid mana 'abc'"));
        assert!(field::<f64>(&["x"], 3, "mana").is_err());
    }

    #[test]
    fn missing_catalog_is_empty() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(read_catalog(&dir.path().join("Nope.txt")).unwrap().is_none());
        assert!(read_file(&dir.path().join("Nope.txt")).is_err());
    }
}
