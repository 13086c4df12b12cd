//! Client configuration read from the environment.
use std::env;
use std::path::PathBuf;

use legends_content::ContentFactory;

/// Runtime options for one client process.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    /// Directory holding the catalogs and `config.toml`. `None` uses the
    /// data bundled with `legends-content`.
    pub data_dir: Option<PathBuf>,
    /// Fixed RNG seed for reproducible sessions.
    pub seed: Option<u64>,
    /// Board size to use instead of asking.
    pub board_size: Option<usize>,
}

impl ClientConfig {
    /// Construct client configuration from environment variables.
    ///
    /// Environment variables:
    /// - `LEGENDS_DATA_DIR` - Catalog directory (default: bundled data)
    /// - `LEGENDS_SEED` - RNG seed (default: random)
    /// - `LEGENDS_BOARD_SIZE` - Board size; skips the size prompt
    pub fn from_env() -> Self {
        Self {
            data_dir: env::var_os("LEGENDS_DATA_DIR").map(PathBuf::from),
            seed: read_env("LEGENDS_SEED"),
            board_size: read_env("LEGENDS_BOARD_SIZE"),
        }
    }

    pub fn content_factory(&self) -> ContentFactory {
        match &self.data_dir {
            Some(dir) => ContentFactory::new(dir),
            None => ContentFactory::bundled(),
        }
    }

    /// The configured seed, or a fresh random one.
    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
