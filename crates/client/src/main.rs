//! Legends game client binary.
//!
//! Wires environment configuration, logging and the loaded content into an
//! interactive terminal [`Session`](legends_client::Session).
//!
//! ```bash
//! LEGENDS_SEED=7 RUST_LOG=debug cargo run -p legends-client
//! ```

use std::io;

use anyhow::Result;
use legends_client::{ClientConfig, Prompt, Session, logging};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    logging::setup_logging()?;

    let factory = config.content_factory();
    tracing::info!(data_dir = %factory.data_dir().display(), "Starting Legends client");
    let content = factory.load_all()?;

    let seed = config.seed();
    tracing::info!(seed, "session seed");

    let stdin = io::stdin();
    let prompt = Prompt::new(stdin.lock(), io::stdout());
    Session::new(prompt, &content, &config, seed).run()?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
