//! Terminal front end for Legends.
//!
//! Line-based: every prompt reads one line from the input, so sessions can
//! be scripted against any [`BufRead`](std::io::BufRead).

pub mod commander;
pub mod config;
pub mod input;
pub mod logging;
pub mod presentation;
pub mod session;

pub use commander::PromptCommander;
pub use config::ClientConfig;
pub use input::{Command, Prompt, PromptError, PromptResult};
pub use session::{Session, SessionEnd};
