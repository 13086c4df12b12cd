//! Encounter resolution.
//!
//! ```text
//! start ──► ActionSelection ──submit──► (heroes pending) ─┐
//!              ▲                                           │
//!              └──── monster phase ◄── (all heroes acted) ◄┘
//!                         │
//!                         ▼
//!               Finished(Victory | Defeat | Fled)
//! ```
//!
//! [`Battle`] is the step-by-step API for interactive callers.
//! [`resolve_encounter`] runs a whole battle against a [`Commander`].
//! Rewards are applied only when a finished battle is concluded.

mod action;
mod driver;
mod engine;
mod error;
mod event;
mod reward;

pub use action::{ActionKind, HeroAction};
pub use driver::{AutoCommander, Commander, resolve_encounter};
pub use engine::{Battle, BattlePhase, BattleReport, Outcome, Resolution};
pub use error::{BattleError, BattleRejection};
pub use event::BattleEvent;
pub use reward::{Rewards, experience_pool, grant_victory_rewards};
