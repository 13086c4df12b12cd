//! Combat math.
//!
//! Pure functions used by the battle engine. Nothing here mutates a
//! character; callers apply the returned damage themselves.
//!
//! - `resolve_hero_attack`: dodge roll, then defense mitigation
//! - `resolve_monster_attack`: armor mitigation, never dodged
//! - `mitigate`: flat reduction clamped at zero

pub mod damage;
pub mod hit;
pub mod result;

pub use damage::{mitigate, monster_hit_damage};
pub use hit::roll_dodge;
pub use result::{AttackOutcome, AttackResult, resolve_hero_attack, resolve_monster_attack};
