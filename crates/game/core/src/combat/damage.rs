//! Damage mitigation.

use crate::character::{Hero, Monster};

/// Subtracts a flat reduction from raw damage.
///
/// ```text
/// dealt = max(0, raw - reduction)
/// ```
///
/// Negative inputs are treated as zero.
pub fn mitigate(raw: f64, reduction: f64) -> f64 {
    (raw.max(0.0) - reduction.max(0.0)).max(0.0)
}

/// Damage a monster deals to a hero after the hero's armor.
pub fn monster_hit_damage(monster: &Monster, hero: &Hero) -> f64 {
    mitigate(monster.base_damage(), hero.damage_reduction())
}
