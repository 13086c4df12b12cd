//! Attack resolution.

use rand::Rng;

use super::damage::{mitigate, monster_hit_damage};
use super::hit::roll_dodge;
use crate::character::{Hero, Monster};

/// Outcome of an attack attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackOutcome {
    /// Target dodged; nothing landed.
    Dodged,
    /// Attack landed (possibly for zero after mitigation).
    Hit,
}

/// Result of resolving one attack.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackResult {
    pub outcome: AttackOutcome,

    /// Damage after mitigation (`None` if dodged).
    pub damage: Option<f64>,
}

impl AttackResult {
    pub fn dodged() -> Self {
        Self {
            outcome: AttackOutcome::Dodged,
            damage: None,
        }
    }

    pub fn hit(damage: f64) -> Self {
        Self {
            outcome: AttackOutcome::Hit,
            damage: Some(damage),
        }
    }

    pub fn landed(&self) -> bool {
        self.outcome == AttackOutcome::Hit
    }
}

/// Resolves a hero attack (melee or spell) against a monster.
///
/// ```text
/// if roll < dodge_probability: dodged
/// else: dealt = max(0, raw - monster.defense)
/// ```
pub fn resolve_hero_attack(raw: f64, monster: &Monster, rng: &mut impl Rng) -> AttackResult {
    if roll_dodge(monster.dodge_probability(), rng) {
        return AttackResult::dodged();
    }
    AttackResult::hit(mitigate(raw, monster.defense()))
}

/// Resolves a monster attack against a hero. Heroes never dodge.
pub fn resolve_monster_attack(monster: &Monster, hero: &Hero) -> AttackResult {
    AttackResult::hit(monster_hit_damage(monster, hero))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::MonsterKind;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn defense_can_absorb_entire_hit() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let monster = Monster::new("Bunsen", MonsterKind::Exoskeleton, 1, 10.0, 20.0, 0.0).unwrap();
        let result = resolve_hero_attack(15.0, &monster, &mut rng);
        assert_eq!(result, AttackResult::hit(0.0));
        assert!(result.landed());
    }

    #[test]
    fn full_dodge_always_misses() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let monster = Monster::new("Blinky", MonsterKind::Spirit, 1, 10.0, 0.0, 100.0).unwrap();
        for _ in 0..32 {
            assert_eq!(resolve_hero_attack(500.0, &monster, &mut rng), AttackResult::dodged());
        }
    }
}
