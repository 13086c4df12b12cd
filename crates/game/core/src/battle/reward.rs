//! Victory rewards.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::character::{Character, Monster};
use crate::config::GameConfig;
use crate::item::Item;
use crate::party::Party;

/// What a victory handed out.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rewards {
    /// Experience granted to each surviving hero.
    pub experience_each: u32,
    /// Gold granted to each surviving hero.
    pub gold_each: f64,
    /// Party slots of heroes that were standing when the battle ended.
    pub survivors: Vec<usize>,
    /// `(slot, levels gained)` for every hero that leveled up.
    pub level_ups: Vec<(usize, u32)>,
    /// Party slots of heroes revived after the battle.
    pub revived: Vec<usize>,
    /// `(slot, item)` when loot dropped.
    pub loot: Option<(usize, Item)>,
}

/// Total experience on offer for a defeated roster.
pub fn experience_pool(monsters: &[Monster], config: &GameConfig) -> u32 {
    monsters
        .iter()
        .map(|monster| monster.level().saturating_mul(config.experience_per_monster_level))
        .sum()
}

/// Grants experience, gold and loot to survivors, then revives the fallen.
///
/// ```text
/// experience_each = max(1, floor(pool / survivors))
/// gold_each       = gold_per_monster_level * highest monster level
/// ```
pub fn grant_victory_rewards(
    party: &mut Party,
    monsters: &[Monster],
    catalog: &[Item],
    config: &GameConfig,
    rng: &mut impl Rng,
) -> Rewards {
    let survivors: Vec<usize> = party.living_indices().collect();
    if survivors.is_empty() {
        return Rewards::default();
    }

    let survivor_count = u32::try_from(survivors.len()).unwrap_or(u32::MAX);
    let experience_each = (experience_pool(monsters, config) / survivor_count).max(1);
    let highest = monsters.iter().map(Character::level).max().unwrap_or(1);
    let gold_each = config.gold_per_monster_level * f64::from(highest);

    let mut level_ups = Vec::new();
    for &slot in &survivors {
        let hero = &mut party.heroes_mut()[slot];
        hero.add_money(gold_each);
        let gained = hero.gain_experience(experience_each, config);
        if gained > 0 {
            level_ups.push((slot, gained));
        }
    }

    let mut revived = Vec::new();
    for (slot, hero) in party.heroes_mut().iter_mut().enumerate() {
        if !hero.is_alive() {
            hero.revive();
            revived.push(slot);
        }
    }

    let loot = roll_loot(party, &survivors, catalog, config, rng);

    tracing::info!(
        experience_each,
        gold_each,
        survivors = survivors.len(),
        revived = revived.len(),
        loot = loot.as_ref().map(|(_, item)| item.name.as_str()),
        "victory rewards granted"
    );

    Rewards {
        experience_each,
        gold_each,
        survivors,
        level_ups,
        revived,
        loot,
    }
}

fn roll_loot(
    party: &mut Party,
    survivors: &[usize],
    catalog: &[Item],
    config: &GameConfig,
    rng: &mut impl Rng,
) -> Option<(usize, Item)> {
    let chance = config.loot_drop_chance;
    if catalog.is_empty() || chance.is_nan() || !rng.gen_bool(chance.clamp(0.0, 1.0)) {
        return None;
    }
    let item = catalog.choose(rng)?.clone();
    let slot = *survivors.choose(rng)?;
    party.heroes_mut()[slot].inventory_mut().add(item.clone());
    Some((slot, item))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{Hero, HeroClass, MonsterKind};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn party_of(count: usize) -> Party {
        let mut party = Party::new();
        for i in 0..count {
            party
                .add_hero(
                    Hero::new(format!("H{i}"), HeroClass::Warrior, 100.0, 500.0, 500.0, 500.0, 0.0, 0)
                        .unwrap(),
                )
                .unwrap();
        }
        party
    }

    fn monster(level: u32) -> Monster {
        Monster::new("M", MonsterKind::Dragon, level, 10.0, 10.0, 0.0).unwrap()
    }

    #[test]
    fn experience_is_split_between_survivors() {
        let config = GameConfig::default().with_loot_drop_chance(0.0);
        let mut party = party_of(3);
        party.hero_mut(2).unwrap().take_damage(1_000.0);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        // Pool: 2*3 + 2*2 = 10, two survivors.
        let rewards =
            grant_victory_rewards(&mut party, &[monster(3), monster(2)], &[], &config, &mut rng);

        assert_eq!(rewards.experience_each, 5);
        assert_eq!(rewards.gold_each, 300.0);
        assert_eq!(rewards.survivors, vec![0, 1]);
        assert_eq!(rewards.revived, vec![2]);
        assert_eq!(party.hero(0).unwrap().money(), 300.0);
        assert_eq!(party.hero(2).unwrap().money(), 0.0);
        assert_eq!(party.hero(2).unwrap().hp(), 50.0);
        assert!(rewards.loot.is_none());
    }

    #[test]
    fn split_never_drops_below_one() {
        let config = GameConfig::default().with_loot_drop_chance(0.0);
        let mut party = party_of(3);
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut stingy = config.clone();
        stingy.experience_per_monster_level = 0;

        let rewards = grant_victory_rewards(&mut party, &[monster(1)], &[], &stingy, &mut rng);
        assert_eq!(rewards.experience_each, 1);
        assert_eq!(party.hero(1).unwrap().experience(), 1);
    }

    #[test]
    fn guaranteed_loot_lands_in_a_survivor_inventory() {
        let config = GameConfig::default().with_loot_drop_chance(1.0);
        let mut party = party_of(2);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let catalog = vec![Item::armor("Guardian_Angel", 1000.0, 10, 1000.0)];

        let rewards = grant_victory_rewards(&mut party, &[monster(1)], &catalog, &config, &mut rng);
        let (slot, item) = rewards.loot.unwrap();
        assert_eq!(item.name, "Guardian_Angel");
        assert!(party.hero(slot).unwrap().inventory().contains(&item));
    }

    #[test]
    fn rewards_can_level_up() {
        let config = GameConfig::default().with_loot_drop_chance(0.0);
        let mut party = party_of(1);
        let mut rng = ChaCha8Rng::seed_from_u64(4);

        let rewards = grant_victory_rewards(&mut party, &[monster(5)], &[], &config, &mut rng);
        assert_eq!(rewards.experience_each, 10);
        assert_eq!(rewards.level_ups, vec![(0, 1)]);
        assert_eq!(party.hero(0).unwrap().level(), 2);
    }

    #[test]
    fn nan_loot_chance_drops_nothing() {
        let mut config = GameConfig::default();
        config.loot_drop_chance = f64::NAN;
        let mut party = party_of(1);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let catalog = vec![Item::armor("Guardian_Angel", 1000.0, 10, 1000.0)];

        let rewards = grant_victory_rewards(&mut party, &[monster(1)], &catalog, &config, &mut rng);
        assert!(rewards.loot.is_none());
    }
}
