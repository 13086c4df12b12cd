//! Encounter roster sampling.

use rand::Rng;
use rand::seq::SliceRandom;

use super::WorldError;
use crate::character::{Character, Monster};
use crate::party::Party;

/// Draws one monster per party member from the catalog.
///
/// Candidates are catalog monsters whose level equals the party's highest
/// hero level; when none match, the monsters at the nearest level are used.
/// Monsters are cloned, so the catalog is left untouched and may yield the
/// same entry more than once.
pub fn sample_roster(
    catalog: &[Monster],
    party: &Party,
    rng: &mut impl Rng,
) -> Result<Vec<Monster>, WorldError> {
    if catalog.is_empty() {
        return Err(WorldError::EmptyCatalog);
    }
    let target = party.highest_level().ok_or(WorldError::EmptyParty)?;

    let distance = |monster: &Monster| monster.level().abs_diff(target);
    let nearest = catalog.iter().map(distance).min().unwrap_or_default();
    let candidates: Vec<&Monster> = catalog
        .iter()
        .filter(|monster| distance(monster) == nearest)
        .collect();

    let roster: Vec<Monster> = (0..party.len())
        .filter_map(|_| candidates.choose(rng).map(|monster| (*monster).clone()))
        .collect();

    tracing::debug!(
        level = target,
        nearest_gap = nearest,
        count = roster.len(),
        "sampled monster roster"
    );
    Ok(roster)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{Hero, HeroClass, MonsterKind};
    use crate::config::GameConfig;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn monster(name: &str, level: u32) -> Monster {
        Monster::new(name, MonsterKind::Dragon, level, 100.0, 100.0, 10.0).unwrap()
    }

    fn party(levels: &[u32]) -> Party {
        let config = GameConfig::default();
        let mut party = Party::new();
        for (i, level) in levels.iter().enumerate() {
            let mut hero = Hero::new(
                format!("Hero{i}"),
                HeroClass::Paladin,
                100.0,
                500.0,
                500.0,
                500.0,
                100.0,
                0,
            )
            .unwrap();
            for _ in 1..*level {
                hero.level_up(&config);
            }
            party.add_hero(hero).unwrap();
        }
        party
    }

    #[test]
    fn matches_highest_hero_level() {
        let catalog = vec![monster("Low", 1), monster("Mid", 3), monster("High", 5)];
        let party = party(&[1, 3]);
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let roster = sample_roster(&catalog, &party, &mut rng).unwrap();
        assert_eq!(roster.len(), 2);
        assert!(roster.iter().all(|m| m.name() == "Mid"));
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn falls_back_to_nearest_level() {
        let catalog = vec![monster("Low", 1), monster("High", 6)];
        let party = party(&[4, 2, 1]);
        let mut rng = ChaCha8Rng::seed_from_u64(4);

        let roster = sample_roster(&catalog, &party, &mut rng).unwrap();
        assert_eq!(roster.len(), 3);
        assert!(roster.iter().all(|m| m.name() == "High"));
    }

    #[test]
    fn empty_catalog_is_an_error() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        assert_eq!(
            sample_roster(&[], &party(&[1]), &mut rng),
            Err(WorldError::EmptyCatalog)
        );
        assert_eq!(
            sample_roster(&[monster("Low", 1)], &Party::new(), &mut rng),
            Err(WorldError::EmptyParty)
        );
    }
}
