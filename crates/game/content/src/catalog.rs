//! Loaded content handed to the game session.

use legends_core::{GameConfig, Hero, HeroClass, Item, Monster};

/// Heroes available for selection, grouped by class in file order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HeroRoster {
    warriors: Vec<Hero>,
    sorcerers: Vec<Hero>,
    paladins: Vec<Hero>,
}

impl HeroRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, class: HeroClass, heroes: impl IntoIterator<Item = Hero>) {
        self.pool_mut(class).extend(heroes);
    }

    pub fn available(&self, class: HeroClass) -> &[Hero] {
        match class {
            HeroClass::Warrior => &self.warriors,
            HeroClass::Sorcerer => &self.sorcerers,
            HeroClass::Paladin => &self.paladins,
        }
    }

    /// Removes and returns a hero so it cannot be picked twice.
    pub fn take(&mut self, class: HeroClass, index: usize) -> Option<Hero> {
        let pool = self.pool_mut(class);
        (index < pool.len()).then(|| pool.remove(index))
    }

    pub fn len(&self) -> usize {
        self.warriors.len() + self.sorcerers.len() + self.paladins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn pool_mut(&mut self, class: HeroClass) -> &mut Vec<Hero> {
        match class {
            HeroClass::Warrior => &mut self.warriors,
            HeroClass::Sorcerer => &mut self.sorcerers,
            HeroClass::Paladin => &mut self.paladins,
        }
    }
}

/// Everything a session needs from the data directory.
#[derive(Clone, Debug)]
pub struct Content {
    pub config: GameConfig,
    pub heroes: HeroRoster,
    pub monsters: Vec<Monster>,
    pub items: Vec<Item>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use legends_core::Character;

    fn hero(name: &str, class: HeroClass) -> Hero {
        Hero::new(name, class, 100.0, 100.0, 100.0, 100.0, 0.0, 0).unwrap()
    }

    #[test]
    fn take_removes_from_pool() {
        let mut roster = HeroRoster::new();
        roster.extend(
            HeroClass::Sorcerer,
            [hero("Kalabar", HeroClass::Sorcerer), hero("Skye_Soar", HeroClass::Sorcerer)],
        );
        assert_eq!(roster.len(), 2);

        let picked = roster.take(HeroClass::Sorcerer, 1).unwrap();
        assert_eq!(picked.name(), "Skye_Soar");
        assert_eq!(roster.available(HeroClass::Sorcerer).len(), 1);
        assert!(roster.take(HeroClass::Sorcerer, 1).is_none());
        assert!(roster.take(HeroClass::Warrior, 0).is_none());
    }
}
