//! The adventuring party.

use arrayvec::ArrayVec;

use crate::character::{Character, Hero};
use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};
use crate::world::Position;

/// Errors from party roster operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PartyError {
    #[error("party is full ({capacity} heroes)")]
    Full { capacity: usize },

    #[error("hero slot {index} out of range (party of {len})")]
    HeroIndex { index: usize, len: usize },
}

impl GameError for PartyError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            PartyError::Full { .. } => "PARTY_FULL",
            PartyError::HeroIndex { .. } => "PARTY_HERO_INDEX",
        }
    }
}

/// Ordered roster of up to [`GameConfig::MAX_PARTY_SIZE`] heroes and their
/// shared board position.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Party {
    heroes: ArrayVec<Hero, { GameConfig::MAX_PARTY_SIZE }>,
    position: Position,
}

impl Party {
    /// Creates an empty party at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_hero(&mut self, hero: Hero) -> Result<(), PartyError> {
        self.heroes.try_push(hero).map_err(|_| PartyError::Full {
            capacity: GameConfig::MAX_PARTY_SIZE,
        })
    }

    pub fn heroes(&self) -> &[Hero] {
        &self.heroes
    }

    pub fn heroes_mut(&mut self) -> &mut [Hero] {
        &mut self.heroes
    }

    pub fn hero(&self, index: usize) -> Result<&Hero, PartyError> {
        let len = self.heroes.len();
        self.heroes
            .get(index)
            .ok_or(PartyError::HeroIndex { index, len })
    }

    pub fn hero_mut(&mut self, index: usize) -> Result<&mut Hero, PartyError> {
        let len = self.heroes.len();
        self.heroes
            .get_mut(index)
            .ok_or(PartyError::HeroIndex { index, len })
    }

    pub fn len(&self) -> usize {
        self.heroes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heroes.is_empty()
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    /// True when no hero has hp left. An empty party counts as wiped out.
    pub fn is_wiped_out(&self) -> bool {
        self.heroes.iter().all(|hero| !hero.is_alive())
    }

    /// Slots of heroes still standing, in party order.
    pub fn living_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.heroes
            .iter()
            .enumerate()
            .filter(|(_, hero)| hero.is_alive())
            .map(|(index, _)| index)
    }

    pub fn highest_level(&self) -> Option<u32> {
        self.heroes.iter().map(Character::level).max()
    }
}
