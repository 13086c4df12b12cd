//! Actions a hero can take on its turn.

/// One hero's choice for the current round.
///
/// Indices refer to the monster roster (`target`) or the acting hero's
/// inventory (`item`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeroAction {
    /// Melee attack with the equipped weapon, or bare hands.
    Attack { target: usize },
    /// Cast a spell from the inventory. Spells are not consumed.
    CastSpell { item: usize, target: usize },
    /// Drink a potion from the inventory. The potion is consumed.
    UsePotion { item: usize },
    /// Equip a weapon or armor from the inventory.
    Equip { item: usize },
    /// Abandon the encounter.
    Flee,
}

impl HeroAction {
    pub fn kind(&self) -> ActionKind {
        match self {
            HeroAction::Attack { .. } => ActionKind::Attack,
            HeroAction::CastSpell { .. } => ActionKind::CastSpell,
            HeroAction::UsePotion { .. } => ActionKind::UsePotion,
            HeroAction::Equip { .. } => ActionKind::Equip,
            HeroAction::Flee => ActionKind::Flee,
        }
    }

    /// Roster index this action targets, if any.
    pub fn target(&self) -> Option<usize> {
        match self {
            HeroAction::Attack { target } | HeroAction::CastSpell { target, .. } => Some(*target),
            _ => None,
        }
    }
}

/// Discriminant of [`HeroAction`], used for menus and logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionKind {
    #[strum(serialize = "Attack")]
    Attack,
    #[strum(serialize = "Cast Spell")]
    CastSpell,
    #[strum(serialize = "Use Potion")]
    UsePotion,
    #[strum(serialize = "Equip Gear")]
    Equip,
    #[strum(serialize = "Flee")]
    Flee,
}

impl ActionKind {
    /// True if the action needs a roster target.
    pub fn needs_target(self) -> bool {
        matches!(self, ActionKind::Attack | ActionKind::CastSpell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_and_target_follow_variant() {
        let cast = HeroAction::CastSpell { item: 2, target: 1 };
        assert_eq!(cast.kind(), ActionKind::CastSpell);
        assert_eq!(cast.target(), Some(1));
        assert_eq!(HeroAction::UsePotion { item: 0 }.target(), None);
        assert_eq!(ActionKind::CastSpell.to_string(), "Cast Spell");
        assert!(!ActionKind::Flee.needs_target());
    }
}
