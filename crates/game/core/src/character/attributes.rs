//! Hero attributes and attribute sets.
//!
//! Potions name the attributes they boost (`Health/Mana`, `All`, ...) and hero
//! classes favor a pair of combat attributes on level-up. Both are expressed
//! as an [`AttributeSet`].

use bitflags::bitflags;

/// A single hero attribute that items and level-ups can modify.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Attribute {
    Health,
    Mana,
    Strength,
    Agility,
    Dexterity,
}

impl Attribute {
    /// Returns the single-bit set for this attribute.
    pub const fn as_set(self) -> AttributeSet {
        match self {
            Attribute::Health => AttributeSet::HEALTH,
            Attribute::Mana => AttributeSet::MANA,
            Attribute::Strength => AttributeSet::STRENGTH,
            Attribute::Agility => AttributeSet::AGILITY,
            Attribute::Dexterity => AttributeSet::DEXTERITY,
        }
    }
}

bitflags! {
    /// Set of attributes affected by a potion or favored by a class.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct AttributeSet: u8 {
        const HEALTH    = 1 << 0;
        const MANA      = 1 << 1;
        const STRENGTH  = 1 << 2;
        const AGILITY   = 1 << 3;
        const DEXTERITY = 1 << 4;

        const ALL = Self::HEALTH.bits()
            | Self::MANA.bits()
            | Self::STRENGTH.bits()
            | Self::AGILITY.bits()
            | Self::DEXTERITY.bits();
    }
}

/// Error returned when an attribute list such as `Health/Mana` cannot be parsed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown attribute '{0}'")]
pub struct ParseAttributeError(pub String);

impl AttributeSet {
    /// Parses a slash-separated attribute list (`Health/Mana`, `All`).
    ///
    /// Matching is case-insensitive; an empty list is rejected.
    pub fn parse_list(list: &str) -> Result<Self, ParseAttributeError> {
        let mut set = AttributeSet::empty();
        for token in list.split('/').map(str::trim).filter(|t| !t.is_empty()) {
            if token.eq_ignore_ascii_case("all") {
                set |= AttributeSet::ALL;
                continue;
            }
            let attribute: Attribute = token
                .parse()
                .map_err(|_| ParseAttributeError(token.to_string()))?;
            set |= attribute.as_set();
        }
        if set.is_empty() {
            return Err(ParseAttributeError(list.to_string()));
        }
        Ok(set)
    }

    /// Returns true if the set contains the given attribute.
    pub fn affects(&self, attribute: Attribute) -> bool {
        self.contains(attribute.as_set())
    }

    /// Iterates the individual attributes in declaration order.
    pub fn attributes(&self) -> impl Iterator<Item = Attribute> + '_ {
        use strum::IntoEnumIterator;
        Attribute::iter().filter(move |a| self.affects(*a))
    }
}

impl core::fmt::Display for AttributeSet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.contains(AttributeSet::ALL) {
            return f.write_str("All");
        }
        let mut first = true;
        for attribute in self.attributes() {
            if !first {
                f.write_str("/")?;
            }
            write!(f, "{attribute}")?;
            first = false;
        }
        Ok(())
    }
}
