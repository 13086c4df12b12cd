//! Per-action battle events.
//!
//! Events carry display names alongside indices so presenters can render
//! them without looking anything up.

use crate::combat::AttackResult;
use crate::item::SpellElement;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleEvent {
    HeroAttacked {
        hero: usize,
        hero_name: String,
        target: usize,
        target_name: String,
        result: AttackResult,
    },
    SpellCast {
        hero: usize,
        hero_name: String,
        spell: String,
        element: SpellElement,
        target: usize,
        target_name: String,
        result: AttackResult,
        /// Amount removed from the element's stat (0 if dodged).
        weakened_by: f64,
    },
    PotionUsed {
        hero: usize,
        hero_name: String,
        potion: String,
    },
    Equipped {
        hero: usize,
        hero_name: String,
        item: String,
        replaced: Option<String>,
    },
    MonsterAttacked {
        monster: usize,
        monster_name: String,
        hero: usize,
        hero_name: String,
        damage: f64,
    },
    MonsterDefeated {
        monster: usize,
        monster_name: String,
    },
    HeroFainted {
        hero: usize,
        hero_name: String,
    },
    Fled {
        hero: usize,
        hero_name: String,
    },
}

impl core::fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BattleEvent::HeroAttacked {
                hero_name,
                target_name,
                result,
                ..
            } => match result.damage {
                Some(damage) => write!(f, "{hero_name} hits {target_name} for {damage:.0} damage"),
                None => write!(f, "{target_name} dodged {hero_name}'s attack"),
            },
            BattleEvent::SpellCast {
                hero_name,
                spell,
                target_name,
                result,
                element,
                weakened_by,
                ..
            } => match result.damage {
                Some(damage) => write!(
                    f,
                    "{hero_name} casts {spell} on {target_name} for {damage:.0} damage ({element} -{weakened_by:.1})"
                ),
                None => write!(f, "{target_name} dodged {hero_name}'s {spell}"),
            },
            BattleEvent::PotionUsed { hero_name, potion, .. } => {
                write!(f, "{hero_name} drinks {potion}")
            }
            BattleEvent::Equipped {
                hero_name,
                item,
                replaced,
                ..
            } => match replaced {
                Some(old) => write!(f, "{hero_name} swaps {old} for {item}"),
                None => write!(f, "{hero_name} equips {item}"),
            },
            BattleEvent::MonsterAttacked {
                monster_name,
                hero_name,
                damage,
                ..
            } => write!(f, "{monster_name} attacks {hero_name} for {damage:.0} damage"),
            BattleEvent::MonsterDefeated { monster_name, .. } => {
                write!(f, "{monster_name} has been defeated")
            }
            BattleEvent::HeroFainted { hero_name, .. } => write!(f, "{hero_name} has fainted"),
            BattleEvent::Fled { hero_name, .. } => write!(f, "{hero_name} leads the party away"),
        }
    }
}
