//! Drives a [`Battle`] to completion with a pluggable action source.

use rand::Rng;

use super::action::HeroAction;
use super::engine::{Battle, BattleReport, Resolution};
use super::error::{BattleError, BattleRejection};
use super::event::BattleEvent;
use crate::character::{Attribute, Character, Monster};
use crate::config::GameConfig;
use crate::item::{Item, ItemCategory};
use crate::party::Party;

/// Source of hero actions: a player prompt or an automatic policy.
pub trait Commander {
    /// Picks the next action for `hero`.
    fn choose(&mut self, battle: &Battle<'_>, hero: usize) -> HeroAction;

    /// Called when the last choice was declined; `choose` is asked again.
    fn rejected(&mut self, _hero: usize, _rejection: &BattleRejection) {}

    /// Called with the events of every resolved action.
    fn observe(&mut self, _events: &[BattleEvent]) {}
}

/// Runs an encounter until it ends and hands out the result.
///
/// Heroes are asked in party order each round. A rejected action re-asks
/// the same hero; a structural error aborts the encounter.
pub fn resolve_encounter(
    party: &mut Party,
    roster: Vec<Monster>,
    catalog: &[Item],
    config: &GameConfig,
    commander: &mut impl Commander,
    rng: &mut impl Rng,
) -> Result<BattleReport, BattleError> {
    let mut battle = Battle::start(party, roster, config)?;

    while !battle.is_finished() {
        for hero in battle.pending_heroes() {
            loop {
                let action = commander.choose(&battle, hero);
                match battle.submit(hero, action, rng)? {
                    Resolution::Resolved(events) => {
                        commander.observe(&events);
                        break;
                    }
                    Resolution::Rejected(rejection) => commander.rejected(hero, &rejection),
                }
            }
            if battle.is_finished() {
                break;
            }
        }
    }

    battle.conclude(catalog, rng)
}

/// Simple automatic policy.
///
/// Drinks a healing potion below half health, otherwise attacks the living
/// monster with the lowest hp.
#[derive(Clone, Copy, Debug, Default)]
pub struct AutoCommander;

impl Commander for AutoCommander {
    fn choose(&mut self, battle: &Battle<'_>, hero: usize) -> HeroAction {
        let state = &battle.party().heroes()[hero];

        if state.hp() < state.max_hp() / 2.0 {
            let healing = state
                .inventory()
                .of_category(ItemCategory::Potion)
                .find(|(_, item)| {
                    item.as_potion()
                        .is_some_and(|potion| potion.affected.affects(Attribute::Health))
                });
            if let Some((item, _)) = healing {
                return HeroAction::UsePotion { item };
            }
        }

        let monsters = battle.monsters();
        battle
            .living_monsters()
            .min_by(|&a, &b| monsters[a].hp().total_cmp(&monsters[b].hp()).then(a.cmp(&b)))
            .map_or(HeroAction::Flee, |target| HeroAction::Attack { target })
    }
}
