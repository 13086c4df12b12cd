//! Turn-based encounter state machine.
//!
//! A [`Battle`] borrows the live party for its whole lifetime and owns the
//! sampled monster roster. Each round every living hero submits one action;
//! once the last of them has acted, the monsters answer in roster order and
//! the next round begins.

use arrayvec::ArrayVec;
use rand::Rng;

use super::action::HeroAction;
use super::error::{BattleError, BattleRejection};
use super::event::BattleEvent;
use super::reward::{Rewards, grant_victory_rewards};
use crate::character::{Character, Hero, Monster};
use crate::combat::{AttackResult, resolve_hero_attack, resolve_monster_attack};
use crate::config::GameConfig;
use crate::item::{Item, ItemCategory};
use crate::party::Party;

/// Terminal state of an encounter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Victory,
    Defeat,
    Fled,
}

/// Where the encounter currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattlePhase {
    /// Waiting for the remaining living heroes to act.
    ActionSelection,
    Finished(Outcome),
}

/// Result of submitting an action.
#[derive(Clone, Debug, PartialEq)]
pub enum Resolution {
    /// The action was applied. Includes the monster phase if it closed the
    /// round.
    Resolved(Vec<BattleEvent>),
    /// A game rule declined the action; nothing changed and the hero may
    /// choose again.
    Rejected(BattleRejection),
}

impl Resolution {
    pub fn is_rejected(&self) -> bool {
        matches!(self, Resolution::Rejected(_))
    }
}

/// Final summary handed back once the battle is over.
#[derive(Clone, Debug, PartialEq)]
pub struct BattleReport {
    pub outcome: Outcome,
    /// Number of rounds started, including the one that ended the battle.
    pub rounds: u32,
    /// Present only on victory.
    pub rewards: Option<Rewards>,
}

pub struct Battle<'a> {
    party: &'a mut Party,
    monsters: Vec<Monster>,
    config: &'a GameConfig,
    phase: BattlePhase,
    round: u32,
    acted: ArrayVec<bool, { GameConfig::MAX_PARTY_SIZE }>,
}

impl<'a> Battle<'a> {
    /// Starts an encounter.
    ///
    /// A party with no standing heroes resolves to [`Outcome::Defeat`] at
    /// once.
    pub fn start(
        party: &'a mut Party,
        monsters: Vec<Monster>,
        config: &'a GameConfig,
    ) -> Result<Self, BattleError> {
        if monsters.is_empty() {
            return Err(BattleError::EmptyRoster);
        }

        let acted = party.heroes().iter().map(|_| false).collect();
        let mut battle = Self {
            party,
            monsters,
            config,
            phase: BattlePhase::ActionSelection,
            round: 1,
            acted,
        };

        tracing::info!(
            heroes = battle.party.len(),
            monsters = battle.monsters.len(),
            "encounter started"
        );
        battle.check_termination();
        Ok(battle)
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            BattlePhase::Finished(outcome) => Some(outcome),
            BattlePhase::ActionSelection => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.outcome().is_some()
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn party(&self) -> &Party {
        self.party
    }

    pub fn monsters(&self) -> &[Monster] {
        &self.monsters
    }

    pub fn config(&self) -> &GameConfig {
        self.config
    }

    /// Roster indices of monsters still standing.
    pub fn living_monsters(&self) -> impl Iterator<Item = usize> + '_ {
        self.monsters
            .iter()
            .enumerate()
            .filter(|(_, monster)| monster.is_alive())
            .map(|(index, _)| index)
    }

    /// Living heroes that have not acted yet this round, in party order.
    pub fn pending_heroes(&self) -> Vec<usize> {
        if self.is_finished() {
            return Vec::new();
        }
        self.party
            .living_indices()
            .filter(|&index| !self.acted[index])
            .collect()
    }

    /// Applies one hero's action.
    pub fn submit(
        &mut self,
        hero: usize,
        action: HeroAction,
        rng: &mut impl Rng,
    ) -> Result<Resolution, BattleError> {
        self.validate_actor(hero)?;
        if let Some(target) = action.target() {
            self.validate_target(target)?;
        }

        let mut events = Vec::new();
        let applied = match action {
            HeroAction::Attack { target } => self.attack(hero, target, rng, &mut events),
            HeroAction::CastSpell { item, target } => {
                self.cast_spell(hero, item, target, rng, &mut events)
            }
            HeroAction::UsePotion { item } => self.use_potion(hero, item, &mut events),
            HeroAction::Equip { item } => self.equip(hero, item, &mut events),
            HeroAction::Flee => {
                events.push(BattleEvent::Fled {
                    hero,
                    hero_name: self.hero_name(hero),
                });
                self.finish(Outcome::Fled);
                return Ok(Resolution::Resolved(events));
            }
        }?;
        if let Err(rejection) = applied {
            tracing::debug!(hero, %rejection, "action rejected");
            return Ok(Resolution::Rejected(rejection));
        }

        self.acted[hero] = true;
        tracing::debug!(hero, action = %action.kind(), round = self.round, "hero acted");

        if !self.check_termination() && self.pending_heroes().is_empty() {
            self.monster_phase(&mut events);
            if !self.check_termination() {
                self.begin_round();
            }
        }
        Ok(Resolution::Resolved(events))
    }

    /// Ends the battle, granting rewards on victory.
    ///
    /// Fails with [`BattleError::Unfinished`] while heroes still have to act.
    pub fn conclude(self, catalog: &[Item], rng: &mut impl Rng) -> Result<BattleReport, BattleError> {
        let Some(outcome) = self.outcome() else {
            return Err(BattleError::Unfinished);
        };
        let rewards = if outcome == Outcome::Victory {
            Some(grant_victory_rewards(
                self.party,
                &self.monsters,
                catalog,
                self.config,
                rng,
            ))
        } else {
            None
        };

        tracing::info!(%outcome, rounds = self.round, "encounter finished");
        Ok(BattleReport {
            outcome,
            rounds: self.round,
            rewards,
        })
    }

    // ===== validation =====

    fn validate_actor(&self, hero: usize) -> Result<(), BattleError> {
        if self.is_finished() {
            return Err(BattleError::Finished);
        }
        let state = self
            .party
            .heroes()
            .get(hero)
            .ok_or(BattleError::UnknownHero(hero))?;
        if !state.is_alive() {
            return Err(BattleError::HeroFainted(hero));
        }
        if self.acted[hero] {
            return Err(BattleError::AlreadyActed(hero));
        }
        Ok(())
    }

    fn validate_target(&self, target: usize) -> Result<(), BattleError> {
        let monster = self
            .monsters
            .get(target)
            .ok_or(BattleError::UnknownTarget(target))?;
        if !monster.is_alive() {
            return Err(BattleError::TargetDefeated(target));
        }
        Ok(())
    }

    fn item_of(&self, hero: usize, index: usize) -> Result<&Item, BattleError> {
        Ok(self.hero_ref(hero).inventory().get(index)?)
    }

    // ===== hero actions =====

    fn attack(
        &mut self,
        hero: usize,
        target: usize,
        rng: &mut impl Rng,
        events: &mut Vec<BattleEvent>,
    ) -> Result<Result<(), BattleRejection>, BattleError> {
        let raw = self.hero_ref(hero).attack_damage(self.config);
        let result = resolve_hero_attack(raw, &self.monsters[target], rng);
        self.land_hit(target, &result);

        events.push(BattleEvent::HeroAttacked {
            hero,
            hero_name: self.hero_name(hero),
            target,
            target_name: self.monsters[target].name().to_string(),
            result,
        });
        self.push_if_defeated(target, events);
        Ok(Ok(()))
    }

    fn cast_spell(
        &mut self,
        hero: usize,
        item: usize,
        target: usize,
        rng: &mut impl Rng,
        events: &mut Vec<BattleEvent>,
    ) -> Result<Result<(), BattleRejection>, BattleError> {
        let entry = self.item_of(hero, item)?;
        let Some(spell) = entry.as_spell().copied() else {
            return Err(BattleError::WrongItemKind {
                index: item,
                expected: "spell",
                found: entry.category(),
            });
        };
        let spell_name = entry.name.clone();

        let caster = self.hero_mut(hero);
        if !caster.spend_mana(spell.mana_cost) {
            return Ok(Err(BattleRejection::InsufficientMana {
                required: spell.mana_cost,
                available: caster.mana(),
            }));
        }

        let result = resolve_hero_attack(spell.damage, &self.monsters[target], rng);
        self.land_hit(target, &result);
        let weakened_by = if result.landed() {
            self.monsters[target].weaken(spell.element, self.config.spell_debuff_ratio)
        } else {
            0.0
        };

        events.push(BattleEvent::SpellCast {
            hero,
            hero_name: self.hero_name(hero),
            spell: spell_name,
            element: spell.element,
            target,
            target_name: self.monsters[target].name().to_string(),
            result,
            weakened_by,
        });
        self.push_if_defeated(target, events);
        Ok(Ok(()))
    }

    fn use_potion(
        &mut self,
        hero: usize,
        item: usize,
        events: &mut Vec<BattleEvent>,
    ) -> Result<Result<(), BattleRejection>, BattleError> {
        let entry = self.item_of(hero, item)?;
        if entry.category() != ItemCategory::Potion {
            return Err(BattleError::WrongItemKind {
                index: item,
                expected: "potion",
                found: entry.category(),
            });
        }

        let drinker = self.hero_mut(hero);
        let potion = drinker.inventory_mut().remove_at(item)?;
        if let Some(effect) = potion.as_potion() {
            drinker.apply_potion(effect);
        }

        events.push(BattleEvent::PotionUsed {
            hero,
            hero_name: self.hero_name(hero),
            potion: potion.name,
        });
        Ok(Ok(()))
    }

    fn equip(
        &mut self,
        hero: usize,
        item: usize,
        events: &mut Vec<BattleEvent>,
    ) -> Result<Result<(), BattleRejection>, BattleError> {
        let entry = self.item_of(hero, item)?;
        let category = entry.category();
        if !matches!(category, ItemCategory::Weapon | ItemCategory::Armor) {
            return Err(BattleError::WrongItemKind {
                index: item,
                expected: "weapon or armor",
                found: category,
            });
        }
        let name = entry.name.clone();

        let replaced = self
            .hero_mut(hero)
            .equip_from_inventory(item)
            .map_err(|_| BattleError::WrongItemKind {
                index: item,
                expected: "weapon or armor",
                found: category,
            })?;

        events.push(BattleEvent::Equipped {
            hero,
            hero_name: self.hero_name(hero),
            item: name,
            replaced: replaced.map(|old| old.name),
        });
        Ok(Ok(()))
    }

    // ===== monster phase =====

    fn monster_phase(&mut self, events: &mut Vec<BattleEvent>) {
        for index in 0..self.monsters.len() {
            if !self.monsters[index].is_alive() {
                continue;
            }
            let Some(target) = self.weakest_hero() else {
                break;
            };

            let monster = &self.monsters[index];
            let result = resolve_monster_attack(monster, &self.party.heroes()[target]);
            let damage = result.damage.unwrap_or_default();
            let monster_name = monster.name().to_string();

            let victim = self.hero_mut(target);
            victim.take_damage(damage);
            let fainted = !victim.is_alive();

            tracing::debug!(monster = %monster_name, hero = target, damage, "monster attacked");
            events.push(BattleEvent::MonsterAttacked {
                monster: index,
                monster_name,
                hero: target,
                hero_name: self.hero_name(target),
                damage,
            });
            if fainted {
                events.push(BattleEvent::HeroFainted {
                    hero: target,
                    hero_name: self.hero_name(target),
                });
            }
        }
    }

    /// Living hero with the lowest hp; ties go to the earliest slot.
    fn weakest_hero(&self) -> Option<usize> {
        let heroes = self.party.heroes();
        self.party
            .living_indices()
            .min_by(|&a, &b| heroes[a].hp().total_cmp(&heroes[b].hp()).then(a.cmp(&b)))
    }

    // ===== bookkeeping =====

    fn land_hit(&mut self, target: usize, result: &AttackResult) {
        if let Some(damage) = result.damage {
            self.monsters[target].take_damage(damage);
        }
    }

    fn push_if_defeated(&self, target: usize, events: &mut Vec<BattleEvent>) {
        let monster = &self.monsters[target];
        if !monster.is_alive() {
            events.push(BattleEvent::MonsterDefeated {
                monster: target,
                monster_name: monster.name().to_string(),
            });
        }
    }

    /// Moves to a terminal phase if either side is wiped out.
    fn check_termination(&mut self) -> bool {
        if self.party.is_wiped_out() {
            self.finish(Outcome::Defeat);
        } else if self.monsters.iter().all(|monster| !monster.is_alive()) {
            self.finish(Outcome::Victory);
        }
        self.is_finished()
    }

    fn finish(&mut self, outcome: Outcome) {
        self.phase = BattlePhase::Finished(outcome);
    }

    fn begin_round(&mut self) {
        self.acted.iter_mut().for_each(|acted| *acted = false);
        self.round += 1;
    }

    fn hero_ref(&self, index: usize) -> &Hero {
        &self.party.heroes()[index]
    }

    fn hero_mut(&mut self, index: usize) -> &mut Hero {
        &mut self.party.heroes_mut()[index]
    }

    fn hero_name(&self, index: usize) -> String {
        self.hero_ref(index).name().to_string()
    }
}
