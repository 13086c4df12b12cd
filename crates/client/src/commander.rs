//! Interactive battle commander backed by a [`Prompt`].

use std::io::{BufRead, Write};

use legends_core::{
    ActionKind, Battle, BattleEvent, BattleRejection, Character, Commander, HeroAction,
    ItemCategory,
};
use strum::IntoEnumIterator;

use crate::input::{Prompt, PromptError, PromptResult};
use crate::presentation;

/// Asks the player for every hero action through numbered menus.
///
/// If the input closes mid-battle the remaining heroes flee and
/// [`is_closed`](Self::is_closed) reports it so the session can stop.
pub struct PromptCommander<'p, R, W> {
    prompt: &'p mut Prompt<R, W>,
    closed: bool,
}

impl<'p, R: BufRead, W: Write> PromptCommander<'p, R, W> {
    pub fn new(prompt: &'p mut Prompt<R, W>) -> Self {
        Self {
            prompt,
            closed: false,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn ask(&mut self, battle: &Battle<'_>, hero: usize) -> PromptResult<HeroAction> {
        let state = &battle.party().heroes()[hero];
        self.prompt.say("")?;
        presentation::monsters(self.prompt.output(), battle.monsters())?;
        self.prompt.say(&format!("Round {} | {state}", battle.round()))?;

        let kinds: Vec<ActionKind> = ActionKind::iter().collect();
        let labels: Vec<String> = kinds.iter().map(ToString::to_string).collect();
        loop {
            let title = format!("What will {} do?", state.name());
            let Some(choice) = self.prompt.select(&title, &labels)? else {
                continue;
            };
            if let Some(action) = self.detail(battle, hero, kinds[choice])? {
                return Ok(action);
            }
        }
    }

    /// Follow-up menus for one action kind. `None` returns to the action menu.
    fn detail(
        &mut self,
        battle: &Battle<'_>,
        hero: usize,
        kind: ActionKind,
    ) -> PromptResult<Option<HeroAction>> {
        let action = match kind {
            ActionKind::Attack => self
                .target(battle)?
                .map(|target| HeroAction::Attack { target }),
            ActionKind::CastSpell => match self.item(battle, hero, &[ItemCategory::Spell])? {
                Some(item) => self
                    .target(battle)?
                    .map(|target| HeroAction::CastSpell { item, target }),
                None => None,
            },
            ActionKind::UsePotion => self
                .item(battle, hero, &[ItemCategory::Potion])?
                .map(|item| HeroAction::UsePotion { item }),
            ActionKind::Equip => self
                .item(battle, hero, &[ItemCategory::Weapon, ItemCategory::Armor])?
                .map(|item| HeroAction::Equip { item }),
            ActionKind::Flee => Some(HeroAction::Flee),
        };
        Ok(action)
    }

    fn target(&mut self, battle: &Battle<'_>) -> PromptResult<Option<usize>> {
        let living: Vec<usize> = battle.living_monsters().collect();
        let labels: Vec<String> = living
            .iter()
            .map(|&index| battle.monsters()[index].to_string())
            .collect();
        Ok(self
            .prompt
            .select("Choose a target", &labels)?
            .map(|choice| living[choice]))
    }

    /// Picks an inventory entry of the given categories, by inventory index.
    fn item(
        &mut self,
        battle: &Battle<'_>,
        hero: usize,
        categories: &[ItemCategory],
    ) -> PromptResult<Option<usize>> {
        let inventory = battle.party().heroes()[hero].inventory();
        let entries: Vec<(usize, String)> = inventory
            .iter()
            .enumerate()
            .filter(|(_, item)| categories.contains(&item.category()))
            .map(|(index, item)| (index, presentation::item_line(item)))
            .collect();
        if entries.is_empty() {
            self.prompt.warn("Nothing suitable in the inventory.")?;
            return Ok(None);
        }

        let labels: Vec<&str> = entries.iter().map(|(_, label)| label.as_str()).collect();
        Ok(self
            .prompt
            .select("Choose an item", &labels)?
            .map(|choice| entries[choice].0))
    }

    fn track(&mut self, result: PromptResult<()>) {
        if let Err(e) = result {
            self.close(e);
        }
    }

    fn close(&mut self, error: PromptError) {
        if !matches!(error, PromptError::Closed) {
            tracing::warn!(error = %error, "battle prompt failed");
        }
        self.closed = true;
    }
}

impl<R: BufRead, W: Write> Commander for PromptCommander<'_, R, W> {
    fn choose(&mut self, battle: &Battle<'_>, hero: usize) -> HeroAction {
        if self.closed {
            return HeroAction::Flee;
        }
        match self.ask(battle, hero) {
            Ok(action) => action,
            Err(e) => {
                self.close(e);
                HeroAction::Flee
            }
        }
    }

    fn rejected(&mut self, _hero: usize, rejection: &BattleRejection) {
        let result = self.prompt.warn(&format!("Cannot do that: {rejection}"));
        self.track(result);
    }

    fn observe(&mut self, events: &[BattleEvent]) {
        let result = presentation::events(self.prompt.output(), events).map_err(PromptError::from);
        self.track(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use legends_core::{
        GameConfig, Hero, HeroClass, Item, Monster, MonsterKind, Outcome, Party, resolve_encounter,
    };
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn party() -> Party {
        let mut party = Party::new();
        let mut hero =
            Hero::new("Gaerdal", HeroClass::Warrior, 100.0, 700.0, 500.0, 600.0, 1354.0, 7).unwrap();
        hero.inventory_mut().add(Item::weapon("Sword", 500.0, 1, 800.0, 1));
        party.add_hero(hero).unwrap();
        party
    }

    fn roster() -> Vec<Monster> {
        vec![Monster::new("Natsunomeryu", MonsterKind::Dragon, 1, 10.0, 200.0, 0.0).unwrap()]
    }

    #[test]
    fn menus_build_actions() {
        let config = GameConfig::default();
        let mut party = party();
        let battle = Battle::start(&mut party, roster(), &config).unwrap();

        // Cast Spell with no spells falls back to the action menu, then Equip the sword.
        let mut prompt = Prompt::new("2\n4\n1\n".as_bytes(), Vec::new());
        let mut commander = PromptCommander::new(&mut prompt);
        assert_eq!(commander.choose(&battle, 0), HeroAction::Equip { item: 0 });
        assert!(!commander.is_closed());

        let output = String::from_utf8(prompt.into_output()).unwrap();
        assert!(output.contains("Nothing suitable"));
    }

    #[test]
    fn closed_input_flees() {
        let config = GameConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut party = party();
        let mut prompt = Prompt::new("".as_bytes(), Vec::new());
        let mut commander = PromptCommander::new(&mut prompt);

        let report =
            resolve_encounter(&mut party, roster(), &[], &config, &mut commander, &mut rng).unwrap();
        assert_eq!(report.outcome, Outcome::Fled);
        assert!(commander.is_closed());
    }

    #[test]
    fn scripted_fight_reaches_victory() {
        let config = GameConfig::default().with_loot_drop_chance(0.0);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut party = party();
        // Equip the sword, then attack the only target until it falls.
        let script = "4\n1\n1\n1\n";
        let mut prompt = Prompt::new(script.as_bytes(), Vec::new());
        let mut commander = PromptCommander::new(&mut prompt);

        let report =
            resolve_encounter(&mut party, roster(), &[], &config, &mut commander, &mut rng).unwrap();
        assert_eq!(report.outcome, Outcome::Victory);
        let output = String::from_utf8(prompt.into_output()).unwrap();
        assert!(output.contains("has been defeated"));
    }
}
