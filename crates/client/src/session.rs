//! One interactive play-through: recruit, explore, trade and fight.

use std::collections::HashMap;
use std::io::{self, BufRead, Write};

use crossterm::style::Stylize;
use legends_content::Content;
use legends_core::world::roll_ambush;
use legends_core::{
    BattleError, Board, Character, GameConfig, Hero, HeroClass, Market, MoveOutcome, Outcome,
    Party, PartyError, Position, WorldError, market, resolve_encounter, sample_roster,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use strum::IntoEnumIterator;

use crate::commander::PromptCommander;
use crate::config::ClientConfig;
use crate::input::{Command, Prompt, PromptError};
use crate::presentation;

/// How a single game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    Quit,
    Defeat,
    /// Input ran out.
    Closed,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error(transparent)]
    Battle(#[from] BattleError),

    #[error(transparent)]
    World(#[from] WorldError),

    #[error(transparent)]
    Party(#[from] PartyError),

    #[error("no heroes available to recruit")]
    NoHeroes,
}

impl From<io::Error> for SessionError {
    fn from(err: io::Error) -> Self {
        SessionError::Prompt(PromptError::Io(err))
    }
}

/// Interactive game loop over loaded content.
pub struct Session<'c, R, W> {
    prompt: Prompt<R, W>,
    content: &'c Content,
    board_size: Option<usize>,
    rng: ChaCha8Rng,
}

impl<'c, R: BufRead, W: Write> Session<'c, R, W> {
    pub fn new(prompt: Prompt<R, W>, content: &'c Content, config: &ClientConfig, seed: u64) -> Self {
        Self {
            prompt,
            content,
            board_size: config.board_size,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Plays games until the player quits or declines a rematch.
    pub fn run(mut self) -> anyhow::Result<W> {
        self.prompt
            .say(&format!("{}", "Welcome to Legends: Monsters and Heroes!".bold()))?;
        loop {
            let end = self.play()?;
            tracing::info!(?end, "game over");
            if end != SessionEnd::Defeat {
                break;
            }
            match self.prompt.confirm("Start a new game?") {
                Ok(true) => continue,
                Ok(false) | Err(PromptError::Closed) => break,
                Err(e) => return Err(e.into()),
            }
        }
        self.prompt.say("Farewell, adventurer.")?;
        Ok(self.prompt.into_output())
    }

    /// Plays one game from recruitment to its end.
    pub fn play(&mut self) -> Result<SessionEnd, SessionError> {
        match self.setup_and_explore() {
            Err(SessionError::Prompt(PromptError::Closed)) => Ok(SessionEnd::Closed),
            other => other,
        }
    }

    fn setup_and_explore(&mut self) -> Result<SessionEnd, SessionError> {
        let board = self.build_board()?;
        let party = self.recruit()?;
        tracing::info!(board = board.size(), heroes = party.len(), "game started");
        self.explore(&board, party)
    }

    fn build_board(&mut self) -> Result<Board, SessionError> {
        let config = &self.content.config;
        if let Some(size) = self.board_size {
            match Board::generate(size, config, &mut self.rng) {
                Ok(board) => return Ok(board),
                Err(e) => self.prompt.warn(&format!("{e}; choose another size."))?,
            }
        }
        let size = self
            .prompt
            .number("Board size", config.min_board_size..=config.max_board_size)?;
        Ok(Board::generate(size, config, &mut self.rng)?)
    }

    /// Builds a party from a fresh copy of the hero pool. A recruited hero
    /// leaves the pool.
    fn recruit(&mut self) -> Result<Party, SessionError> {
        let mut pool = self.content.heroes.clone();
        if pool.is_empty() {
            return Err(SessionError::NoHeroes);
        }
        let max = GameConfig::MAX_PARTY_SIZE.min(pool.len());
        let size = self.prompt.number("How many heroes will you lead?", 1..=max)?;

        let mut party = Party::new();
        while party.len() < size {
            let classes: Vec<HeroClass> = HeroClass::iter()
                .filter(|&class| !pool.available(class).is_empty())
                .collect();
            let labels: Vec<String> = classes
                .iter()
                .map(|&class| format!("{class} ({} available)", pool.available(class).len()))
                .collect();
            let title = format!("Choose a class for hero {}", party.len() + 1);
            let Some(choice) = self.prompt.select(&title, &labels)? else {
                continue;
            };

            let class = classes[choice];
            let heroes: Vec<String> = pool.available(class).iter().map(ToString::to_string).collect();
            let Some(index) = self.prompt.select("Choose a hero", &heroes)? else {
                continue;
            };
            if let Some(hero) = pool.take(class, index) {
                self.prompt.say(&format!("{} joins the party.", hero.name()))?;
                tracing::debug!(hero = %hero.name(), %class, "hero recruited");
                party.add_hero(hero)?;
            }
        }
        Ok(party)
    }

    fn explore(&mut self, board: &Board, mut party: Party) -> Result<SessionEnd, SessionError> {
        let content = self.content;
        let mut markets: HashMap<Position, Market> = HashMap::new();
        party.set_position(Position::ORIGIN);

        loop {
            presentation::board(self.prompt.output(), board, party.position())?;
            match self.prompt.command()? {
                Command::Move(direction) => match board.try_move(party.position(), direction)? {
                    MoveOutcome::OffBoard => self.prompt.warn("You cannot leave the board.")?,
                    MoveOutcome::Blocked => self.prompt.warn("That way is blocked.")?,
                    MoveOutcome::Safe(position) => {
                        party.set_position(position);
                        if board.is_market(position) {
                            self.prompt.say("You reach a market. Press M to trade.")?;
                        }
                    }
                    MoveOutcome::EncounterRoll(position) => {
                        party.set_position(position);
                        if roll_ambush(&content.config, &mut self.rng) {
                            if let Some(end) = self.encounter(&mut party)? {
                                return Ok(end);
                            }
                        }
                    }
                },
                Command::Market => {
                    let position = party.position();
                    if !board.is_market(position) {
                        self.prompt.warn("There is no market here.")?;
                        continue;
                    }
                    let market = markets.entry(position).or_insert_with(|| {
                        Market::stock(&content.items, &content.config, &mut self.rng)
                    });
                    self.visit_market(&mut party, market)?;
                }
                Command::Info => {
                    presentation::party(self.prompt.output(), &party)?;
                    for hero in party.heroes() {
                        presentation::hero_sheet(self.prompt.output(), hero, &content.config)?;
                    }
                }
                Command::Quit => return Ok(SessionEnd::Quit),
            }
        }
    }

    /// Runs an ambush. Returns the game end if the battle ended it.
    fn encounter(&mut self, party: &mut Party) -> Result<Option<SessionEnd>, SessionError> {
        let content = self.content;
        if content.monsters.is_empty() {
            tracing::warn!("ambush skipped: monster catalog is empty");
            return Ok(None);
        }
        let roster = sample_roster(&content.monsters, party, &mut self.rng)?;
        self.prompt
            .say(&format!("{}", "Monsters ambush the party!".red().bold()))?;

        let mut commander = PromptCommander::new(&mut self.prompt);
        let report = resolve_encounter(
            party,
            roster,
            &content.items,
            &content.config,
            &mut commander,
            &mut self.rng,
        )?;
        let closed = commander.is_closed();

        presentation::report(self.prompt.output(), &report, party)?;

        if closed {
            return Ok(Some(SessionEnd::Closed));
        }
        Ok((report.outcome == Outcome::Defeat).then_some(SessionEnd::Defeat))
    }

    fn visit_market(&mut self, party: &mut Party, market: &Market) -> Result<(), SessionError> {
        loop {
            let names: Vec<String> = party
                .heroes()
                .iter()
                .map(|hero| format!("{} ({:.0} gold)", hero.name(), hero.money()))
                .collect();
            let Some(slot) = self.prompt.select("Who is trading?", &names)? else {
                return Ok(());
            };
            let hero = party.hero_mut(slot)?;

            loop {
                let title = format!("{} at the market", hero.name());
                match self.prompt.select(&title, &["Buy", "Sell"])? {
                    Some(0) => self.buy(hero, market)?,
                    Some(_) => self.sell(hero, market)?,
                    None => break,
                }
            }
        }
    }

    fn buy(&mut self, hero: &mut Hero, market: &Market) -> Result<(), SessionError> {
        if market.is_empty() {
            self.prompt.warn("The shelves are empty.")?;
            return Ok(());
        }
        presentation::market_stock(self.prompt.output(), market, hero)?;
        let Some(index) = self.prompt.pick(market.items().len())? else {
            return Ok(());
        };
        match market.buy(hero, index) {
            Ok(item) => self
                .prompt
                .say(&format!("{} bought {}.", hero.name(), item.name))?,
            Err(e) => self.prompt.warn(&format!("Cannot buy: {e}"))?,
        }
        Ok(())
    }

    fn sell(&mut self, hero: &mut Hero, market: &Market) -> Result<(), SessionError> {
        let config = &self.content.config;
        if hero.inventory().is_empty() {
            self.prompt.warn("Nothing to sell.")?;
            return Ok(());
        }
        let labels: Vec<String> = hero
            .inventory()
            .iter()
            .map(|item| {
                format!(
                    "{} (sells for {:.0})",
                    item.name,
                    market::sale_price(item, config)
                )
            })
            .collect();
        let Some(index) = self.prompt.select("Sell which item?", &labels)? else {
            return Ok(());
        };
        match market.sell(hero, index, config) {
            Ok(proceeds) => self
                .prompt
                .say(&format!("{} receives {proceeds:.0} gold.", hero.name()))?,
            Err(e) => self.prompt.warn(&format!("Cannot sell: {e}"))?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use legends_content::HeroRoster;
    use legends_core::{CellKind, Item, Monster, MonsterKind};

    fn content() -> Content {
        let mut heroes = HeroRoster::new();
        heroes.extend(
            HeroClass::Warrior,
            [Hero::new("Gaerdal", HeroClass::Warrior, 100.0, 700.0, 500.0, 600.0, 1354.0, 7).unwrap()],
        );
        heroes.extend(
            HeroClass::Paladin,
            [Hero::new("Parzival", HeroClass::Paladin, 300.0, 750.0, 650.0, 700.0, 2500.0, 7).unwrap()],
        );
        Content {
            config: GameConfig::default(),
            heroes,
            monsters: vec![
                Monster::new("Natsunomeryu", MonsterKind::Dragon, 1, 100.0, 200.0, 10.0).unwrap(),
            ],
            items: vec![Item::weapon("Sword", 500.0, 1, 800.0, 1)],
        }
    }

    fn session<'c>(content: &'c Content, script: &'static str) -> Session<'c, &'static [u8], Vec<u8>> {
        let config = ClientConfig {
            board_size: Some(4),
            ..ClientConfig::default()
        };
        Session::new(Prompt::new(script.as_bytes(), Vec::new()), content, &config, 9)
    }

    fn text(output: Vec<u8>) -> String {
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn recruit_and_quit() {
        let content = content();
        // One hero: second class listed (Paladin), first hero; then info and quit.
        let output = session(&content, "1\n2\n1\ni\nq\n").run().unwrap();
        let output = text(output);
        assert!(output.contains("Parzival joins the party."));
        assert!(output.contains("Inventory: empty"));
        assert!(output.contains("Farewell"));
    }

    #[test]
    fn recruited_hero_leaves_pool() {
        let content = content();
        let mut session = session(&content, "2\n1\n1\n1\n1\n");
        let party = session.recruit().unwrap();
        assert_eq!(party.len(), 2);
        assert_eq!(party.heroes()[0].name(), "Gaerdal");
        assert_eq!(party.heroes()[1].name(), "Parzival");
        assert_eq!(content.heroes.len(), 2);
    }

    #[test]
    fn closed_input_ends_game() {
        let content = content();
        let mut session = session(&content, "1\n");
        assert_eq!(session.play().unwrap(), SessionEnd::Closed);
    }

    #[test]
    fn invalid_board_size_falls_back_to_prompt() {
        let content = content();
        let config = ClientConfig {
            board_size: Some(99),
            ..ClientConfig::default()
        };
        let prompt = Prompt::new("5\n".as_bytes(), Vec::new());
        let mut session = Session::new(prompt, &content, &config, 1);
        assert_eq!(session.build_board().unwrap().size(), 5);
    }

    #[test]
    fn market_trade_round_trip() {
        let content = content();
        let board = Board::from_rows(vec![
            vec![CellKind::Common, CellKind::Market],
            vec![CellKind::Common, CellKind::Inaccessible],
        ])
        .unwrap();
        let mut party = Party::new();
        party
            .add_hero(Hero::new("Parzival", HeroClass::Paladin, 300.0, 750.0, 650.0, 700.0, 2500.0, 7).unwrap())
            .unwrap();

        // Walk right onto the market, buy the sword, sell it back, leave, quit.
        let script = "d\nm\n1\n1\n1\n2\n1\n0\n0\nq\n";
        let mut session = session(&content, script);
        assert_eq!(session.explore(&board, party).unwrap(), SessionEnd::Quit);

        let output = text(session.prompt.into_output());
        assert!(output.contains("You reach a market."));
        assert!(output.contains("Parzival bought Sword."));
        assert!(output.contains("Parzival receives 250 gold."));
    }

    #[test]
    fn blocked_and_off_board_moves_are_reported() {
        let content = content();
        let board = Board::from_rows(vec![
            vec![CellKind::Common, CellKind::Inaccessible],
            vec![CellKind::Market, CellKind::Common],
        ])
        .unwrap();
        let mut party = Party::new();
        party
            .add_hero(Hero::new("Gaerdal", HeroClass::Warrior, 100.0, 700.0, 500.0, 600.0, 1354.0, 7).unwrap())
            .unwrap();

        let mut session = session(&content, "w\nd\nm\nq\n");
        assert_eq!(session.explore(&board, party).unwrap(), SessionEnd::Quit);
        let output = text(session.prompt.into_output());
        assert!(output.contains("You cannot leave the board."));
        assert!(output.contains("That way is blocked."));
        assert!(output.contains("There is no market here."));
    }
}
