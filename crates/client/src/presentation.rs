//! Colored text rendering of game state.
//!
//! Every function writes to any [`Write`] so screens can be captured in
//! tests; colors come from `crossterm::style` and honor `NO_COLOR`.

use std::io::{self, Write};

use crossterm::style::Stylize;
use legends_core::{
    BattleEvent, BattleReport, Board, CellKind, Character, GameConfig, Hero, Item, Market,
    Monster, Outcome, Party, Position, market,
};

const RULE: &str = "==========================================================";

/// Draws the board with the party marker.
pub fn board(out: &mut impl Write, board: &Board, party: Position) -> io::Result<()> {
    let border = format!("+{}+", "---+".repeat(board.size()).trim_end_matches('+'));
    writeln!(out, "{border}")?;
    for (row, cells) in board.rows().enumerate() {
        write!(out, "|")?;
        for (col, &cell) in cells.iter().enumerate() {
            if party == Position::new(row, col) {
                write!(out, " {} |", "H".green().bold())?;
            } else {
                write!(out, " {} |", cell_symbol(cell))?;
            }
        }
        writeln!(out)?;
        writeln!(out, "{border}")?;
    }
    writeln!(
        out,
        "{} party  {} market  {} inaccessible",
        "H".green().bold(),
        cell_symbol(CellKind::Market),
        cell_symbol(CellKind::Inaccessible)
    )
}

fn cell_symbol(cell: CellKind) -> crossterm::style::StyledContent<char> {
    let symbol = cell.symbol();
    match cell {
        CellKind::Market => symbol.yellow(),
        CellKind::Inaccessible => symbol.dark_grey(),
        CellKind::Common => symbol.white(),
    }
}

/// One line per hero.
pub fn party(out: &mut impl Write, party: &Party) -> io::Result<()> {
    writeln!(out, "{}", "Party".bold())?;
    for (slot, hero) in party.heroes().iter().enumerate() {
        let line = format!("{}. {hero}", slot + 1);
        if hero.is_alive() {
            writeln!(out, "{line}")?;
        } else {
            writeln!(out, "{}", line.dark_grey())?;
        }
    }
    Ok(())
}

/// Full sheet for one hero: vitals, gear and inventory.
pub fn hero_sheet(out: &mut impl Write, hero: &Hero, config: &GameConfig) -> io::Result<()> {
    writeln!(out, "{}", RULE.dark_cyan())?;
    writeln!(out, "{hero}")?;
    writeln!(
        out,
        "HP {:.0}/{:.0} | XP {}/{}",
        hero.hp(),
        hero.max_hp(),
        hero.experience(),
        config.experience_threshold(hero.level())
    )?;
    let equipment = hero.equipment();
    writeln!(
        out,
        "Weapon: {} | Armor: {}",
        equipment.weapon_item().map_or("none", |item| item.name.as_str()),
        equipment.armor_item().map_or("none", |item| item.name.as_str())
    )?;
    if hero.inventory().is_empty() {
        writeln!(out, "Inventory: empty")?;
    } else {
        writeln!(out, "Inventory:")?;
        for (index, item) in hero.inventory().iter().enumerate() {
            writeln!(out, "  {}. {}", index + 1, item_line(item))?;
        }
    }
    writeln!(out, "{}", RULE.dark_cyan())
}

pub fn monsters(out: &mut impl Write, monsters: &[Monster]) -> io::Result<()> {
    for (slot, monster) in monsters.iter().enumerate() {
        let line = format!("{}. {monster}", slot + 1);
        if monster.is_alive() {
            writeln!(out, "{}", line.red())?;
        } else {
            writeln!(out, "{}", line.dark_grey())?;
        }
    }
    Ok(())
}

/// Catalog-style item row.
pub fn item_line(item: &Item) -> String {
    format!(
        "{:<18} {:>6.0}g  Lvl {:<2}  {}",
        item.name,
        item.price,
        item.min_level,
        item.describe()
    )
}

pub fn events(out: &mut impl Write, events: &[BattleEvent]) -> io::Result<()> {
    for event in events {
        let line = event.to_string();
        match event {
            BattleEvent::MonsterDefeated { .. } => writeln!(out, "{}", line.green())?,
            BattleEvent::HeroFainted { .. } | BattleEvent::MonsterAttacked { .. } => {
                writeln!(out, "{}", line.red())?
            }
            _ => writeln!(out, "{line}")?,
        }
    }
    Ok(())
}

/// Battle summary, including rewards on victory.
pub fn report(out: &mut impl Write, report: &BattleReport, party: &Party) -> io::Result<()> {
    let headline = match report.outcome {
        Outcome::Victory => "Victory!".green().bold(),
        Outcome::Defeat => "Your party has been wiped out.".red().bold(),
        Outcome::Fled => "You escaped.".yellow().bold(),
    };
    writeln!(out, "{headline} ({} rounds)", report.rounds)?;

    let Some(rewards) = &report.rewards else {
        return Ok(());
    };
    let name = |slot: usize| party.heroes().get(slot).map_or("?", |hero| hero.name());
    for &slot in &rewards.survivors {
        writeln!(
            out,
            "{} gains {} XP and {:.0} gold",
            name(slot),
            rewards.experience_each,
            rewards.gold_each
        )?;
    }
    for &(slot, levels) in &rewards.level_ups {
        writeln!(out, "{}", format!("{} gained {levels} level(s)!", name(slot)).cyan())?;
    }
    for &slot in &rewards.revived {
        writeln!(out, "{} is revived", name(slot))?;
    }
    if let Some((slot, item)) = &rewards.loot {
        writeln!(out, "{}", format!("{} found {}", name(*slot), item.name).yellow())?;
    }
    Ok(())
}

/// Stock listing with what `hero` can afford.
pub fn market_stock(out: &mut impl Write, market: &Market, hero: &Hero) -> io::Result<()> {
    writeln!(out, "{} (gold: {:.0})", "Market".bold(), hero.money())?;
    for (index, item) in market.items().iter().enumerate() {
        let line = format!("{}. {}", index + 1, item_line(item));
        if market::can_buy(hero, item).is_ok() {
            writeln!(out, "{line}")?;
        } else {
            writeln!(out, "{}", line.dark_grey())?;
        }
    }
    Ok(())
}
