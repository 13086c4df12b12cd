//! Line-based player input.

use std::io::{self, BufRead, Write};
use std::ops::RangeInclusive;

use crossterm::style::Stylize;
use legends_core::Direction;

/// Errors that end a prompt.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    /// The input stream reached end of file.
    #[error("input closed")]
    Closed,

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type PromptResult<T> = Result<T, PromptError>;

/// Exploration command typed on the map screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Market,
    Info,
    Quit,
}

impl Command {
    /// Parses a single-letter command, case-insensitively.
    pub fn parse(input: &str) -> Option<Self> {
        let command = match input.trim().to_ascii_lowercase().as_str() {
            "w" => Command::Move(Direction::Up),
            "a" => Command::Move(Direction::Left),
            "s" => Command::Move(Direction::Down),
            "d" => Command::Move(Direction::Right),
            "m" => Command::Market,
            "i" => Command::Info,
            "q" => Command::Quit,
            _ => return None,
        };
        Some(command)
    }
}

/// Reads answers from `input` and writes prompts to `output`.
///
/// Invalid answers are reported and asked again; only a closed input or an
/// I/O failure escapes as an error.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes `message` and reads one trimmed line.
    pub fn line(&mut self, message: &str) -> PromptResult<String> {
        write!(self.output, "{} ", message.cyan())?;
        self.output.flush()?;

        let mut buffer = String::new();
        if self.input.read_line(&mut buffer)? == 0 {
            writeln!(self.output)?;
            return Err(PromptError::Closed);
        }
        Ok(buffer.trim().to_string())
    }

    /// Reads a number inside `range`.
    pub fn number(&mut self, message: &str, range: RangeInclusive<usize>) -> PromptResult<usize> {
        let message = format!("{message} [{}-{}]:", range.start(), range.end());
        loop {
            let answer = self.line(&message)?;
            match answer.parse::<usize>() {
                Ok(value) if range.contains(&value) => return Ok(value),
                _ => self.warn(&format!(
                    "Please enter a number between {} and {}.",
                    range.start(),
                    range.end()
                ))?,
            }
        }
    }

    /// Shows a numbered menu. Returns the zero-based index of the choice, or
    /// `None` when the player picks `0` to go back.
    pub fn select<S: AsRef<str>>(&mut self, title: &str, options: &[S]) -> PromptResult<Option<usize>> {
        writeln!(self.output, "{}", title.bold())?;
        for (index, option) in options.iter().enumerate() {
            writeln!(self.output, "  {}. {}", index + 1, option.as_ref())?;
        }
        self.pick(options.len())
    }

    /// Reads a choice for a list of `count` entries the caller already
    /// printed, numbered from 1.
    pub fn pick(&mut self, count: usize) -> PromptResult<Option<usize>> {
        writeln!(self.output, "  0. Back")?;
        let choice = self.number("Choose", 0..=count)?;
        Ok(choice.checked_sub(1))
    }

    /// Asks a yes/no question.
    pub fn confirm(&mut self, message: &str) -> PromptResult<bool> {
        let message = format!("{message} (y/n):");
        loop {
            match self.line(&message)?.to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.warn("Please answer y or n.")?,
            }
        }
    }

    /// Reads exploration commands until one parses.
    pub fn command(&mut self) -> PromptResult<Command> {
        loop {
            let answer = self.line("Move [W/A/S/D], [M]arket, [I]nfo, [Q]uit:")?;
            match Command::parse(&answer) {
                Some(command) => return Ok(command),
                None => self.warn(&format!("Unknown command '{answer}'."))?,
            }
        }
    }

    pub fn say(&mut self, message: &str) -> PromptResult<()> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    pub fn warn(&mut self, message: &str) -> PromptResult<()> {
        writeln!(self.output, "{}", message.yellow())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt(input: &str) -> Prompt<&[u8], Vec<u8>> {
        Prompt::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn parses_commands_case_insensitively() {
        assert_eq!(Command::parse("W"), Some(Command::Move(Direction::Up)));
        assert_eq!(Command::parse(" d "), Some(Command::Move(Direction::Right)));
        assert_eq!(Command::parse("m"), Some(Command::Market));
        assert_eq!(Command::parse("Q"), Some(Command::Quit));
        assert_eq!(Command::parse("x"), None);
        assert_eq!(Command::parse(""), None);
    }

    #[test]
    fn number_reprompts_until_in_range() {
        let mut prompt = prompt("abc\n9\n3\n");
        assert_eq!(prompt.number("Party size", 1..=3).unwrap(), 3);
        let output = String::from_utf8(prompt.into_output()).unwrap();
        assert_eq!(output.matches("between 1 and 3").count(), 2);
    }

    #[test]
    fn select_zero_goes_back() {
        let mut prompt = prompt("0\n2\n");
        assert_eq!(prompt.select("Pick", &["a", "b"]).unwrap(), None);
        assert_eq!(prompt.select("Pick", &["a", "b"]).unwrap(), Some(1));
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut prompt = prompt("maybe\n");
        assert!(matches!(prompt.confirm("Again?"), Err(PromptError::Closed)));
    }

    #[test]
    fn command_skips_unknown_input() {
        let mut prompt = prompt("jump\ni\n");
        assert_eq!(prompt.command().unwrap(), Command::Info);
    }
}
