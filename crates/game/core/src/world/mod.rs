//! Overworld: the tile board, party movement and encounter sampling.

mod board;
mod roster;

pub use board::{Board, CellKind, MoveOutcome, roll_ambush};
pub use roster::sample_roster;

use crate::error::{ErrorSeverity, GameError};

/// Grid coordinate, row-major with `(0, 0)` at the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Neighbor in `direction`, or `None` when it would leave the first
    /// row or column.
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (d_row, d_col) = direction.delta();
        Some(Self {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }
}

impl core::fmt::Display for Position {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Movement direction on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// `(row, col)` offset.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Structural errors from board and roster operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    #[error("board size {size} outside {min}..={max}")]
    InvalidBoardSize { size: usize, min: usize, max: usize },

    #[error("coordinate {position} is off a {size}x{size} board")]
    InvalidCoordinate { position: Position, size: usize },

    #[error("monster catalog is empty")]
    EmptyCatalog,

    #[error("party has no heroes")]
    EmptyParty,
}

impl GameError for WorldError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            WorldError::EmptyCatalog => ErrorSeverity::Fatal,
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            WorldError::InvalidBoardSize { .. } => "WORLD_INVALID_BOARD_SIZE",
            WorldError::InvalidCoordinate { .. } => "WORLD_INVALID_COORDINATE",
            WorldError::EmptyCatalog => "WORLD_EMPTY_CATALOG",
            WorldError::EmptyParty => "WORLD_EMPTY_PARTY",
        }
    }
}
