//! Square tile board.
//!
//! Generated once per session. The starting corner and its two neighbors
//! are always common so the party can leave `(0, 0)`.

use rand::Rng;

use super::{Direction, Position, WorldError};
use crate::config::GameConfig;

/// Terrain of a single board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    /// Open ground. Entering may trigger an ambush.
    Common,
    /// Market tile. Safe.
    Market,
    /// Blocked.
    Inaccessible,
}

impl CellKind {
    pub fn is_accessible(self) -> bool {
        self != CellKind::Inaccessible
    }

    /// Single-character map glyph.
    pub fn symbol(self) -> char {
        match self {
            CellKind::Common => '.',
            CellKind::Market => 'M',
            CellKind::Inaccessible => 'X',
        }
    }
}

/// Result of a successful move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Moved onto a common tile; roll for an ambush.
    EncounterRoll(Position),
    /// Moved onto a tile that never triggers encounters.
    Safe(Position),
    /// Off the board edge. The party stays put.
    OffBoard,
    /// Target cell is inaccessible. The party stays put.
    Blocked,
}

impl MoveOutcome {
    /// New position, if the move happened.
    pub fn position(self) -> Option<Position> {
        match self {
            MoveOutcome::EncounterRoll(position) | MoveOutcome::Safe(position) => Some(position),
            MoveOutcome::OffBoard | MoveOutcome::Blocked => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    size: usize,
    cells: Vec<CellKind>,
}

impl Board {
    /// Generates a `size x size` board.
    ///
    /// Each free cell rolls once: below `inaccessible_ratio` it is blocked,
    /// below `inaccessible_ratio + market_ratio` it is a market, otherwise
    /// common.
    pub fn generate(size: usize, config: &GameConfig, rng: &mut impl Rng) -> Result<Self, WorldError> {
        if !(config.min_board_size..=config.max_board_size).contains(&size) {
            return Err(WorldError::InvalidBoardSize {
                size,
                min: config.min_board_size,
                max: config.max_board_size,
            });
        }

        let market_cutoff = config.inaccessible_ratio + config.market_ratio;
        let mut cells = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                let kind = if Self::is_start_zone(row, col) {
                    CellKind::Common
                } else {
                    let roll: f64 = rng.gen_range(0.0..1.0);
                    if roll < config.inaccessible_ratio {
                        CellKind::Inaccessible
                    } else if roll < market_cutoff {
                        CellKind::Market
                    } else {
                        CellKind::Common
                    }
                };
                cells.push(kind);
            }
        }

        tracing::debug!(size, "generated board");
        Ok(Self { size, cells })
    }

    /// Builds a board from explicit rows. Used for fixed layouts.
    pub fn from_rows(rows: Vec<Vec<CellKind>>) -> Result<Self, WorldError> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for (row_index, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(WorldError::InvalidCoordinate {
                    position: Position::new(row_index, row.len()),
                    size,
                });
            }
            cells.extend(row);
        }
        if size == 0 {
            return Err(WorldError::InvalidBoardSize { size, min: 1, max: usize::MAX });
        }
        Ok(Self { size, cells })
    }

    fn is_start_zone(row: usize, col: usize) -> bool {
        matches!((row, col), (0, 0) | (0, 1) | (1, 0))
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, position: Position) -> bool {
        position.row < self.size && position.col < self.size
    }

    pub fn cell(&self, position: Position) -> Result<CellKind, WorldError> {
        if !self.contains(position) {
            return Err(WorldError::InvalidCoordinate {
                position,
                size: self.size,
            });
        }
        Ok(self.cells[position.row * self.size + position.col])
    }

    pub fn is_accessible(&self, position: Position) -> bool {
        self.cell(position).is_ok_and(CellKind::is_accessible)
    }

    pub fn is_market(&self, position: Position) -> bool {
        self.cell(position) == Ok(CellKind::Market)
    }

    pub fn is_common(&self, position: Position) -> bool {
        self.cell(position) == Ok(CellKind::Common)
    }

    /// Attempts a one-tile move from `from`.
    ///
    /// `from` itself must be on the board.
    pub fn try_move(&self, from: Position, direction: Direction) -> Result<MoveOutcome, WorldError> {
        self.cell(from)?;

        let Some(target) = from.step(direction).filter(|target| self.contains(*target)) else {
            return Ok(MoveOutcome::OffBoard);
        };

        Ok(match self.cell(target)? {
            CellKind::Inaccessible => MoveOutcome::Blocked,
            CellKind::Common => MoveOutcome::EncounterRoll(target),
            CellKind::Market => MoveOutcome::Safe(target),
        })
    }

    /// Rows of cells, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellKind]> {
        self.cells.chunks(self.size)
    }
}

/// Returns true with the configured ambush probability.
pub fn roll_ambush(config: &GameConfig, rng: &mut impl Rng) -> bool {
    let chance = config.ambush_chance;
    !chance.is_nan() && rng.gen_bool(chance.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use CellKind::{Common as C, Inaccessible as X, Market as M};

    fn fixed() -> Board {
        Board::from_rows(vec![
            vec![C, C, X, M],
            vec![C, M, C, C],
            vec![X, C, C, C],
            vec![C, C, C, M],
        ])
        .unwrap()
    }

    #[test]
    fn start_zone_is_always_common() {
        let config = GameConfig::default();
        for seed in 0..32 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let board = Board::generate(4, &config, &mut rng).unwrap();
            assert!(board.is_common(Position::new(0, 0)));
            assert!(board.is_common(Position::new(0, 1)));
            assert!(board.is_common(Position::new(1, 0)));
        }
    }

    #[test]
    fn rejects_out_of_range_sizes() {
        let config = GameConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert!(matches!(
            Board::generate(3, &config, &mut rng),
            Err(WorldError::InvalidBoardSize { size: 3, .. })
        ));
        assert!(Board::generate(21, &config, &mut rng).is_err());
        assert_eq!(Board::generate(20, &config, &mut rng).unwrap().size(), 20);
    }

    #[test]
    fn cell_queries_reject_invalid_coordinates() {
        let board = fixed();
        assert!(board.cell(Position::new(4, 0)).is_err());
        assert!(!board.is_accessible(Position::new(0, 9)));
        assert!(board.is_market(Position::new(0, 3)));
        assert!(!board.is_accessible(Position::new(0, 2)));
    }

    #[test]
    fn moves_respect_edges_and_walls() {
        let board = fixed();
        assert_eq!(board.try_move(Position::ORIGIN, Direction::Up), Ok(MoveOutcome::OffBoard));
        assert_eq!(
            board.try_move(Position::new(0, 1), Direction::Right),
            Ok(MoveOutcome::Blocked)
        );
        assert_eq!(
            board.try_move(Position::new(0, 1), Direction::Down),
            Ok(MoveOutcome::Safe(Position::new(1, 1)))
        );
        assert_eq!(
            board.try_move(Position::new(3, 2), Direction::Right),
            Ok(MoveOutcome::Safe(Position::new(3, 3)))
        );
        assert_eq!(
            board.try_move(Position::new(3, 3), Direction::Down),
            Ok(MoveOutcome::OffBoard)
        );
        assert_eq!(
            board.try_move(Position::ORIGIN, Direction::Down),
            Ok(MoveOutcome::EncounterRoll(Position::new(1, 0)))
        );
    }

    #[test]
    fn ambush_honors_extreme_chances() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut config = GameConfig::default();
        config.ambush_chance = 0.0;
        assert!(!roll_ambush(&config, &mut rng));
        config.ambush_chance = 1.0;
        assert!(roll_ambush(&config, &mut rng));
    }
}
