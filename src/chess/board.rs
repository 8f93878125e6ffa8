//! Board squares and the board-size configuration.

use std::fmt;

use thiserror::Error;

use crate::core::coord::Coord;

/// A zero-indexed square on the board.
///
/// Coordinates are signed so that off-board input (including negatives) is representable and
/// can be rejected by [`Board::contains`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: i32,
    pub column: i32,
}

impl Position {
    #[inline]
    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    /// Offset from `self` to `other`, widened so any two `i32` squares have a defined delta.
    #[inline]
    pub fn delta_to(self, other: Position) -> Coord {
        Coord::new(
            i64::from(other.row) - i64::from(self.row),
            i64::from(other.column) - i64::from(self.column),
        )
    }

    /// The neighbouring square one `(dr, dc)` step away, or `None` past the `i32` range.
    #[inline]
    pub fn step(self, dr: i32, dc: i32) -> Option<Position> {
        Some(Position::new(
            self.row.checked_add(dr)?,
            self.column.checked_add(dc)?,
        ))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board size must be at least 1, got {size}")]
    InvalidSize { size: i32 },
}

/// Square board configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    size: i32,
}

impl Board {
    /// The standard 8x8 chessboard.
    pub const STANDARD: Board = Board { size: 8 };

    pub fn new(size: i32) -> Result<Self, BoardError> {
        if size < 1 {
            return Err(BoardError::InvalidSize { size });
        }
        Ok(Self { size })
    }

    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// True iff both coordinates lie in `[0, size)`.
    #[inline]
    pub fn contains(&self, p: Position) -> bool {
        (0..self.size).contains(&p.row) && (0..self.size).contains(&p.column)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::STANDARD
    }
}
