//! Can one queen attack another?
//!
//! The decision is a one-shot classification of two positions into an [`AttackStatus`]. Board
//! bounds are checked before any coordinate arithmetic, so off-board input never reaches the
//! row/column/diagonal predicates inside [`Board::can_attack`]. The predicates themselves work on
//! widened offsets, so they are also defined for any pair of `i32` squares when called directly.
//!
//! Two queens on the same square is a degenerate input: it is reported as
//! [`AttackStatus::CannotAttack`].

use std::fmt;

use tracing::debug;

use crate::chess::board::{Board, Position};

/// Queen rays as (row, column) unit steps: rank and file first, then diagonals.
const QUEEN_RAYS: [(i32, i32); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttackStatus {
    CannotAttack,
    CanAttack,
    InvalidPosition,
}

impl fmt::Display for AttackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AttackStatus::CannotAttack => "cannot attack",
            AttackStatus::CanAttack => "can attack",
            AttackStatus::InvalidPosition => "invalid position",
        };
        f.write_str(s)
    }
}

impl Board {
    pub fn out_of_board(&self, queen: Position) -> bool {
        !self.contains(queen)
    }

    pub fn can_attack(&self, queen_1: Position, queen_2: Position) -> AttackStatus {
        if self.out_of_board(queen_1) || self.out_of_board(queen_2) {
            debug!(%queen_1, %queen_2, size = self.size(), "queen off the board");
            return AttackStatus::InvalidPosition;
        }
        if same_position(queen_1, queen_2) {
            return AttackStatus::CannotAttack;
        }
        if on_same_row_or_column(queen_1, queen_2) || on_same_diagonal(queen_1, queen_2) {
            AttackStatus::CanAttack
        } else {
            AttackStatus::CannotAttack
        }
    }

    /// Squares a queen on `queen` attacks on an otherwise empty board, sorted by (row, column).
    ///
    /// Each ray is walked until it leaves the board. An off-board queen attacks nothing.
    pub fn queen_attacked_squares(&self, queen: Position) -> Vec<Position> {
        let mut out = Vec::new();
        if self.out_of_board(queen) {
            return out;
        }
        for (dr, dc) in QUEEN_RAYS {
            let mut cur = queen.step(dr, dc);
            while let Some(p) = cur.filter(|&p| self.contains(p)) {
                out.push(p);
                cur = p.step(dr, dc);
            }
        }
        out.sort_unstable();
        out
    }
}

/// Attack status on the standard 8x8 board.
pub fn can_attack(queen_1: Position, queen_2: Position) -> AttackStatus {
    Board::STANDARD.can_attack(queen_1, queen_2)
}

/// True iff either coordinate falls outside `[0, 7]`.
pub fn out_of_board(queen: Position) -> bool {
    Board::STANDARD.out_of_board(queen)
}

pub fn same_position(queen_1: Position, queen_2: Position) -> bool {
    queen_1 == queen_2
}

/// True for identical positions as well.
pub fn on_same_row_or_column(queen_1: Position, queen_2: Position) -> bool {
    queen_1.delta_to(queen_2).is_orthogonal()
}

/// `|row1 - row2| == |col1 - col2|`; true for identical positions as well.
pub fn on_same_diagonal(queen_1: Position, queen_2: Position) -> bool {
    queen_1.delta_to(queen_2).is_diagonal()
}

/// Every square of the standard board attacked by `queen`. Empty if `queen` is off the board.
pub fn attacked_squares(queen: Position) -> Vec<Position> {
    Board::STANDARD.queen_attacked_squares(queen)
}
