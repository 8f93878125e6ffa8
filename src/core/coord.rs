//! Offsets between board squares.

/// A signed (row, column) offset between two board squares.
///
/// Components are `i64` so the offset between any two `i32` squares is exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub dr: i64,
    pub dc: i64,
}

impl Coord {
    #[inline]
    pub const fn new(dr: i64, dc: i64) -> Self {
        Self { dr, dc }
    }

    /// Along a row or a column (a rook line).
    #[inline]
    pub fn is_orthogonal(self) -> bool {
        self.dr == 0 || self.dc == 0
    }

    /// Along a diagonal (a bishop line).
    #[inline]
    pub fn is_diagonal(self) -> bool {
        self.dr.abs() == self.dc.abs()
    }
}
