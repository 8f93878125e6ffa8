//! Low-level, allocation-free primitives.
//!
//! - [`coord`]: signed row/column offsets between squares, classified as rook or bishop lines.

pub mod coord;
