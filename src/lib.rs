//! Small, stateless integer exercises:
//!
//! - [`collatz`]: steps for a Collatz sequence to reach 1.
//! - [`squares`]: difference between the square of sums and the sum of squares.
//! - [`chess::queen`]: whether two queens on a chessboard attack each other.
//!
//! Everything here is a pure function of its arguments.

pub mod chess;
pub mod collatz;
pub mod core;
pub mod squares;
