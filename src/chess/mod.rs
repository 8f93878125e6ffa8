//! Board geometry and the queen attack check.

pub mod board;
pub mod queen;
