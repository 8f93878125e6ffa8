//! Sum of squares vs. square of the sum over `1..=n`.
//!
//! Closed forms are evaluated in `u128` and narrowed to `u64`. A result that does not fit is
//! [`SquaresError::Overflow`] rather than a wrapped value.

use thiserror::Error;
use tracing::debug;

/// Largest `n` accepted by [`square_of_sum`] (and therefore [`difference_of_squares`]).
pub const MAX_SQUARE_OF_SUM_INPUT: u64 = 92_681;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SquaresError {
    #[error("{operation}({number}) does not fit in u64")]
    Overflow {
        number: u64,
        operation: &'static str,
    },
}

fn narrow(value: u128, number: u64, operation: &'static str) -> Result<u64, SquaresError> {
    u64::try_from(value).map_err(|_| {
        debug!(number, operation, "result overflows u64");
        SquaresError::Overflow { number, operation }
    })
}

/// `(1 + 2 + ... + n)^2`.
pub fn square_of_sum(number: u64) -> Result<u64, SquaresError> {
    let n = number as u128;
    // n <= u64::MAX, so n(n+1)/2 < 2^127 and fits u128; only the square needs checking.
    let sum = n * (n + 1) / 2;
    let square = sum.checked_mul(sum).unwrap_or(u128::MAX);
    narrow(square, number, "square_of_sum")
}

/// `1^2 + 2^2 + ... + n^2`.
pub fn sum_of_squares(number: u64) -> Result<u64, SquaresError> {
    let n = number as u128;
    let total = (n * (n + 1))
        .checked_mul(2 * n + 1)
        .map(|v| v / 6)
        .unwrap_or(u128::MAX);
    narrow(total, number, "sum_of_squares")
}

/// `square_of_sum(n) - sum_of_squares(n)`.
pub fn difference_of_squares(number: u64) -> Result<u64, SquaresError> {
    let square = square_of_sum(number)?;
    let sum = sum_of_squares(number)?;
    Ok(square - sum)
}
