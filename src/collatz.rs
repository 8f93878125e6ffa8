//! Collatz step counting.
//!
//! Each term is halved if even, or mapped to `3n + 1` if odd, until it reaches 1. Counting is
//! iterative, so the step count for large starts costs no stack. `3n + 1` is checked: a term
//! that would exceed `i64::MAX` is reported as [`CollatzError::Overflow`].

use thiserror::Error;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CollatzError {
    #[error("collatz start must be positive, got {start}")]
    InvalidInput { start: i64 },

    #[error("collatz sequence from {start} overflows after {step} steps (term {term})")]
    Overflow { start: i64, term: i64, step: u64 },
}

/// The term after `n`, or `None` if `3n + 1` does not fit.
///
/// Requires `n > 0`: zero is a fixed point of the halving rule. Callers validate the start first.
#[inline]
pub(crate) fn next_term(n: i64) -> Option<i64> {
    debug_assert!(n > 0, "collatz term must be positive, got {n}");
    if n % 2 == 0 {
        Some(n / 2)
    } else {
        n.checked_mul(3)?.checked_add(1)
    }
}

/// Number of steps from `start` to 1.
pub fn steps(start: i64) -> Result<u64, CollatzError> {
    if start <= 0 {
        debug!(start, "rejecting non-positive collatz start");
        return Err(CollatzError::InvalidInput { start });
    }

    let mut n = start;
    let mut count = 0u64;
    while n != 1 {
        n = match next_term(n) {
            Some(next) => next,
            None => {
                debug!(start, term = n, step = count, "collatz term overflowed");
                return Err(CollatzError::Overflow {
                    start,
                    term: n,
                    step: count,
                });
            }
        };
        count += 1;
        trace!(start, step = count, term = n);
    }
    Ok(count)
}

/// All terms from `start` down to and including 1.
pub fn sequence(start: i64) -> Result<Sequence, CollatzError> {
    if start <= 0 {
        debug!(start, "rejecting non-positive collatz start");
        return Err(CollatzError::InvalidInput { start });
    }
    Ok(Sequence {
        next: Some(start),
        overflowed: false,
    })
}

/// Iterator over a Collatz sequence; built by [`sequence`].
#[derive(Debug, Clone)]
pub struct Sequence {
    next: Option<i64>,
    overflowed: bool,
}

impl Sequence {
    /// Whether iteration stopped because a term did not fit in `i64`.
    pub fn overflowed(&self) -> bool {
        self.overflowed
    }
}

impl Iterator for Sequence {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let cur = self.next?;
        self.next = if cur == 1 {
            None
        } else {
            let n = next_term(cur);
            self.overflowed = n.is_none();
            n
        };
        Some(cur)
    }
}

impl std::iter::FusedIterator for Sequence {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_term_halves_or_triples() {
        assert_eq!(next_term(16), Some(8));
        assert_eq!(next_term(5), Some(16));
        assert_eq!(next_term(i64::MAX), None);
    }

    #[test]
    fn positive_terms_stay_positive() {
        for n in 1..10_000 {
            assert!(next_term(n).is_some_and(|t| t > 0), "n={n}");
        }
    }

    #[test]
    fn sequence_from_six() {
        let terms: Vec<i64> = sequence(6).unwrap().collect();
        assert_eq!(terms, vec![6, 3, 10, 5, 16, 8, 4, 2, 1]);
    }

    #[test]
    fn sequence_reports_overflow() {
        let mut seq = sequence(i64::MAX).unwrap();
        assert_eq!(seq.next(), Some(i64::MAX));
        assert!(seq.overflowed());
        assert_eq!(seq.next(), None);
    }
}
