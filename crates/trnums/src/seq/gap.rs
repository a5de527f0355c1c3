//! Gap numbers for dimension 2: G(n) = (n − 1)/(n + 1).
//!
//! G(n) is −1 plus the sum of the inverse triangular numbers up to n, so
//! G(n) − G(n − 1) = 2/(n(n + 1)) exactly. The recurrence needs no Γ at all.

use num_rational::BigRational;
use num_traits::{One, Zero};

use crate::error::SequenceError;
use crate::rational::{is_nonpositive_integer, is_two, succ, to_f64};

/// Gap value at `n`. `Domain` when n = −1, where the recurrence has a pole.
pub(crate) fn gap_at(n: &BigRational) -> Result<BigRational, SequenceError> {
    let above = succ(n);
    if above.is_zero() {
        return Err(SequenceError::Domain {
            argument: to_f64(n),
        });
    }
    Ok((n - BigRational::one()) / above)
}

/// Lazy, unbounded sequence of gap numbers starting at a given position.
///
/// A non-positive integer position yields `Domain` and ends the sequence.
#[derive(Clone, Debug)]
pub struct GapNumbers {
    position: BigRational,
    exhausted: bool,
}

impl GapNumbers {
    /// Gap numbers at `dimension`. Only d = 2 has an algorithm; anything else is
    /// `Unimplemented`.
    pub fn new(start: BigRational, dimension: &BigRational) -> Result<Self, SequenceError> {
        if !is_two(dimension) {
            return Err(SequenceError::Unimplemented {
                dimension: dimension.clone(),
            });
        }
        Ok(Self::starting_at(start))
    }

    /// Gap numbers at d = 2 from `start`.
    pub fn starting_at(start: BigRational) -> Self {
        Self {
            position: start,
            exhausted: false,
        }
    }

    /// Position of the next element.
    pub fn position(&self) -> &BigRational {
        &self.position
    }
}

impl Iterator for GapNumbers {
    type Item = Result<BigRational, SequenceError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        // Positions are Γ arguments of the simplex numbers; a non-positive
        // integer is a pole even where (n − 1)/(n + 1) itself is finite.
        let item = if is_nonpositive_integer(&self.position) {
            Err(SequenceError::Domain {
                argument: to_f64(&self.position),
            })
        } else {
            gap_at(&self.position)
        };
        match item {
            Ok(_) => self.position = succ(&self.position),
            Err(_) => self.exhausted = true,
        }
        Some(item)
    }
}

impl std::iter::FusedIterator for GapNumbers {}
