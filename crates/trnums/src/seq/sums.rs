//! Running sums over a fallible term stream.
//!
//! Summing inverse simplex numbers from −1 gives the gap numbers of any
//! dimension. For d = 2 this reproduces `GapNumbers`; for other dimensions it
//! inherits the precision of the closed-form path.

use num_rational::BigRational;

use crate::error::SequenceError;

/// Yields `initial + t₁`, `initial + t₁ + t₂`, … and passes errors through.
#[derive(Clone, Debug)]
pub struct PartialSums<I> {
    terms: I,
    total: BigRational,
}

impl<I> PartialSums<I>
where
    I: Iterator<Item = Result<BigRational, SequenceError>>,
{
    pub fn new(terms: I, initial: BigRational) -> Self {
        Self {
            terms,
            total: initial,
        }
    }

    /// Sum of everything yielded so far (including the initial offset).
    pub fn total(&self) -> &BigRational {
        &self.total
    }
}

impl<I> Iterator for PartialSums<I>
where
    I: Iterator<Item = Result<BigRational, SequenceError>>,
{
    type Item = Result<BigRational, SequenceError>;

    fn next(&mut self) -> Option<Self::Item> {
        let term = match self.terms.next()? {
            Ok(term) => term,
            Err(err) => return Some(Err(err)),
        };
        self.total += term;
        Some(Ok(self.total.clone()))
    }
}
