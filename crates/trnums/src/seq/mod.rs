//! Lazy exact sequences: inverse simplex numbers and gap numbers.
//!
//! Purpose
//! - `InverseSimplexNumbers`: 1/T(n, d) for real n and d, one term per `next`.
//! - `GapNumbers`: the d = 2 partial sums offset by −1, (n − 1)/(n + 1).
//! - `PartialSums`: running sums for the gap sequence of any dimension.
//!
//! Contract with callers
//! - Start positions and dimensions should pass `check_position` and
//!   `check_dimension` first. The generators still guard at Γ and at the gap
//!   pole and report `SequenceError` items instead of panicking.
//! - Items are `Result`s; the first `Err` ends the sequence.

mod gap;
mod inverse;
mod sums;

pub use gap::GapNumbers;
pub use inverse::InverseSimplexNumbers;
pub use sums::PartialSums;

use num_rational::BigRational;

/// 1/T(n, d) for n = start, start + 1, …
pub fn inverse_simplex_numbers(start: BigRational, dimension: BigRational) -> InverseSimplexNumbers {
    InverseSimplexNumbers::new(start, dimension)
}

/// Gap numbers at d = 2 for n = start, start + 1, …
pub fn gap_numbers(start: BigRational) -> GapNumbers {
    GapNumbers::starting_at(start)
}

/// Gap numbers for any dimension as running sums of inverse simplex numbers
/// from −1.
pub fn summed_gap_numbers(
    start: BigRational,
    dimension: BigRational,
) -> PartialSums<InverseSimplexNumbers> {
    PartialSums::new(
        InverseSimplexNumbers::new(start, dimension),
        BigRational::from_integer((-1).into()),
    )
}
