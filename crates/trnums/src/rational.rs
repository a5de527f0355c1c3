//! Exact rational helpers shared by the generators and the CLI.
//!
//! Positions and dimensions travel as `BigRational`. The closed-form path has to
//! leave exact arithmetic for Γ and come back again; the two crossings live here.

use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive};

use crate::error::SequenceError;

/// Nearest f64 to `value`. NaN when the conversion is not defined.
#[inline]
pub fn to_f64(value: &BigRational) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

/// The rational exactly equal to `x` (every finite f64 is a dyadic rational).
/// `None` for infinities and NaN.
#[inline]
pub fn from_f64_exact(x: f64) -> Option<BigRational> {
    BigRational::from_float(x)
}

/// `true` for 0, −1, −2, …: the poles of Γ.
#[inline]
pub fn is_nonpositive_integer(value: &BigRational) -> bool {
    value.is_integer() && !value.is_positive()
}

/// `true` when `value` is exactly 2.
#[inline]
pub fn is_two(value: &BigRational) -> bool {
    *value == BigRational::from_integer(2.into())
}

/// Precondition for start positions: not a non-positive integer.
pub fn check_position(start: &BigRational) -> Result<(), SequenceError> {
    if is_nonpositive_integer(start) {
        return Err(SequenceError::invalid(format!(
            "start position {start} is a non-positive integer"
        )));
    }
    Ok(())
}

/// Precondition for dimensions: not a non-positive integer.
pub fn check_dimension(dimension: &BigRational) -> Result<(), SequenceError> {
    if is_nonpositive_integer(dimension) {
        return Err(SequenceError::invalid(format!(
            "dimension {dimension} is a non-positive integer"
        )));
    }
    Ok(())
}

/// `value + 1`, kept as a helper because every generator advances this way.
#[inline]
pub(crate) fn succ(value: &BigRational) -> BigRational {
    value + BigRational::one()
}
