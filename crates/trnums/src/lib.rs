//! Exact reciprocals of generalized triangular (simplex) numbers.
//!
//! T(n, d) = Γ(n + d) / (Γ(n) Γ(d + 1)) counts arrangements in d dimensions;
//! d = 2 gives the triangular numbers 1, 3, 6, 10, … and d = 3 the tetrahedral
//! numbers. This crate yields 1/T(n, d) lazily as exact rationals for real n and
//! d, plus the d = 2 gap numbers whose first differences reproduce them.
//!
//! Layout
//! - `gamma`: Γ(x) in f64 and the `GammaCache` memo.
//! - `seq`: the generators (`InverseSimplexNumbers`, `GapNumbers`, `PartialSums`).
//! - `render`: exact / rounded / float output formatting.
//! - `rational`: exact f64 crossings and the precondition checks.
//!
//! API Policy
//! - Internal crate for the `tr-nums` CLI. No stable public API.

pub mod error;
pub mod gamma;
pub mod rational;
pub mod render;
pub mod seq;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::SequenceError;
pub use num_rational::BigRational;

/// Common exports for callers.
pub mod prelude {
    pub use crate::error::SequenceError;
    pub use crate::gamma::{gamma, GammaCache};
    pub use crate::rational::{check_dimension, check_position, is_nonpositive_integer};
    pub use crate::render::{limit_denominator, render, FormatMode, RenderCfg};
    pub use crate::seq::{
        gap_numbers, inverse_simplex_numbers, summed_gap_numbers, GapNumbers,
        InverseSimplexNumbers, PartialSums,
    };
    pub use num_rational::BigRational;
}
