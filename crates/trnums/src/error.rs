//! Errors surfaced by the generators and the precondition checks.

use std::fmt;

use num_rational::BigRational;

/// Typed failure shared by every sequence in the crate.
///
/// Each variant maps to a distinct user-facing message in the CLI.
#[derive(Clone, Debug, PartialEq)]
pub enum SequenceError {
    /// Γ evaluated at a pole (zero or a negative integer) or outside f64 range.
    Domain { argument: f64 },
    /// No algorithm exists for this dimension (the gap recurrence is d = 2 only).
    Unimplemented { dimension: BigRational },
    /// The Γ ratio at `position` is not a finite non-zero f64.
    Overflow { position: BigRational },
    /// A start position or dimension failed the precondition checks.
    InvalidInput { reason: String },
}

impl SequenceError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain { argument } => {
                write!(f, "gamma function is undefined at {argument} (pole or overflow)")
            }
            Self::Unimplemented { dimension } => write!(
                f,
                "gap numbers are only implemented for dimension 2, not {dimension}"
            ),
            Self::Overflow { position } => write!(
                f,
                "term at position {position} is not representable as a finite non-zero value"
            ),
            Self::InvalidInput { reason } => write!(f, "invalid input: {reason}"),
        }
    }
}

impl std::error::Error for SequenceError {}
