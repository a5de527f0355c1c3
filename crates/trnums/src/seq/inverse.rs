//! Inverse simplex numbers 1/T(n, d), T(n, d) = Γ(n + d) / (Γ(n) Γ(d + 1)).
//!
//! Two paths, chosen once from the dimension:
//! - d = 2 exactly: first differences of `GapNumbers`. Exact rational arithmetic
//!   end to end.
//! - any other d: the Γ closed form through a `GammaCache`. The f64 ratio is
//!   turned into the rational it exactly equals and then inverted.
//!
//! Exactness of the closed form
//! - Exact while all three Γ values come from the factorial table and the
//!   ratio is representable, i.e. integer n and d with n + d ≤ 23.
//! - Otherwise the term is the exact rational of a rounded f64; relative error
//!   is at the Lanczos level (~1e-15) and grows with n.
//!
//! Range of the closed form
//! - Γ leaves the f64 range past x ≈ 171.6. For integer n and d the stream
//!   ends with `Domain { argument: 172.0 }` at n = 172 − d (after 168 terms
//!   for d = 3 from n = 1).
//! - Far below zero both Γ(n + d) and Γ(n) underflow to 0; the 0/0 ratio is
//!   reported as `Overflow`.

use num_rational::BigRational;
use num_traits::{One, Zero};

use super::gap::{gap_at, GapNumbers};
use crate::error::SequenceError;
use crate::gamma::GammaCache;
use crate::rational::{from_f64_exact, is_two, succ, to_f64};

#[derive(Clone, Debug)]
enum Path {
    /// Running value is the gap just before the current position.
    Telescoping {
        gaps: GapNumbers,
        previous: BigRational,
    },
    ClosedForm,
}

/// Lazy, unbounded sequence of exact inverse simplex numbers.
///
/// Yields `Err` once and then ends if a term cannot be computed; under valid
/// inputs it never ends on its own.
#[derive(Clone, Debug)]
pub struct InverseSimplexNumbers {
    dimension: BigRational,
    position: BigRational,
    path: Path,
    cache: GammaCache,
    exhausted: bool,
}

impl InverseSimplexNumbers {
    pub fn new(start: BigRational, dimension: BigRational) -> Self {
        Self::with_cache(start, dimension, GammaCache::new())
    }

    /// Same as `new` but reuses an existing Γ memo.
    pub fn with_cache(start: BigRational, dimension: BigRational, cache: GammaCache) -> Self {
        let path = if is_two(&dimension) {
            Path::Telescoping {
                // 1/T(n₀, 2) = G(n₀) − G(n₀ − 1); G(0) = −1 for the usual n₀ = 1.
                // G(−1) has no value, but n₀ = 0 fails in `gaps` before the
                // seed is read.
                previous: gap_at(&(&start - BigRational::one()))
                    .unwrap_or_else(|_| BigRational::zero()),
                gaps: GapNumbers::starting_at(start.clone()),
            }
        } else {
            Path::ClosedForm
        };
        tracing::debug!(
            start = %start,
            dimension = %dimension,
            telescoping = matches!(path, Path::Telescoping { .. }),
            "inverse simplex numbers"
        );
        Self {
            dimension,
            position: start,
            path,
            cache,
            exhausted: false,
        }
    }

    pub fn dimension(&self) -> &BigRational {
        &self.dimension
    }

    /// Position of the next element.
    pub fn position(&self) -> &BigRational {
        &self.position
    }

    pub fn cache(&self) -> &GammaCache {
        &self.cache
    }

    /// Hand the Γ memo back, e.g. to seed another generator.
    pub fn into_cache(self) -> GammaCache {
        self.cache
    }
}

impl Iterator for InverseSimplexNumbers {
    type Item = Result<BigRational, SequenceError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let item = match &mut self.path {
            Path::Telescoping { gaps, previous } => gaps.next()?.map(|gap| {
                let term = &gap - &*previous;
                *previous = gap;
                term
            }),
            Path::ClosedForm => closed_form_term(&mut self.cache, &self.position, &self.dimension),
        };
        match &item {
            Ok(_) => self.position = succ(&self.position),
            Err(err) => {
                tracing::debug!(position = %self.position, %err, "sequence ended");
                self.exhausted = true;
            }
        }
        Some(item)
    }
}

impl std::iter::FusedIterator for InverseSimplexNumbers {}

/// 1 / exact(Γ(n + d) / (Γ(n) Γ(d + 1))).
pub(crate) fn closed_form_term(
    cache: &mut GammaCache,
    n: &BigRational,
    d: &BigRational,
) -> Result<BigRational, SequenceError> {
    let top = cache.eval(to_f64(&(n + d)))?;
    let bottom = cache.eval(to_f64(n))? * cache.eval(to_f64(&succ(d)))?;
    match from_f64_exact(top / bottom) {
        Some(ratio) if !ratio.is_zero() => Ok(ratio.recip()),
        _ => Err(SequenceError::Overflow {
            position: n.clone(),
        }),
    }
}
