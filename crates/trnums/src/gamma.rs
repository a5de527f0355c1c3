//! Γ(x) in f64 and the memo used by the closed-form generator path.
//!
//! Purpose
//! - Evaluate the Gamma function for real arguments, including fractional and
//!   negative non-integer ones.
//! - Keep positive integer arguments exact: the closed-form simplex formula
//!   divides factorials, and those quotients must come out as exact integers.
//!
//! Method
//! - Positive integers up to `MAX_EXACT_ARG`: factorial table.
//! - x < 0.5: reflection Γ(x) = π / (sin(πx) Γ(1−x)).
//! - Otherwise Lanczos (g = 7, n = 9), with the power split in two halves so
//!   arguments up to ~171 do not overflow early.
//!
//! Memo
//! - `GammaCache` keys on the f64 bit pattern of the argument and never evicts.
//!   The number of distinct arguments is bounded by the number of terms the
//!   consumer asks for (three per term at most).

use std::collections::HashMap;
use std::f64::consts::{PI, TAU};

use crate::error::SequenceError;

/// Largest argument served from the factorial table: Γ(23) = 22!, the last
/// factorial that is exactly representable in f64.
pub const MAX_EXACT_ARG: f64 = 23.0;

/// Largest integer argument with a finite Γ: Γ(171) ≈ 7.26e306, while Γ(172)
/// exceeds `f64::MAX`. Closed-form sequences at integer n and d end with
/// `Domain` once n + d passes it.
pub const MAX_FINITE_INT_ARG: f64 = 171.0;

/// FACTORIAL[k] = k!
const FACTORIAL: [f64; 23] = [
    1.0,
    1.0,
    2.0,
    6.0,
    24.0,
    120.0,
    720.0,
    5040.0,
    40320.0,
    362880.0,
    3628800.0,
    39916800.0,
    479001600.0,
    6227020800.0,
    87178291200.0,
    1307674368000.0,
    20922789888000.0,
    355687428096000.0,
    6402373705728000.0,
    121645100408832000.0,
    2432902008176640000.0,
    51090942171709440000.0,
    1124000727777607680000.0,
];

const LANCZOS_G: f64 = 7.0;

const LANCZOS_COEFFS: [f64; 9] = [
    0.999_999_999_999_809_9,
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_1,
    -176.615_029_162_140_6,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_572e-6,
    1.505_632_735_149_311_6e-7,
];

#[inline]
fn lanczos_sum(z: f64) -> f64 {
    let mut acc = LANCZOS_COEFFS[0];
    for (i, c) in LANCZOS_COEFFS.iter().enumerate().skip(1) {
        acc += c / (z + i as f64);
    }
    acc
}

/// Gamma function Γ(x).
///
/// Returns +∞ at the poles (0, −1, −2, …) and NaN for NaN input. Values past
/// the f64 range (x ≳ 171.6) come back as +∞ as well.
pub fn gamma(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }
    if x == x.floor() {
        if x <= 0.0 {
            return f64::INFINITY;
        }
        if x <= MAX_EXACT_ARG {
            return FACTORIAL[x as usize - 1];
        }
    }
    if x < 0.5 {
        let s = (PI * x).sin();
        if s == 0.0 {
            return f64::INFINITY;
        }
        return PI / (s * gamma(1.0 - x));
    }
    let z = x - 1.0;
    let t = z + LANCZOS_G + 0.5;
    let half_pow = t.powf(0.5 * (z + 0.5));
    TAU.sqrt() * half_pow * (-t).exp() * half_pow * lanczos_sum(z)
}

/// Memoized Γ evaluator owned by (or injected into) a generator.
#[derive(Clone, Debug, Default)]
pub struct GammaCache {
    memo: HashMap<u64, f64>,
    hits: u64,
    misses: u64,
}

impl GammaCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Γ(x), memoized. Fails with `Domain` when the value is infinite or NaN;
    /// failures are not stored.
    pub fn eval(&mut self, x: f64) -> Result<f64, SequenceError> {
        let key = x.to_bits();
        if let Some(&v) = self.memo.get(&key) {
            self.hits += 1;
            return Ok(v);
        }
        self.misses += 1;
        let v = gamma(x);
        if !v.is_finite() {
            return Err(SequenceError::Domain { argument: x });
        }
        self.memo.insert(key, v);
        Ok(v)
    }

    /// Number of memoized arguments.
    pub fn len(&self) -> usize {
        self.memo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.memo.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}
