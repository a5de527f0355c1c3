//! Output formatting for exact rationals.
//!
//! Rendering is a pure function of the value and a `RenderCfg`; the value itself
//! is never touched.
//!
//! - `Exact`: reduced `p/q`, or `p` when the denominator is 1.
//! - `Rounded { digits }`: best rational approximation with denominator at most
//!   `10^digits`, then printed like `Exact`.
//! - `Float`: nearest f64 in its shortest round-trip form.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use crate::rational::to_f64;

/// How a term is printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormatMode {
    #[default]
    Exact,
    Rounded {
        digits: u32,
    },
    Float,
}

/// Render configuration passed explicitly to `render`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderCfg {
    pub mode: FormatMode,
}

impl RenderCfg {
    pub fn new(mode: FormatMode) -> Self {
        Self { mode }
    }
}

/// Format `value` according to `cfg`.
pub fn render(value: &BigRational, cfg: RenderCfg) -> String {
    match cfg.mode {
        FormatMode::Exact => exact(value),
        FormatMode::Rounded { digits } => {
            if value.denom().to_string().len() as u64 <= u64::from(digits) {
                return exact(value);
            }
            let max_den = num_traits::pow(BigInt::from(10), digits as usize);
            exact(&limit_denominator(value, &max_den))
        }
        FormatMode::Float => format!("{:?}", to_f64(value)),
    }
}

fn exact(value: &BigRational) -> String {
    if value.denom().is_one() {
        value.numer().to_string()
    } else {
        format!("{}/{}", value.numer(), value.denom())
    }
}

/// Closest rational to `value` with denominator at most `max_den`.
///
/// Walks the continued-fraction convergents of |value| and compares the last
/// convergent that fits with the semiconvergent bounded by `max_den`. Values
/// whose denominator already fits come back unchanged. `max_den` must be ≥ 1.
pub fn limit_denominator(value: &BigRational, max_den: &BigInt) -> BigRational {
    debug_assert!(max_den.is_positive());
    if value.denom() <= max_den {
        return value.clone();
    }
    let target = value.abs();
    let (mut p0, mut q0, mut p1, mut q1) =
        (BigInt::zero(), BigInt::one(), BigInt::one(), BigInt::zero());
    let mut n = target.numer().clone();
    let mut d = target.denom().clone();
    while !d.is_zero() {
        let a = &n / &d;
        let q2 = &q0 + &a * &q1;
        if &q2 > max_den {
            break;
        }
        let p2 = &p0 + &a * &p1;
        p0 = std::mem::replace(&mut p1, p2);
        q0 = std::mem::replace(&mut q1, q2);
        let r = &n - &a * &d;
        n = std::mem::replace(&mut d, r);
    }
    let k = (max_den - &q0) / &q1;
    let semi = BigRational::new(&p0 + &k * &p1, &q0 + &k * &q1);
    let conv = BigRational::new(p1, q1);
    let best = if (&conv - &target).abs() <= (&semi - &target).abs() {
        conv
    } else {
        semi
    };
    if value.is_negative() {
        -best
    } else {
        best
    }
}
