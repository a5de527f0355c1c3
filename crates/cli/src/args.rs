//! Parsing of numeric arguments and output flags.
//!
//! Numbers are read exactly: `3`, `-5/2`, `1.25` all become `BigRational`
//! without a detour through f64.

use num_bigint::BigInt;
use num_traits::Zero;
use trnums::render::{FormatMode, RenderCfg};
use trnums::BigRational;

/// Upper bound for `--round`: denominators up to 10^1000.
pub const MAX_ROUND_DIGITS: u32 = 1000;

/// Parse an integer, `p/q` fraction or plain decimal.
pub fn parse_rational(s: &str) -> Result<BigRational, String> {
    let s = s.trim();
    if let Some((num, den)) = s.split_once('/') {
        let num: BigInt = num
            .trim()
            .parse()
            .map_err(|_| format!("invalid numerator in `{s}`"))?;
        let den: BigInt = den
            .trim()
            .parse()
            .map_err(|_| format!("invalid denominator in `{s}`"))?;
        if den.is_zero() {
            return Err(format!("zero denominator in `{s}`"));
        }
        return Ok(BigRational::new(num, den));
    }

    let (negative, body) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let (int_part, frac_part) = body.split_once('.').unwrap_or((body, ""));
    let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
    if (int_part.is_empty() && frac_part.is_empty()) || !all_digits(int_part) || !all_digits(frac_part)
    {
        return Err(format!("`{s}` is not an integer, fraction or decimal"));
    }
    let numer: BigInt = format!("{int_part}{frac_part}")
        .parse()
        .map_err(|_| format!("`{s}` is not an integer, fraction or decimal"))?;
    let denom = BigInt::from(10).pow(frac_part.len() as u32);
    let value = BigRational::new(numer, denom);
    Ok(if negative { -value } else { value })
}

/// Output mode from the `--round` / `--float` flags (clap keeps them exclusive).
pub fn render_cfg(round: Option<u32>, float: bool) -> RenderCfg {
    let mode = match (round, float) {
        (_, true) => FormatMode::Float,
        (Some(digits), false) => FormatMode::Rounded { digits },
        (None, false) => FormatMode::Exact,
    };
    RenderCfg::new(mode)
}
