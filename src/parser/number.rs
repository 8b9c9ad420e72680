use std::str::FromStr;

use bigdecimal::{BigDecimal, RoundingMode};

use crate::error::ParseError;

/// Fractional digits of the fixed-point rendering.
const FIXED_PRECISION: i64 = 5;

/// Fractional digits of the scientific mantissa.
const SCIENTIFIC_PRECISION: i64 = 2;

/// Leading characters of the fixed rendering that must not all be `.`/`0`.
const ZERO_PREFIX_LEN: usize = (FIXED_PRECISION as usize + 1).div_ceil(2) + 2;

/// Widest integer printed in full.
const MAX_INTEGER_DIGITS: i64 = 1000;

/// Returns a short display string for a decimal numeral.
///
/// Integers are printed bare. Other values are printed either fixed-point
/// (`%.5f`) or scientific (`%.2e`), whichever is shorter, except that a fixed
/// rendering that would read as zero is never chosen.
pub fn short_form(numeral: &str) -> Result<String, ParseError> {
    let value = BigDecimal::from_str(numeral)
        .map_err(|_| ParseError::Invalid(numeral.to_string()))?
        .normalized();
    let magnitude = value.abs();
    let negative = value != magnitude;
    let (int_val, scale) = magnitude.as_bigint_and_exponent();
    let digit_count = int_val.to_string().len() as i64;

    if scale <= 0 {
        if digit_count.saturating_sub(scale) > MAX_INTEGER_DIGITS {
            return Err(ParseError::OutOfRange(numeral.to_string()));
        }
        let (whole, _) = magnitude.with_scale(0).as_bigint_and_exponent();
        return Ok(signed(negative, whole.to_string()));
    }

    let exponent = digit_count - 1 - scale;
    let scientific = signed(negative, scientific(&magnitude, digit_count, exponent));
    if exponent < -FIXED_PRECISION - 1 {
        // below the last fixed digit, fixed-point would print all zeros
        return Ok(scientific);
    }

    let fixed = signed(negative, decimal_places(&magnitude, FIXED_PRECISION));
    let lead = fixed.strip_prefix('-').unwrap_or(&fixed);
    if lead.chars().take(ZERO_PREFIX_LEN).all(|c| c == '.' || c == '0') {
        return Ok(scientific);
    }
    if fixed.len() < scientific.len() + 2 {
        Ok(fixed)
    } else {
        Ok(scientific)
    }
}

fn signed(negative: bool, body: String) -> String {
    if negative {
        format!("-{}", body)
    } else {
        body
    }
}

/// Renders a non-negative value rounded half-even to `places` fractional digits.
fn decimal_places(value: &BigDecimal, places: i64) -> String {
    let (int_val, _) = value
        .with_scale_round(places, RoundingMode::HalfEven)
        .as_bigint_and_exponent();
    let places = places as usize;
    let digits = format!("{:0>width$}", int_val.to_string(), width = places + 1);
    let (int_part, frac_part) = digits.split_at(digits.len() - places);
    format!("{}.{}", int_part, frac_part)
}

/// Renders a non-negative value with `digit_count` significant digits and
/// leading-digit exponent `exponent` as `d.dde±XX`.
fn scientific(value: &BigDecimal, digit_count: i64, mut exponent: i64) -> String {
    let (int_val, _) = value.as_bigint_and_exponent();
    let mut mantissa = decimal_places(
        &BigDecimal::new(int_val.clone(), digit_count - 1),
        SCIENTIFIC_PRECISION,
    );
    if mantissa.len() > SCIENTIFIC_PRECISION as usize + 2 {
        // rounding carried into a new leading digit, e.g. 9.995 -> 10.00
        mantissa = decimal_places(&BigDecimal::new(int_val, digit_count), SCIENTIFIC_PRECISION);
        exponent += 1;
    }

    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{}e{}{:02}", mantissa, sign, exponent.abs())
}
