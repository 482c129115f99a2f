//! Value/uncertainty alignment in the concise `value(uncertainty)` notation.
//!
//! The uncertainty digits are scaled so that their last digit sits at the same
//! power of ten as the last written digit of the value:
//!
//! - an uncertainty written more finely than the value is rounded **up**
//!   (ceiling) to the value's last digit
//! - an uncertainty written more coarsely is padded with trailing zeros
//! - a zero uncertainty is shown as a single `0`
//!
//! The value text itself is never altered; the parenthetical is inserted
//! between the mantissa and the exponent suffix (`1.602(1)e-19`).

use crate::decimal::DecimalParts;
use crate::error::{FormatError, FormatResult};

/// Longest zero padding accepted before the uncertainty is rejected.
pub const MAX_PADDING: usize = 4096;

/// Format `value` with `uncertainty` appended in parentheses.
pub fn format_uncertain_value(value: &str, uncertainty: &str) -> FormatResult<String> {
    let value = DecimalParts::parse(value)?;
    let uncertainty = DecimalParts::parse(uncertainty)?;
    let digits = aligned_digits(&value, &uncertainty)?;
    Ok(with_uncertainty(&value, &digits))
}

/// Uncertainty digits expressed in units of the value's last written digit.
///
/// An uncertainty that would need more than [`MAX_PADDING`] trailing zeros is
/// reported as malformed.
pub fn aligned_digits(
    value: &DecimalParts<'_>,
    uncertainty: &DecimalParts<'_>,
) -> FormatResult<String> {
    if uncertainty.is_zero() {
        return Ok("0".to_string());
    }

    let digits = uncertainty.digits();
    let discrepancy =
        uncertainty.least_significant_exponent() - value.least_significant_exponent();

    if discrepancy < 0 {
        let places = usize::try_from(discrepancy.unsigned_abs()).unwrap_or(usize::MAX);
        Ok(ceil_shift(&digits, places))
    } else {
        let zeros = usize::try_from(discrepancy)
            .ok()
            .filter(|&zeros| zeros <= MAX_PADDING)
            .ok_or_else(|| FormatError::malformed(&uncertainty.to_string()))?;
        let mut padded = digits;
        padded.extend(std::iter::repeat_n('0', zeros));
        Ok(padded)
    }
}

/// Insert `(digits)` between the mantissa and exponent suffix of `value`.
pub fn with_uncertainty(value: &DecimalParts<'_>, digits: &str) -> String {
    format!("{}({}){}", value.mantissa(), digits, value.suffix())
}

/// Ceiling of `digits / 10^places`, without leading zeros.
fn ceil_shift(digits: &str, places: usize) -> String {
    let keep = digits.len().saturating_sub(places);
    let (head, tail) = digits.split_at(keep);
    let round_up = tail.bytes().any(|b| b != b'0');

    let head = head.trim_start_matches('0');
    let mut out: Vec<u8> = if head.is_empty() {
        vec![b'0']
    } else {
        head.as_bytes().to_vec()
    };

    if round_up {
        increment(&mut out);
    }
    out.into_iter().map(char::from).collect()
}

/// Add one to a decimal digit string in place.
fn increment(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}
