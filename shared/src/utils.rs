//! # Shared Formatting Functions
//!
//! Number formatting for prices, percentages and large market figures.
//!
//! - [`format_usd`] - Dollar amount with exactly two decimals (`$50000.00`)
//! - [`format_percent`] - Percentage with exactly two decimals (`-2.50%`)
//! - [`format_grouped`] - Thousands separators, up to three decimals (`1,234,567.891`)
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{format_grouped, format_percent, format_usd};
//!
//! assert_eq!(format_usd(0.1), "$0.10");
//! assert_eq!(format_percent(-2.5), "-2.50%");
//! assert_eq!(format_grouped(372000000000.0), "372,000,000,000");
//! ```

/// Enough fraction digits to print any `f64` exactly (the longest needs 1074).
const EXACT_FRACTION_DIGITS: usize = 1100;

/// Round a plain non-negative decimal string to `decimals` places, ties away
/// from zero.
fn round_half_up(plain: &str, decimals: usize) -> String {
    let (integer_part, fraction) = plain.split_once('.').unwrap_or((plain, ""));

    let mut digits: Vec<u8> = integer_part.bytes().collect();
    digits.extend(fraction.bytes().chain(std::iter::repeat(b'0')).take(decimals));

    if fraction.as_bytes().get(decimals).is_some_and(|d| *d >= b'5') {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, b'1');
                break;
            }
            i -= 1;
            if digits[i] == b'9' {
                digits[i] = b'0';
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let (integer_digits, fraction_digits) = digits.split_at(digits.len() - decimals);
    let integer: String = integer_digits.iter().map(|&d| d as char).collect();
    if decimals == 0 {
        integer
    } else {
        let fraction: String = fraction_digits.iter().map(|&d| d as char).collect();
        format!("{}.{}", integer, fraction)
    }
}

/// Fixed-point rendering of the exact binary value, ties away from zero.
///
/// `-0.0` prints without a sign; other negatives keep it even when they
/// round to zero.
fn to_fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}", sign, round_half_up(&exact, decimals))
}

/// Format a price as dollars with two decimals and no grouping.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_usd;
///
/// assert_eq!(format_usd(50000.0), "$50000.00");
/// assert_eq!(format_usd(0.123456), "$0.12");
/// ```
pub fn format_usd(value: f64) -> String {
    format!("${}", to_fixed(value, 2))
}

/// Format a percent change with two decimals.
///
/// Positive values carry no `+` sign; the sign is conveyed by color.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_percent;
///
/// assert_eq!(format_percent(5.0), "5.00%");
/// assert_eq!(format_percent(-3.0), "-3.00%");
/// ```
pub fn format_percent(value: f64) -> String {
    format!("{}%", to_fixed(value, 2))
}

/// Format a number with comma thousands separators.
///
/// Rounds the shortest decimal form to at most three fraction digits (ties
/// away from zero) and drops trailing zeros, which matches how en-US locale
/// formatting renders market caps and volumes.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_grouped;
///
/// assert_eq!(format_grouped(1234567.0), "1,234,567");
/// assert_eq!(format_grouped(1234.5678), "1,234.568");
/// assert_eq!(format_grouped(-9876543.21), "-9,876,543.21");
/// ```
pub fn format_grouped(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let formatted = round_half_up(&value.abs().to_string(), 3);
    let (integer_part, decimal_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), ""));
    let decimal_part = decimal_part.trim_end_matches('0');

    // Add commas to integer part
    let mut result = String::new();
    for (i, ch) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    let integer_with_commas: String = result.chars().rev().collect();

    let is_zero = integer_with_commas == "0" && decimal_part.is_empty();
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    if decimal_part.is_empty() {
        format!("{}{}", sign, integer_with_commas)
    } else {
        format!("{}{}.{}", sign, integer_with_commas, decimal_part)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(50000.0), "$50000.00");
        assert_eq!(format_usd(0.1), "$0.10");
        assert_eq!(format_usd(1.005), "$1.00");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(-2.5), "-2.50%");
        assert_eq!(format_percent(0.0), "0.00%");
        assert_eq!(format_percent(12.346), "12.35%");
    }

    #[test]
    fn test_ties_round_away_from_zero() {
        assert_eq!(format_usd(0.125), "$0.13");
        assert_eq!(format_usd(2.675), "$2.67");
        assert_eq!(format_percent(0.125), "0.13%");
        assert_eq!(format_percent(-2.125), "-2.13%");
        assert_eq!(format_grouped(1234.0625), "1,234.063");
        assert_eq!(format_grouped(-1234.0625), "-1,234.063");
    }

    #[test]
    fn test_rounding_carries_into_integer_part() {
        assert_eq!(format_usd(9.995), "$9.99");
        assert_eq!(format_usd(99.999), "$100.00");
        assert_eq!(format_percent(-0.996), "-1.00%");
    }

    #[test]
    fn test_format_percent_signs_near_zero() {
        assert_eq!(format_percent(-0.0), "0.00%");
        assert_eq!(format_percent(-0.001), "-0.00%");
    }

    #[test]
    fn test_format_grouped_integers() {
        assert_eq!(format_grouped(0.0), "0");
        assert_eq!(format_grouped(999.0), "999");
        assert_eq!(format_grouped(1000.0), "1,000");
        assert_eq!(format_grouped(1234567890.0), "1,234,567,890");
    }

    #[test]
    fn test_format_grouped_fractions() {
        assert_eq!(format_grouped(1234.5), "1,234.5");
        assert_eq!(format_grouped(0.1234), "0.123");
        assert_eq!(format_grouped(999.9996), "1,000");
    }

    #[test]
    fn test_format_grouped_negative() {
        assert_eq!(format_grouped(-1234.5), "-1,234.5");
        assert_eq!(format_grouped(-0.0001), "0");
    }
}
