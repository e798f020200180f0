//! Common helpers shared by the ROI calculations.
//!
//! This module holds the permissive numeric parsing policy applied to every
//! user-entered field, plus rounding for display. Parsing here never fails:
//! unparsable text becomes a default value so the engine always produces an
//! answer, possibly a degenerate one.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero. Only used when
/// presenting amounts; calculations keep full precision.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use roi_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Normalizes input for numeric parsing: trims whitespace, removes commas
/// (thousands separator) and a trailing percent sign.
fn normalize_numeric_input(s: &str) -> String {
    let trimmed = s.trim();
    let trimmed = trimmed.strip_suffix('%').unwrap_or(trimmed);
    trimmed.trim().replace(',', "")
}

/// Returns true when the field holds nothing but whitespace.
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Parses a user-entered amount or percentage, yielding zero on failure.
///
/// Accepts `"1,234.56"`, `" 10.5 % "` and scientific notation such as
/// `"1.2e6"`.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
/// use roi_core::calculations::common::parse_or_zero;
///
/// assert_eq!(parse_or_zero("1,00,000"), dec!(100000));
/// assert_eq!(parse_or_zero("8.5%"), dec!(8.5));
/// assert_eq!(parse_or_zero("twelve"), Decimal::ZERO);
/// ```
pub fn parse_or_zero(s: &str) -> Decimal {
    let normalized = normalize_numeric_input(s);
    if normalized.is_empty() {
        return Decimal::ZERO;
    }

    normalized
        .parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(&normalized))
        .unwrap_or_else(|e| {
            debug!(input = %s, "unparsable amount treated as zero: {}", e);
            Decimal::ZERO
        })
}

/// Parses a whole number of years, yielding `default` only on failure.
///
/// Negative counts become zero.
///
/// # Examples
///
/// ```
/// use roi_core::calculations::common::parse_years_or;
///
/// assert_eq!(parse_years_or("9", 10), 9);
/// assert_eq!(parse_years_or("0", 10), 0);
/// assert_eq!(parse_years_or("-3", 10), 0);
/// assert_eq!(parse_years_or("nine", 10), 10);
/// ```
pub fn parse_years_or(
    s: &str,
    default: u32,
) -> u32 {
    let normalized = normalize_numeric_input(s);
    match normalized.parse::<i64>() {
        Ok(years) => u32::try_from(years.max(0)).unwrap_or(u32::MAX),
        Err(e) => {
            if !normalized.is_empty() {
                debug!(input = %s, default, "unparsable year count replaced by default: {}", e);
            }
            default
        }
    }
}

/// Parses a positive whole number, yielding `default` on failure.
///
/// Zero is treated as unparsable; used for the escalation frequency, which
/// must never be zero.
pub fn parse_count_or(
    s: &str,
    default: u32,
) -> u32 {
    let normalized = normalize_numeric_input(s);
    match normalized.parse::<u32>() {
        Ok(0) => {
            debug!(input = %s, default, "zero count replaced by default");
            default
        }
        Ok(count) => count,
        Err(e) => {
            if !normalized.is_empty() {
                debug!(input = %s, default, "unparsable count replaced by default: {}", e);
            }
            default
        }
    }
}
