//! Rounding and currency display helpers.
//!
//! The calculator itself works on unrounded `f64` values. These helpers
//! convert those values into [`Decimal`]s for display and export, so that the
//! rounding rule is applied exactly once and in one place.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Converts a calculator value to a [`Decimal`], mapping non-finite values
/// to zero.
fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or(Decimal::ZERO)
}

/// Rounds a dollar amount to cents using half-up rounding (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use equity_core::calculations::common::round_cents;
///
/// assert_eq!(round_cents(3255.150320988772), dec!(3255.15));
/// assert_eq!(round_cents(-0.125), dec!(-0.13));
/// ```
pub fn round_cents(value: f64) -> Decimal {
    to_decimal(value).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a dollar amount to whole dollars using half-up rounding.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use equity_core::calculations::common::round_whole_dollars;
///
/// assert_eq!(round_whole_dollars(1234.5), dec!(1235));
/// assert_eq!(round_whole_dollars(-1234.5), dec!(-1235));
/// ```
pub fn round_whole_dollars(value: f64) -> Decimal {
    to_decimal(value).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Inserts `,` between every group of three digits.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats an amount as whole US dollars, e.g. `$1,234` or `-$56`.
///
/// # Examples
///
/// ```
/// use equity_core::calculations::common::format_currency;
///
/// assert_eq!(format_currency(235000.0), "$235,000");
/// assert_eq!(format_currency(3255.15), "$3,255");
/// assert_eq!(format_currency(-1044.85), "-$1,045");
/// ```
pub fn format_currency(value: f64) -> String {
    let rounded = round_whole_dollars(value);
    let digits = rounded.abs().trunc().to_string();
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}${}", group_thousands(&digits))
}
