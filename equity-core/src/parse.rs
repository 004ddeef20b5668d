//! Lenient number parsing for form input.
//!
//! Form fields are held as text so that users can type freely. At the
//! boundary into the calculator every field is turned into a number with a
//! default of zero: parsing never fails.
//!
//! The rules are:
//!
//! - surrounding whitespace is ignored and `,` thousands separators are removed;
//! - the longest leading prefix that forms a decimal literal is used, so
//!   `"12abc"` parses as `12` and `"abc"` as `0`;
//! - anything that does not start with a number, or overflows to infinity,
//!   becomes `0`.
//!
//! # Example
//!
//! ```
//! use equity_core::parse::{parse_number, parse_whole_number};
//!
//! assert_eq!(parse_number("1,250.50"), 1250.5);
//! assert_eq!(parse_number("6.5%"), 6.5);
//! assert_eq!(parse_number(""), 0.0);
//! assert_eq!(parse_whole_number("30.9"), 30.0);
//! ```

/// Trims whitespace and removes commas used as thousands separators.
fn normalize_number_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Returns the longest prefix of `s` that is a decimal literal, or `None` if
/// `s` does not start with one.
///
/// With `allow_fraction` unset only an optionally signed run of digits is
/// accepted.
fn leading_literal(
    s: &str,
    allow_fraction: bool,
) -> Option<&str> {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if allow_fraction && bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        // a bare "." only counts when digits sit on at least one side of it
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    if allow_fraction && matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    Some(&s[..end])
}

fn parse_with(
    input: &str,
    allow_fraction: bool,
) -> f64 {
    let normalized = normalize_number_input(input);
    let value = leading_literal(&normalized, allow_fraction)
        .and_then(|literal| literal.parse::<f64>().ok())
        .unwrap_or(0.0);

    // -0.0 and non-finite values both collapse to a plain zero
    if value.is_finite() && value != 0.0 {
        value
    } else {
        0.0
    }
}

/// Parses a decimal number, defaulting to `0.0`.
pub fn parse_number(input: &str) -> f64 {
    parse_with(input, true)
}

/// Parses a whole number, ignoring any fractional part, defaulting to `0.0`.
pub fn parse_whole_number(input: &str) -> f64 {
    parse_with(input, false)
}
