//! Number parsing and display formatting for the numeric field.
//!
//! Everything here is pure: the field calls these on every keystroke and
//! commit, the tests call them directly.

use std::sync::LazyLock;

use regex::Regex;

/// Separator inserted between groups of three integer digits.
pub const GROUP_SEPARATOR: char = ' ';

/// Separator between integer and fraction digits in grouped output.
pub const DECIMAL_SEPARATOR: char = ',';

/// Numbers whose plain form (sign excluded) is longer than this get grouped.
pub const GROUPING_THRESHOLD: usize = 4;

/// Fraction digits kept when a number is rendered grouped.
const MAX_FRACTION_DIGITS: usize = 3;

/// Text the field accepts while typing: an optional minus, then digits.
static ACCEPTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]*$").expect("valid accepted-input pattern"));

/// Longest numeric prefix of a string, the way a lenient float parse reads it.
static NUMERIC_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)")
        .expect("valid numeric-prefix pattern")
});

/// Removes every whitespace character, group separators included.
pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Returns whether `text` is a valid in-progress value (`""` and `"-"` included).
pub fn is_accepted(text: &str) -> bool {
    ACCEPTED.is_match(text)
}

/// Parses the leading number of `text`, ignoring anything after it.
///
/// Leading whitespace is skipped. Returns `None` when no digits start the
/// text, so `""`, `"-"` and `"abc"` all fail while `"12abc"` yields `12`.
pub fn parse_number(text: &str) -> Option<f64> {
    let prefix = NUMERIC_PREFIX.find(text.trim_start())?.as_str();

    let unsigned = prefix.trim_start_matches(['+', '-']);
    if unsigned == "Infinity" {
        return Some(if prefix.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    prefix.parse().ok()
}

/// Formats a number for display in the field.
///
/// Short numbers are shown as their plain decimal form. Once that form has
/// more than [`GROUPING_THRESHOLD`] characters (sign excluded) the integer
/// digits are grouped by three and the fraction is rounded to three digits.
/// A four digit number therefore stays ungrouped: `1234` but `12 345`.
///
/// Negative values that round to zero keep their sign (`-0.0004` is `-0`).
/// Tiny and huge magnitudes are written out in positional notation, never
/// with an exponent, so `1e-7` is long enough to be grouped and shows as `0`.
/// Committed field values are integers within `i64` bounds and never hit
/// either case.
pub fn format_number(value: f64) -> String {
    let plain = plain_string(value);
    if plain.trim_start_matches('-').len() > GROUPING_THRESHOLD {
        grouped_string(value)
    } else {
        plain
    }
}

/// Shortest decimal form with no trailing `.0`; negative zero prints as `0`.
fn plain_string(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else {
        value.to_string()
    }
}

fn grouped_string(value: f64) -> String {
    if !value.is_finite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let rounded = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
    let (int_digits, fraction) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut out = String::with_capacity(rounded.len() + int_digits.len() / 3 + 1);
    if value < 0.0 {
        out.push('-');
    }
    for (i, digit) in int_digits.chars().enumerate() {
        if i > 0 && (int_digits.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(digit);
    }
    if !fraction.is_empty() {
        out.push(DECIMAL_SEPARATOR);
        out.push_str(fraction);
    }
    out
}
