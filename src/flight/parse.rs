//! Parsers for the display strings embedded in flight records.
//!
//! None of these fail: a label that does not match yields `None` or a
//! zero/passthrough value so a single malformed record never blocks the list.

use std::sync::LazyLock;

use regex::Regex;

static AIRPORT_CODE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(([A-Z]{3})\)").unwrap());
static DURATION_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([0-9]+)h\s*([0-9]+)m").unwrap());
static INTEGER_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").unwrap());

/// Three-letter code inside parentheses, or the label itself when absent.
///
/// `"Berlin (BER)"` yields `"BER"`, `"XYZ"` yields `"XYZ"`.
#[must_use]
pub fn extract_airport_code(label: &str) -> &str {
    AIRPORT_CODE_REGEX
        .captures(label)
        .and_then(|caps| caps.get(1))
        .map_or(label, |m| m.as_str())
}

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Hours and minutes of a `"<h>h <m>m"` label, saturating at `u64::MAX`.
#[must_use]
pub fn parse_duration(label: &str) -> Option<(u64, u64)> {
    let caps = DURATION_REGEX.captures(label)?;
    Some((saturating_digits(&caps[1]), saturating_digits(&caps[2])))
}

/// Length of a `"<h>h <m>m"` label reduced to minutes within one day.
///
/// Only the time of day matters for arrival, so any length reduces exactly,
/// however many digits it has.
#[must_use]
pub fn duration_minutes_of_day(label: &str) -> Option<u32> {
    let caps = DURATION_REGEX.captures(label)?;
    let hours = digits_mod(&caps[1], 24);
    let minutes = digits_mod(&caps[2], MINUTES_PER_DAY);
    Some((hours * 60 + minutes) % MINUTES_PER_DAY)
}

/// First integer embedded in a price label, saturating at `u64::MAX`.
#[must_use]
pub fn parse_price(label: &str) -> Option<u64> {
    INTEGER_REGEX.find(label).map(|m| saturating_digits(m.as_str()))
}

// Callers pass regex captures of `[0-9]+`, so every byte is an ASCII digit.
fn saturating_digits(digits: &str) -> u64 {
    digits
        .bytes()
        .fold(0_u64, |acc, b| acc.saturating_mul(10).saturating_add(u64::from(b - b'0')))
}

fn digits_mod(digits: &str, modulus: u32) -> u32 {
    digits
        .bytes()
        .fold(0_u32, |acc, b| (acc * 10 + u32::from(b - b'0')) % modulus)
}

/// Price with two decimals and a comma separator, `"0,00"` if unparseable.
#[must_use]
pub fn format_price(label: &str) -> String {
    format!("{},00", parse_price(label).unwrap_or(0))
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
