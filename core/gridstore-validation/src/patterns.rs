//! String patterns for contact fields.

use regex_lite::Regex;
use std::sync::LazyLock;

/// Optional leading `+`, then digits, whitespace and dashes.
pub const PHONE_PATTERN: &str = r"^\+?[\d\s-]+$";

/// Local part, `@`, one or more dotted labels, and a TLD of two or more word
/// characters. Matched case-insensitively.
pub const EMAIL_PATTERN: &str = r"(?i)^[\d\w._-]+@(?:[\d\w-]+\.)+\w{2,}$";

/// Two-letter country prefix followed by 10 to 20 digits.
pub const VAT_PATTERN: &str = r"^[A-Za-z]{2}[\d]{10,20}$";

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PHONE_PATTERN).expect("phone pattern compiles"));
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"));
static VAT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(VAT_PATTERN).expect("VAT pattern compiles"));

pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub fn is_valid_vat(value: &str) -> bool {
    VAT_RE.is_match(value)
}

/// Whether a keystroke may be typed into a phone-number field.
///
/// Only ASCII digits, `+`, `-` and space are accepted.
pub fn is_phone_keystroke(key: char) -> bool {
    matches!(key, '0'..='9' | '+' | '-' | ' ')
}

/// Drops every character a phone field would have rejected at the keyboard.
///
/// Used for pasted text, which bypasses the keystroke filter.
pub fn filter_phone_input(input: &str) -> String {
    input.chars().filter(|c| is_phone_keystroke(*c)).collect()
}
