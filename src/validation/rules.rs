//! Per-field validation predicates
//!
//! Every predicate is a total function over the raw field text. Lengths are
//! counted in characters after trimming surrounding whitespace.

use super::specialization::Specialization;

const LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";

/// Symbols accepted by the password rule
pub const SYMBOLS: &str = "!@#$%^&*()-_=+[]{}|;:'\\.<>?/`~";

/// Minimum trimmed username length
pub const MIN_USERNAME_LEN: usize = 6;

/// Minimum trimmed password length
pub const MIN_PASSWORD_LEN: usize = 8;

/// Minimum trimmed description length (inclusive)
pub const MIN_DESCRIPTION_LEN: usize = 100;

/// Maximum trimmed description length (exclusive)
pub const MAX_DESCRIPTION_LEN: usize = 1000;

fn trimmed_len(value: &str) -> usize {
    value.trim().chars().count()
}

/// A letter a-z once lower-cased, shared by the username and password rules
fn is_letter(c: char) -> bool {
    c.to_lowercase().all(|lower| LETTERS.contains(lower))
}

/// True when the value is empty or whitespace only
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn is_full_name_valid(value: &str) -> bool {
    !is_blank(value)
}

/// Letters a-z only (any case), at least [`MIN_USERNAME_LEN`] long.
///
/// The character test is vacuously true for an empty value, the length test
/// is what rejects it.
pub fn is_username_valid(value: &str) -> bool {
    value.chars().all(is_letter) && trimmed_len(value) >= MIN_USERNAME_LEN
}

/// At least [`MIN_PASSWORD_LEN`] long with a letter, a digit and a symbol
/// from [`SYMBOLS`].
pub fn is_password_valid(value: &str) -> bool {
    trimmed_len(value) >= MIN_PASSWORD_LEN
        && value.chars().any(is_letter)
        && value.chars().any(|c| DIGITS.contains(c))
        && value.chars().any(|c| SYMBOLS.contains(c))
}

pub fn is_description_valid(value: &str) -> bool {
    let len = trimmed_len(value);
    (MIN_DESCRIPTION_LEN..MAX_DESCRIPTION_LEN).contains(&len)
}

/// Only the three named options count; the placeholder does not.
pub fn is_specialization_valid(value: &str) -> bool {
    Specialization::from_label(value).is_some()
}

/// Parse years-of-experience text into a finite number
///
/// Returns `None` for blank text, non-numeric text, `NaN` and infinities.
pub fn parse_years(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|years| years.is_finite())
}

pub fn is_years_valid(value: &str) -> bool {
    parse_years(value).is_some_and(|years| years > 0.0)
}
