//! Individual field rules and their user-facing messages.
//!
//! DESIGN
//! ======
//! Each rule returns `Err(message)` with the first failing check, in the order
//! required -> length -> pattern. Values are checked exactly as typed; an
//! all-whitespace value is not treated as empty. Lengths count characters,
//! not bytes.

#[cfg(test)]
#[path = "rules_test.rs"]
mod rules_test;

use std::ops::RangeInclusive;
use std::sync::LazyLock;

use regex::Regex;

pub const PASSWORD_LENGTH: RangeInclusive<usize> = 6..=50;
pub const NAME_LENGTH: RangeInclusive<usize> = 2..=25;
pub const MIN_PHOTOS: usize = 4;

pub const EMAIL_REQUIRED: &str = "Email is required!";
pub const EMAIL_INVALID: &str = "Invalid email address.";
pub const PASSWORD_REQUIRED: &str = "Password is required!";
pub const PASSWORD_LENGTH_INVALID: &str = "Password must be between 6 and 50 characters.";
pub const PASSWORD_DIGIT_MISSING: &str = "Password must contain at least 1 number.";
pub const FIRST_NAME_REQUIRED: &str = "First Name is required!";
pub const FIRST_NAME_LENGTH_INVALID: &str = "First Name must be between 2 and 25 characters.";
pub const LAST_NAME_REQUIRED: &str = "Last Name is required!";
pub const LAST_NAME_LENGTH_INVALID: &str = "Last Name must be between 2 and 25 characters.";
pub const PHOTOS_TOO_FEW: &str = "You must upload at least 4 photos.";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

static DIGIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]").expect("digit pattern is valid"));

/// `local@domain.tld` shape with no whitespace and a single `@`.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[must_use]
pub fn has_digit(password: &str) -> bool {
    DIGIT_RE.is_match(password)
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// # Errors
///
/// Returns the message to show under the email input.
pub fn check_email(email: &str) -> Result<(), &'static str> {
    if email.is_empty() {
        Err(EMAIL_REQUIRED)
    } else if !is_valid_email(email) {
        Err(EMAIL_INVALID)
    } else {
        Ok(())
    }
}

/// # Errors
///
/// Returns the message to show under the password input.
pub fn check_password(password: &str) -> Result<(), &'static str> {
    if password.is_empty() {
        Err(PASSWORD_REQUIRED)
    } else if !PASSWORD_LENGTH.contains(&char_len(password)) {
        Err(PASSWORD_LENGTH_INVALID)
    } else if !has_digit(password) {
        Err(PASSWORD_DIGIT_MISSING)
    } else {
        Ok(())
    }
}

/// # Errors
///
/// Returns the message to show under the first-name input.
pub fn check_first_name(name: &str) -> Result<(), &'static str> {
    check_name(name, FIRST_NAME_REQUIRED, FIRST_NAME_LENGTH_INVALID)
}

/// # Errors
///
/// Returns the message to show under the last-name input.
pub fn check_last_name(name: &str) -> Result<(), &'static str> {
    check_name(name, LAST_NAME_REQUIRED, LAST_NAME_LENGTH_INVALID)
}

fn check_name(name: &str, required: &'static str, length: &'static str) -> Result<(), &'static str> {
    if name.is_empty() {
        Err(required)
    } else if !NAME_LENGTH.contains(&char_len(name)) {
        Err(length)
    } else {
        Ok(())
    }
}

/// # Errors
///
/// Returns the message to show under the photo picker.
pub fn check_photo_count(count: usize) -> Result<(), &'static str> {
    if count < MIN_PHOTOS { Err(PHOTOS_TOO_FEW) } else { Ok(()) }
}
