//! Field validation rules shared by the Crewclock services
//!
//! Each rule is a plain predicate over a single field value: it either
//! passes or fails with a human-readable message. Rules are independent;
//! a payload is accepted only when every registered rule passes. The
//! functions are usable both directly and as `#[validate(custom)]` rules
//! on derive-validated request payloads.

use regex::Regex;
use std::sync::OnceLock;
use validator::{Validate, ValidationError};

use crate::error::ValidationReport;

/// Special characters a password may satisfy its symbol requirement with.
pub const PASSWORD_SPECIAL_CHARS: &str = "@$!%*?&-_+=.,:;#^~";

fn violation(code: &'static str, message: String) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

/// Require a value that is non-empty after trimming.
pub fn non_blank(label: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(violation("non_blank", format!("{label} is required")));
    }

    Ok(())
}

/// Require a character count within `[min, max]` inclusive.
///
/// The failure message names the bound that was breached.
pub fn length_within(
    label: &str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    let count = value.chars().count();

    if count < min {
        return Err(violation(
            "length",
            format!("{label} must be at least {min} characters long"),
        ));
    }

    if count > max {
        return Err(violation(
            "length",
            format!("{label} must be at most {max} characters long"),
        ));
    }

    Ok(())
}

/// Require a strictly positive number.
pub fn positive(label: &str, value: i64) -> Result<(), ValidationError> {
    if value <= 0 {
        return Err(violation(
            "positive",
            format!("{label} must be a positive number"),
        ));
    }

    Ok(())
}

/// Require a value matching a standard email grammar.
pub fn email_format(value: &str) -> Result<(), ValidationError> {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Failed to compile email regex")
    });

    if !regex.is_match(value) {
        return Err(violation("email", "Invalid email format".to_string()));
    }

    Ok(())
}

/// Require at least one lowercase letter, one uppercase letter, one digit,
/// and one character from [`PASSWORD_SPECIAL_CHARS`].
///
/// A single pass over the string; the categories are independent, so the
/// order in which they appear does not matter.
pub fn password_composition(value: &str) -> Result<(), ValidationError> {
    let mut has_lower = false;
    let mut has_upper = false;
    let mut has_digit = false;
    let mut has_special = false;

    for c in value.chars() {
        if c.is_ascii_lowercase() {
            has_lower = true;
        } else if c.is_ascii_uppercase() {
            has_upper = true;
        } else if c.is_ascii_digit() {
            has_digit = true;
        } else if PASSWORD_SPECIAL_CHARS.contains(c) {
            has_special = true;
        }
    }

    if !(has_lower && has_upper && has_digit && has_special) {
        return Err(violation(
            "password_composition",
            format!(
                "Password must contain at least one lowercase letter, one uppercase letter, \
                 one digit, and one special character ({PASSWORD_SPECIAL_CHARS})"
            ),
        ));
    }

    Ok(())
}

/// Validate a payload against its registered rules and collect every
/// violated rule into a [`ValidationReport`] of (field, message) pairs.
pub fn check<T: Validate>(payload: &T) -> Result<(), ValidationReport> {
    payload
        .validate()
        .map_err(|errors| ValidationReport::from(&errors))
}
