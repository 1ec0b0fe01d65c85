//! Input validation rules for HR payloads
//!
//! Each function runs the shared rules in order and reports the first
//! violation, so a payload never collects two messages for one field.

use common::validation;
use validator::ValidationError;

/// Validate a team name
pub fn validate_team_name(value: &str) -> Result<(), ValidationError> {
    validation::non_blank("Team name", value)?;
    validation::length_within("Team name", value, 2, 100)
}

/// Validate an email address
pub fn validate_email_address(value: &str) -> Result<(), ValidationError> {
    validation::non_blank("Email", value)?;
    validation::length_within("Email", value, 1, 254)?;
    validation::email_format(value)
}

/// Validate a password reset token
pub fn validate_reset_token(value: &str) -> Result<(), ValidationError> {
    validation::non_blank("Reset token", value)
}

/// Validate a new password
pub fn validate_new_password(value: &str) -> Result<(), ValidationError> {
    validation::length_within("Password", value, 12, 255)?;
    validation::password_composition(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(result: Result<(), ValidationError>) -> String {
        result
            .expect_err("rule must fail")
            .message
            .expect("rules always carry a message")
            .into_owned()
    }

    #[test]
    fn team_name_bounds_are_inclusive() {
        assert!(validate_team_name("ab").is_ok());
        assert!(validate_team_name(&"x".repeat(100)).is_ok());
    }

    #[test]
    fn an_oversized_email_is_capped() {
        let address = format!("{}@example.com", "x".repeat(250));
        assert_eq!(
            message(validate_email_address(&address)),
            "Email must be at most 254 characters long"
        );
    }

    #[test]
    fn password_bounds_are_inclusive() {
        assert!(validate_new_password("Abcdefghij1!").is_ok());

        let longest = format!("Aa1!{}", "x".repeat(251));
        assert_eq!(longest.chars().count(), 255);
        assert!(validate_new_password(&longest).is_ok());

        let too_long = format!("Aa1!{}", "x".repeat(252));
        assert_eq!(
            message(validate_new_password(&too_long)),
            "Password must be at most 255 characters long"
        );
    }

    #[test]
    fn password_rules_run_length_before_composition() {
        // Too short and missing every category: only the length rule reports.
        assert_eq!(
            message(validate_new_password("abc")),
            "Password must be at least 12 characters long"
        );
    }
}
