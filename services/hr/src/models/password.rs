//! Password reset payloads

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to start a password reset for an account
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RequestPasswordReset {
    #[validate(custom(function = "crate::validation::validate_email_address"))]
    pub email: String,
}

impl RequestPasswordReset {
    /// Create a new reset request for the given address.
    pub fn new(email: String) -> Self {
        Self { email }
    }
}

/// Request to finish a password reset with the emailed token
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmPasswordReset {
    #[validate(custom(function = "crate::validation::validate_reset_token"))]
    pub token: String,
    #[validate(custom(function = "crate::validation::validate_new_password"))]
    pub new_password: String,
}

impl ConfirmPasswordReset {
    /// Create a new reset confirmation.
    pub fn new(token: String, new_password: String) -> Self {
        Self {
            token,
            new_password,
        }
    }
}
