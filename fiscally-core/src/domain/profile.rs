//! Profile management domain types

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Input for updating the signed-in user's profile
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProfileInput {
    #[validate(custom(function = "validate_display_name"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
}

fn validate_display_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().chars().count() < 2 {
        let mut err = ValidationError::new("length");
        err.message = Some("Name must be at least 2 characters".into());
        return Err(err);
    }
    Ok(())
}

impl UpdateProfileInput {
    /// Name with surrounding whitespace removed
    pub fn trimmed_name(&self) -> &str {
        self.name.trim()
    }

    /// Email with surrounding whitespace removed
    pub fn trimmed_email(&self) -> &str {
        self.email.trim()
    }
}

/// Profile returned after an update
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub success: bool,
    pub name: String,
    /// Current (confirmed) email; a requested change only applies once the
    /// new address is verified.
    pub email: String,
    pub email_change_pending: bool,
}
