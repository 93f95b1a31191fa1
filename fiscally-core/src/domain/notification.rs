//! Payloads of the notification hooks called by the authentication service

use crate::locale::Locale;
use serde::Deserialize;
use validator::Validate;

/// A link email addressed to one user (password reset, address verification)
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LinkNotification {
    #[validate(email)]
    pub to: String,
    #[validate(length(min = 1, max = 255))]
    pub user_name: String,
    #[validate(url)]
    pub url: String,
    #[serde(default)]
    pub locale: Locale,
}

/// Verification of a requested new address, sent to that new address
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmailChangeVerificationNotification {
    #[validate(email)]
    pub new_email: String,
    #[validate(length(min = 1, max = 255))]
    pub user_name: String,
    #[validate(url)]
    pub url: String,
    #[serde(default)]
    pub locale: Locale,
}
