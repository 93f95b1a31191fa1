//! Email provider domain types

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Email provider configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EmailProviderConfig {
    /// No email provider configured; sending fails
    #[default]
    None,

    /// Log rendered messages instead of delivering them (development)
    Log(SenderConfig),

    /// SMTP email provider
    Smtp(SmtpConfig),
}

impl EmailProviderConfig {
    /// Check if email is configured (not None)
    pub fn is_configured(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Get the provider type as a string
    pub fn provider_type(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Log(_) => "log",
            Self::Smtp(_) => "smtp",
        }
    }
}

/// Sender identity used by providers without transport settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
pub struct SenderConfig {
    #[validate(email)]
    pub from_email: String,
    pub from_name: Option<String>,
}

/// SMTP configuration for email sending
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
pub struct SmtpConfig {
    /// SMTP server host
    #[validate(length(min = 1, max = 255))]
    pub host: String,

    /// SMTP server port (typically 587 for TLS, 465 for SSL, 25 for unencrypted)
    pub port: u16,

    /// Username for authentication (optional)
    pub username: Option<String>,

    /// Password for authentication
    pub password: Option<String>,

    /// Use STARTTLS
    #[serde(default = "default_true")]
    pub use_tls: bool,

    /// From email address
    #[validate(email)]
    pub from_email: String,

    /// From name (optional)
    pub from_name: Option<String>,
}

fn default_true() -> bool {
    true
}

/// Email address with optional display name
#[derive(Debug, Clone, PartialEq)]
pub struct EmailAddress {
    pub email: String,
    pub name: Option<String>,
}

impl EmailAddress {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
        }
    }

    pub fn with_name(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: Some(name.into()),
        }
    }
}

/// Email message to be sent
#[derive(Debug, Clone)]
pub struct EmailMessage {
    pub to: Vec<EmailAddress>,
    pub subject: String,
    pub html_body: String,
    pub text_body: Option<String>,
}

impl EmailMessage {
    pub fn new(to: EmailAddress, subject: impl Into<String>, html_body: impl Into<String>) -> Self {
        Self {
            to: vec![to],
            subject: subject.into(),
            html_body: html_body.into(),
            text_body: None,
        }
    }

    pub fn with_text_body(mut self, text_body: impl Into<String>) -> Self {
        self.text_body = Some(text_body.into());
        self
    }
}

/// Result of sending an email
#[derive(Debug, Clone, Serialize)]
pub struct EmailSendResult {
    pub success: bool,
    pub message_id: Option<String>,
}

impl EmailSendResult {
    pub fn success(message_id: Option<String>) -> Self {
        Self {
            success: true,
            message_id,
        }
    }
}
