//! Email transport abstraction

use crate::domain::{EmailMessage, EmailSendResult};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmailProviderError {
    #[error("Email provider not configured")]
    NotConfigured,

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Send failed: {0}")]
    SendFailed(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl EmailProviderError {
    /// Classify a transport error message from the mail server
    pub(crate) fn from_transport_message(message: String) -> Self {
        if message.contains("authentication") || message.contains("AUTH") {
            Self::AuthenticationFailed(message)
        } else if message.contains("connection") || message.contains("timeout") {
            Self::ConnectionError(message)
        } else {
            Self::SendFailed(message)
        }
    }
}

/// Something that can deliver a rendered [`EmailMessage`]
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailProvider: Send + Sync {
    async fn send(&self, message: &EmailMessage) -> Result<EmailSendResult, EmailProviderError>;

    /// Probe the transport without sending anything
    async fn test_connection(&self) -> Result<(), EmailProviderError>;

    fn provider_name(&self) -> &'static str;
}

/// Provider used when email is switched off; every send fails.
pub struct DisabledEmailProvider;

#[async_trait]
impl EmailProvider for DisabledEmailProvider {
    async fn send(&self, _message: &EmailMessage) -> Result<EmailSendResult, EmailProviderError> {
        Err(EmailProviderError::NotConfigured)
    }

    async fn test_connection(&self) -> Result<(), EmailProviderError> {
        Err(EmailProviderError::NotConfigured)
    }

    fn provider_name(&self) -> &'static str {
        "none"
    }
}
