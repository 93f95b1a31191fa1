//! Development provider that writes messages to the log instead of a mailbox

use super::provider::{EmailProvider, EmailProviderError};
use crate::domain::{EmailMessage, EmailSendResult, SenderConfig};
use async_trait::async_trait;

pub struct LogEmailProvider {
    sender: SenderConfig,
}

impl LogEmailProvider {
    pub fn new(sender: SenderConfig) -> Self {
        Self { sender }
    }
}

#[async_trait]
impl EmailProvider for LogEmailProvider {
    async fn send(&self, message: &EmailMessage) -> Result<EmailSendResult, EmailProviderError> {
        let recipients: Vec<&str> = message.to.iter().map(|a| a.email.as_str()).collect();
        let message_id = format!("log-{}", uuid::Uuid::new_v4());

        tracing::info!(
            message_id = %message_id,
            from = %self.sender.from_email,
            to = ?recipients,
            subject = %message.subject,
            "Email captured by log provider"
        );
        if let Some(text) = &message.text_body {
            tracing::debug!(message_id = %message_id, body = %text, "Email text body");
        }

        Ok(EmailSendResult::success(Some(message_id)))
    }

    async fn test_connection(&self) -> Result<(), EmailProviderError> {
        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        "log"
    }
}
