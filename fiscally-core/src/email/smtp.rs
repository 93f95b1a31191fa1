//! SMTP delivery through lettre

use super::provider::{EmailProvider, EmailProviderError};
use crate::domain::{EmailAddress, EmailMessage, EmailSendResult, SmtpConfig};
use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox, MultiPart, SinglePart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

pub struct SmtpEmailProvider {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

fn mailbox(email: &str, name: Option<&str>) -> Result<Mailbox, String> {
    let raw = match name {
        Some(name) => format!("{} <{}>", name, email),
        None => email.to_string(),
    };
    raw.parse::<Mailbox>().map_err(|e| e.to_string())
}

impl SmtpEmailProvider {
    pub fn from_config(config: &SmtpConfig) -> Result<Self, EmailProviderError> {
        let mut builder = if config.use_tls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
                .map_err(|e| EmailProviderError::InvalidConfiguration(e.to_string()))?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host)
        };
        builder = builder.port(config.port);

        if let (Some(username), Some(password)) = (&config.username, &config.password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        let from = mailbox(&config.from_email, config.from_name.as_deref()).map_err(|e| {
            EmailProviderError::InvalidConfiguration(format!("Invalid from address: {}", e))
        })?;

        Ok(Self {
            transport: builder.build(),
            from,
        })
    }

    fn build_message(&self, message: &EmailMessage) -> Result<Message, EmailProviderError> {
        if message.to.is_empty() {
            return Err(EmailProviderError::InvalidConfiguration(
                "No recipients specified".to_string(),
            ));
        }

        let mut builder = Message::builder()
            .from(self.from.clone())
            .subject(&message.subject);
        for EmailAddress { email, name } in &message.to {
            let to = mailbox(email, name.as_deref()).map_err(|e| {
                EmailProviderError::InvalidConfiguration(format!("Invalid to address: {}", e))
            })?;
            builder = builder.to(to);
        }

        let built = match &message.text_body {
            Some(text_body) => builder.multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(text_body.clone()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(message.html_body.clone()),
                    ),
            ),
            None => builder
                .header(ContentType::TEXT_HTML)
                .body(message.html_body.clone()),
        };

        built.map_err(|e| EmailProviderError::SendFailed(e.to_string()))
    }
}

#[async_trait]
impl EmailProvider for SmtpEmailProvider {
    async fn send(&self, message: &EmailMessage) -> Result<EmailSendResult, EmailProviderError> {
        let email = self.build_message(message)?;

        let response = self
            .transport
            .send(email)
            .await
            .map_err(|e| EmailProviderError::from_transport_message(e.to_string()))?;

        let message_id = response.message().next().map(|s| s.to_string());
        Ok(EmailSendResult::success(message_id))
    }

    async fn test_connection(&self) -> Result<(), EmailProviderError> {
        match self.transport.test_connection().await {
            Ok(true) => Ok(()),
            Ok(false) => Err(EmailProviderError::ConnectionError(
                "SMTP server did not accept the connection".to_string(),
            )),
            Err(e) => Err(EmailProviderError::from_transport_message(e.to_string())),
        }
    }

    fn provider_name(&self) -> &'static str {
        "smtp"
    }
}
