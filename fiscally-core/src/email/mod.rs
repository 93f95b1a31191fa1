//! Transactional email: providers and localized templates

pub mod log;
pub mod provider;
pub mod smtp;
pub mod templates;

pub use log::LogEmailProvider;
pub use provider::{DisabledEmailProvider, EmailProvider, EmailProviderError};
pub use smtp::SmtpEmailProvider;
pub use templates::{EmailTemplate, RenderedEmail, TemplateEngine};

use crate::domain::EmailProviderConfig;
use std::sync::Arc;

/// Build the provider selected by configuration
pub fn provider_from_config(
    config: &EmailProviderConfig,
) -> Result<Arc<dyn EmailProvider>, EmailProviderError> {
    Ok(match config {
        EmailProviderConfig::None => Arc::new(DisabledEmailProvider),
        EmailProviderConfig::Log(sender) => Arc::new(LogEmailProvider::new(sender.clone())),
        EmailProviderConfig::Smtp(smtp) => Arc::new(SmtpEmailProvider::from_config(smtp)?),
    })
}
