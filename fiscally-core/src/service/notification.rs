//! Localized transactional emails

use crate::domain::{
    EmailAddress, EmailChangeVerificationNotification, EmailMessage, EmailSendResult,
    LinkNotification,
};
use crate::email::{EmailProvider, EmailTemplate, TemplateEngine};
use crate::error::Result;
use crate::locale::{Locale, LocalizedRoute};
use chrono::Datelike;
use std::sync::Arc;

/// Notice for the previous address after an email change request
#[derive(Debug, Clone)]
pub struct EmailChangeNotice<'a> {
    pub old_email: &'a str,
    pub new_email: &'a str,
    pub user_name: &'a str,
    pub locale: Locale,
}

pub struct NotificationService {
    provider: Arc<dyn EmailProvider>,
    app_name: String,
    app_url: String,
}

impl NotificationService {
    pub fn new(
        provider: Arc<dyn EmailProvider>,
        app_name: impl Into<String>,
        app_url: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            app_name: app_name.into(),
            app_url: app_url.into(),
        }
    }

    pub async fn send_forgot_password_email(
        &self,
        input: &LinkNotification,
    ) -> Result<EmailSendResult> {
        let engine = self.engine(&input.user_name, &input.url);
        self.deliver(&engine, EmailTemplate::ForgotPassword, input.locale, &input.to)
            .await
    }

    pub async fn send_verification_email(
        &self,
        input: &LinkNotification,
    ) -> Result<EmailSendResult> {
        let engine = self.engine(&input.user_name, &input.url);
        self.deliver(&engine, EmailTemplate::EmailVerification, input.locale, &input.to)
            .await
    }

    /// Sent to the requested new address
    pub async fn send_email_change_verification(
        &self,
        input: &EmailChangeVerificationNotification,
    ) -> Result<EmailSendResult> {
        let mut engine = self.engine(&input.user_name, &input.url);
        engine.set("new_email", input.new_email.as_str());
        self.deliver(
            &engine,
            EmailTemplate::EmailChangeVerification,
            input.locale,
            &input.new_email,
        )
        .await
    }

    /// Sent to the old address; links to the localized contact page
    pub async fn send_email_change_notification(
        &self,
        notice: EmailChangeNotice<'_>,
    ) -> Result<EmailSendResult> {
        let contact_url = format!(
            "{}{}",
            self.app_url,
            LocalizedRoute::Contact.href(notice.locale)
        );
        let mut engine = self.engine(notice.user_name, &contact_url);
        engine
            .set("old_email", notice.old_email)
            .set("new_email", notice.new_email);
        self.deliver(
            &engine,
            EmailTemplate::EmailChangeNotification,
            notice.locale,
            notice.old_email,
        )
        .await
    }

    fn engine(&self, user_name: &str, action_url: &str) -> TemplateEngine {
        let mut engine = TemplateEngine::new();
        engine.set_all([
            ("app_name", self.app_name.clone()),
            ("year", chrono::Utc::now().year().to_string()),
            ("user_name", user_name.to_string()),
            (crate::email::templates::ACTION_URL, action_url.to_string()),
        ]);
        engine
    }

    async fn deliver(
        &self,
        engine: &TemplateEngine,
        template: EmailTemplate,
        locale: Locale,
        to: &str,
    ) -> Result<EmailSendResult> {
        let rendered = engine.render_template(template, locale);
        let message = EmailMessage::new(EmailAddress::new(to), rendered.subject, rendered.html_body)
            .with_text_body(rendered.text_body);

        let outcome = self.provider.send(&message).await;
        let status = if outcome.is_ok() { "sent" } else { "failed" };
        metrics::counter!(
            "fiscally_emails_sent_total",
            "template" => template.name(),
            "locale" => locale.as_str(),
            "status" => status
        )
        .increment(1);

        match outcome {
            Ok(result) => {
                tracing::info!(
                    template = template.name(),
                    locale = %locale,
                    provider = self.provider.provider_name(),
                    message_id = ?result.message_id,
                    "Email sent"
                );
                Ok(result)
            }
            Err(e) => {
                tracing::warn!(
                    template = template.name(),
                    locale = %locale,
                    provider = self.provider.provider_name(),
                    error = %e,
                    "Email delivery failed"
                );
                Err(e.into())
            }
        }
    }
}
