//! Configuration management for Fiscally Core

use crate::domain::{EmailProviderConfig, SenderConfig, SmtpConfig};
use anyhow::{bail, Context, Result};
use std::env;
use std::str::FromStr;
use std::time::Duration;
use validator::Validate;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server host
    pub http_host: String,
    /// HTTP server port
    pub http_port: u16,
    /// Public base URL of this application, used in email links
    pub app_url: String,
    /// Display name used in email subjects and bodies
    pub app_name: String,
    pub auth_service: AuthServiceConfig,
    pub email: EmailProviderConfig,
    pub notifications: NotificationConfig,
    pub telemetry: TelemetryConfig,
    /// Upper bound for handling one request
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Base URL of the authentication service (e.g., http://localhost:3001)
    pub url: String,
    pub timeout_ms: u64,
    /// What the route gate does when a session lookup fails
    pub lookup_failure: SessionFailurePolicy,
}

impl AuthServiceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Route gate behaviour when the authentication service cannot answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionFailurePolicy {
    /// Treat the request as having no session
    #[default]
    Anonymous,
    /// Fail the request with 502
    Error,
}

impl FromStr for SessionFailurePolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "anonymous" => Ok(Self::Anonymous),
            "error" => Ok(Self::Error),
            other => bail!("Unknown session lookup failure policy: {}", other),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct NotificationConfig {
    /// HMAC-SHA256 secret for notification webhooks; unset disables the check
    pub webhook_secret: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Default)]
pub struct TelemetryConfig {
    pub log_format: LogFormat,
    pub metrics_enabled: bool,
}

const DEFAULT_FROM_EMAIL: &str = "noreply@deff-fondation.com";
const DEFAULT_APP_NAME: &str = "Fiscally";

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let app_name = var("APP_NAME", DEFAULT_APP_NAME);

        Ok(Self {
            http_host: var("HTTP_HOST", "0.0.0.0"),
            http_port: var("HTTP_PORT", "3000")
                .parse()
                .context("Invalid HTTP_PORT")?,
            app_url: var("APP_URL", "http://localhost:3000")
                .trim_end_matches('/')
                .to_string(),
            auth_service: AuthServiceConfig {
                url: lookup("AUTH_SERVICE_URL").context("AUTH_SERVICE_URL is required")?,
                timeout_ms: var("AUTH_SERVICE_TIMEOUT_MS", "5000")
                    .parse()
                    .context("Invalid AUTH_SERVICE_TIMEOUT_MS")?,
                lookup_failure: var("SESSION_LOOKUP_FAILURE", "anonymous")
                    .parse()
                    .context("Invalid SESSION_LOOKUP_FAILURE")?,
            },
            email: email_from_lookup(&lookup, &app_name)?,
            notifications: NotificationConfig {
                webhook_secret: lookup("NOTIFICATION_WEBHOOK_SECRET").filter(|s| !s.is_empty()),
            },
            telemetry: TelemetryConfig {
                log_format: match var("LOG_FORMAT", "pretty").to_ascii_lowercase().as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                },
                metrics_enabled: var("METRICS_ENABLED", "false")
                    .parse()
                    .context("Invalid METRICS_ENABLED")?,
            },
            request_timeout_secs: var("REQUEST_TIMEOUT_SECS", "30")
                .parse()
                .context("Invalid REQUEST_TIMEOUT_SECS")?,
            app_name,
        })
    }

    /// Get HTTP server address
    pub fn http_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }
}

fn email_from_lookup<F>(lookup: &F, app_name: &str) -> Result<EmailProviderConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let from_email = lookup("EMAIL_FROM").unwrap_or_else(|| DEFAULT_FROM_EMAIL.to_string());
    let from_name = Some(lookup("EMAIL_FROM_NAME").unwrap_or_else(|| app_name.to_string()));
    let provider = lookup("EMAIL_PROVIDER").unwrap_or_else(|| "log".to_string());

    let config = match provider.to_ascii_lowercase().as_str() {
        "none" => EmailProviderConfig::None,
        "log" => {
            let sender = SenderConfig {
                from_email,
                from_name,
            };
            sender.validate().context("Invalid EMAIL_FROM")?;
            EmailProviderConfig::Log(sender)
        }
        "smtp" => {
            let smtp = SmtpConfig {
                host: lookup("SMTP_HOST").context("SMTP_HOST is required for EMAIL_PROVIDER=smtp")?,
                port: lookup("SMTP_PORT")
                    .unwrap_or_else(|| "587".to_string())
                    .parse()
                    .context("Invalid SMTP_PORT")?,
                username: lookup("SMTP_USERNAME"),
                password: lookup("SMTP_PASSWORD"),
                use_tls: lookup("SMTP_USE_TLS")
                    .unwrap_or_else(|| "true".to_string())
                    .parse()
                    .context("Invalid SMTP_USE_TLS")?,
                from_email,
                from_name,
            };
            smtp.validate().context("Invalid SMTP configuration")?;
            EmailProviderConfig::Smtp(smtp)
        }
        other => bail!("Unknown EMAIL_PROVIDER: {}", other),
    };

    Ok(config)
}
