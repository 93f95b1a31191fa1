//! Notification hooks called by the authentication service
//!
//! The service decides *when* a user needs a link (password reset, address
//! verification); these endpoints render and deliver the localized email.

use crate::config::NotificationConfig;
use crate::domain::{EmailChangeVerificationNotification, EmailSendResult, LinkNotification};
use crate::error::{AppError, Result};
use crate::state::AppState;
use axum::{body::Bytes, extract::State, http::HeaderMap, Json};
use hmac::{Hmac, Mac};
use serde::de::DeserializeOwned;
use sha2::Sha256;
use validator::Validate;

type HmacSha256 = Hmac<Sha256>;

pub const SIGNATURE_HEADER: &str = "x-webhook-signature";

pub async fn password_reset(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<EmailSendResult>> {
    let input: LinkNotification = authenticated_payload(&state.config.notifications, &headers, &body)?;
    let result = state.notifications.send_forgot_password_email(&input).await?;
    Ok(Json(result))
}

pub async fn email_verification(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<EmailSendResult>> {
    let input: LinkNotification = authenticated_payload(&state.config.notifications, &headers, &body)?;
    let result = state.notifications.send_verification_email(&input).await?;
    Ok(Json(result))
}

pub async fn email_change_verification(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<EmailSendResult>> {
    let input: EmailChangeVerificationNotification =
        authenticated_payload(&state.config.notifications, &headers, &body)?;
    let result = state
        .notifications
        .send_email_change_verification(&input)
        .await?;
    Ok(Json(result))
}

/// Check the signature (when a secret is configured), then parse and validate.
fn authenticated_payload<T>(config: &NotificationConfig, headers: &HeaderMap, body: &[u8]) -> Result<T>
where
    T: DeserializeOwned + Validate,
{
    if let Some(secret) = &config.webhook_secret {
        let signature = headers
            .get(SIGNATURE_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::Unauthorized("Missing webhook signature".to_string()))?;
        if !verify_signature(secret, body, signature) {
            tracing::warn!("Rejected notification with invalid signature");
            return Err(AppError::Unauthorized("Invalid webhook signature".to_string()));
        }
    }

    let payload: T = serde_json::from_slice(body)
        .map_err(|e| AppError::BadRequest(format!("Invalid payload: {}", e)))?;
    payload.validate()?;
    Ok(payload)
}

/// `signature` is `sha256=<hex>` over the raw body
fn verify_signature(secret: &str, body: &[u8], signature: &str) -> bool {
    let Some(expected) = signature
        .strip_prefix("sha256=")
        .and_then(|hex_sig| hex::decode(hex_sig).ok())
    else {
        return false;
    };
    let Ok(mut mac) = HmacSha256::new_from_slice(secret.as_bytes()) else {
        return false;
    };
    mac.update(body);
    mac.verify_slice(&expected).is_ok()
}

#[cfg(test)]
pub(crate) fn sign(secret: &str, body: &[u8]) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).unwrap();
    mac.update(body);
    format!("sha256={}", hex::encode(mac.finalize().into_bytes()))
}
