//! Notification hooks

use super::mock_auth_service::MockAuthService;
use super::{request, send, RecordingEmailProvider, TestApp, TestResponse};
use axum::http::{Method, StatusCode};
use hmac::{Hmac, Mac};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use sha2::Sha256;

const SECRET: &str = "hook-secret";

fn sign(body: &Value) -> String {
    let mut mac = Hmac::<Sha256>::new_from_slice(SECRET.as_bytes()).unwrap();
    mac.update(&serde_json::to_vec(body).unwrap());
    format!("sha256={}", hex::encode(mac.finalize().into_bytes()))
}

async fn post(app: &TestApp, uri: &str, body: &Value, signature: Option<&str>) -> TestResponse {
    let headers: Vec<(&str, &str)> = signature
        .map(|s| vec![("x-webhook-signature", s)])
        .unwrap_or_default();
    send(&app.router, request(Method::POST, uri, &headers, Some(body))).await
}

fn reset_payload(locale: &str) -> Value {
    json!({
        "to": "jeanne@example.com",
        "userName": "Jeanne",
        "url": "https://auth.test/reset-password/tok?callbackURL=%2Ffr%2Fconnexion",
        "locale": locale
    })
}

#[tokio::test]
async fn test_password_reset_in_french() {
    let app = TestApp::spawn().await;

    let response = post(&app, "/api/notifications/password-reset", &reset_payload("fr"), None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["success"], true);

    let sent = app.emails.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to[0].email, "jeanne@example.com");
    assert_eq!(sent[0].subject, "Réinitialisez votre mot de passe - Fiscally");
    assert!(sent[0]
        .text_body
        .as_deref()
        .is_some_and(|t| t.contains("https://auth.test/reset-password/tok")));
}

#[tokio::test]
async fn test_email_verification_defaults_to_english() {
    let app = TestApp::spawn().await;
    let mut payload = reset_payload("en");
    payload.as_object_mut().unwrap().remove("locale");

    let response = post(&app, "/api/notifications/email-verification", &payload, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        app.emails.sent()[0].subject,
        "Verify your email address - Fiscally"
    );
}

#[tokio::test]
async fn test_email_change_verification_goes_to_new_address() {
    let app = TestApp::spawn().await;
    let payload = json!({
        "newEmail": "jeanne@nouveau.fr",
        "userName": "Jeanne",
        "url": "https://auth.test/verify-email?token=t",
        "locale": "fr"
    });

    let response = post(&app, "/api/notifications/email-change-verification", &payload, None).await;

    assert_eq!(response.status, StatusCode::OK);
    let sent = app.emails.sent();
    assert_eq!(sent[0].to[0].email, "jeanne@nouveau.fr");
    assert_eq!(
        sent[0].subject,
        "Vérifiez votre nouvelle adresse e-mail - Fiscally"
    );
}

#[tokio::test]
async fn test_signature_required_when_secret_configured() {
    let app = TestApp::with(
        MockAuthService::new().await,
        RecordingEmailProvider::default(),
        &[("NOTIFICATION_WEBHOOK_SECRET", SECRET)],
    )
    .await;
    let payload = reset_payload("en");

    let missing = post(&app, "/api/notifications/password-reset", &payload, None).await;
    assert_eq!(missing.status, StatusCode::UNAUTHORIZED);

    let forged = post(
        &app,
        "/api/notifications/password-reset",
        &payload,
        Some("sha256=00ff"),
    )
    .await;
    assert_eq!(forged.status, StatusCode::UNAUTHORIZED);
    assert!(app.emails.sent().is_empty());

    let signature = sign(&payload);
    let signed = post(&app, "/api/notifications/password-reset", &payload, Some(&signature)).await;
    assert_eq!(signed.status, StatusCode::OK);
    assert_eq!(app.emails.sent().len(), 1);
}

#[tokio::test]
async fn test_invalid_payload_is_rejected() {
    let app = TestApp::spawn().await;
    let payload = json!({"to": "jeanne@example.com", "userName": "", "url": "not a url"});

    let response = post(&app, "/api/notifications/password-reset", &payload, None).await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(app.emails.sent().is_empty());
}

#[tokio::test]
async fn test_unsupported_locale_is_bad_request() {
    let app = TestApp::spawn().await;

    let response = post(&app, "/api/notifications/password-reset", &reset_payload("de"), None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_provider_failure_is_bad_gateway() {
    let app = TestApp::with(
        MockAuthService::new().await,
        RecordingEmailProvider::failing(),
        &[],
    )
    .await;

    let response = post(&app, "/api/notifications/password-reset", &reset_payload("en"), None).await;

    assert_eq!(response.status, StatusCode::BAD_GATEWAY);
    assert_eq!(response.json()["error"], "email_error");
}
