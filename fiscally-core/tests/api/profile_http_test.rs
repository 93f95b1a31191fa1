//! PUT /api/user/profile

use super::mock_auth_service::SESSION_COOKIE;
use super::{request, send, TestApp};
use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

async fn update(app: &TestApp, cookie: &str, body: Value) -> super::TestResponse {
    send(
        &app.router,
        request(Method::PUT, "/api/user/profile", &[("cookie", cookie)], Some(&body)),
    )
    .await
}

#[tokio::test]
async fn test_requires_session() {
    let app = TestApp::spawn().await;

    let response = update(&app, "other=1", json!({"name": "Jeanne", "email": "jeanne@example.com"})).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_rejects_short_name() {
    let app = TestApp::spawn().await;
    app.auth.mock_signed_in().await;
    app.auth.expect_update_user(" J ", 0).await;

    let response = update(&app, SESSION_COOKIE, json!({"name": " J ", "email": "jeanne@example.com"})).await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.json()["message"], "Name must be at least 2 characters");
}

#[tokio::test]
async fn test_rejects_invalid_email() {
    let app = TestApp::spawn().await;
    app.auth.mock_signed_in().await;

    let response = update(&app, SESSION_COOKIE, json!({"name": "Jeanne", "email": "nope"})).await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_name_change_only() {
    let app = TestApp::spawn().await;
    app.auth.mock_signed_in().await;
    app.auth.expect_update_user("Jeanne Martin", 1).await;
    app.auth
        .expect_change_email("jeanne@example.com", "https://app.test/en/dashboard", 0)
        .await;

    let response = update(
        &app,
        SESSION_COOKIE,
        json!({"name": "  Jeanne Martin ", "email": "jeanne@example.com"}),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.json(),
        &json!({
            "success": true,
            "name": "Jeanne Martin",
            "email": "jeanne@example.com",
            "emailChangePending": false
        })
    );
    assert!(app.emails.sent().is_empty());
}

#[tokio::test]
async fn test_email_change_in_french() {
    let app = TestApp::spawn().await;
    app.auth.mock_signed_in().await;
    app.auth.expect_update_user("Jeanne Dupont", 0).await;
    app.auth
        .expect_change_email("jeanne@nouveau.fr", "https://app.test/fr/tableau-de-bord", 1)
        .await;

    let cookie = format!("{}; NEXT_LOCALE=fr", SESSION_COOKIE);
    let response = update(
        &app,
        &cookie,
        json!({"name": "Jeanne Dupont", "email": "jeanne@nouveau.fr"}),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["success"], true);
    assert_eq!(response.json()["email"], "jeanne@example.com");
    assert_eq!(response.json()["emailChangePending"], true);

    let sent = app.emails.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to[0].email, "jeanne@example.com");
    assert_eq!(sent[0].subject, "Votre adresse e-mail a été modifiée - Fiscally");
    assert!(sent[0].html_body.contains("jeanne@nouveau.fr"));
    assert!(sent[0].html_body.contains("https://app.test/fr/contactez-nous"));
}

#[tokio::test]
async fn test_email_change_rejected_by_auth_service() {
    let app = TestApp::spawn().await;
    app.auth.mock_signed_in().await;
    app.auth.reject_change_email(400, "Email already in use").await;

    let response = update(
        &app,
        SESSION_COOKIE,
        json!({"name": "Jeanne Dupont", "email": "taken@example.com"}),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["message"], "Email already in use");
    assert!(app.emails.sent().is_empty());
}

#[tokio::test]
async fn test_email_change_locale_from_referring_page() {
    let app = TestApp::spawn().await;
    app.auth.mock_signed_in().await;
    app.auth
        .expect_change_email("jeanne@nouveau.fr", "https://app.test/fr/tableau-de-bord", 1)
        .await;

    let body = json!({"name": "Jeanne Dupont", "email": "jeanne@nouveau.fr"});
    let response = send(
        &app.router,
        request(
            Method::PUT,
            "/api/user/profile",
            &[
                ("cookie", SESSION_COOKIE),
                ("referer", "https://app.test/fr/tableau-de-bord"),
            ],
            Some(&body),
        ),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(app.emails.sent()[0].subject, "Votre adresse e-mail a été modifiée - Fiscally");
}
