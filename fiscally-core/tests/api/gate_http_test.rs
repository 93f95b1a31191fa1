//! Route gate and locale resolution through the full router

use super::mock_auth_service::{MockAuthService, SESSION_COOKIE};
use super::{get, RecordingEmailProvider, TestApp};
use axum::http::StatusCode;
use pretty_assertions::assert_eq;

async fn signed_in_app() -> TestApp {
    let app = TestApp::spawn().await;
    app.auth.mock_signed_in().await;
    app
}

fn session() -> [(&'static str, &'static str); 1] {
    [("cookie", SESSION_COOKIE)]
}

#[tokio::test]
async fn test_unprefixed_dashboard_without_session_goes_to_english_login() {
    let app = TestApp::spawn().await;

    let response = get(&app.router, "/dashboard", &[]).await;

    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.location(), Some("/en/login"));
}

#[tokio::test]
async fn test_french_dashboard_without_session_goes_to_french_login() {
    let app = TestApp::spawn().await;

    let response = get(&app.router, "/fr/tableau-de-bord", &[]).await;

    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.location(), Some("/fr/connexion"));
}

#[tokio::test]
async fn test_french_login_with_session_goes_to_french_dashboard() {
    let app = signed_in_app().await;

    let response = get(&app.router, "/fr/connexion", &session()).await;

    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.location(), Some("/fr/tableau-de-bord"));
}

#[tokio::test]
async fn test_english_forgot_password_with_session_goes_to_english_dashboard() {
    let app = signed_in_app().await;

    let response = get(&app.router, "/en/forgot-password", &session()).await;

    assert_eq!(response.location(), Some("/en/dashboard"));
}

#[tokio::test]
async fn test_signed_in_dashboard_is_served() {
    let app = signed_in_app().await;

    let response = get(&app.router, "/en/dashboard", &session()).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.header("content-language"), Some("en"));
    assert!(response
        .header("set-cookie")
        .is_some_and(|c| c.starts_with("NEXT_LOCALE=en")));
    assert_eq!(response.header("x-frame-options"), Some("DENY"));
    assert!(response.header("x-request-id").is_some());

    let body = response.json();
    assert_eq!(body["locale"], "en");
    assert_eq!(body["route"], "/dashboard");
    assert_eq!(body["authenticated"], true);
    assert_eq!(body["user"]["email"], "jeanne@example.com");
}

#[tokio::test]
async fn test_anonymous_login_page_is_served() {
    let app = TestApp::spawn().await;

    let response = get(&app.router, "/fr/connexion", &[("cookie", "NEXT_LOCALE=fr")]).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.header("set-cookie").is_none());
    assert_eq!(response.json()["route"], "/login");
    assert_eq!(response.json()["authenticated"], false);
}

#[tokio::test]
async fn test_auth_api_never_consults_the_session_service() {
    let app = TestApp::spawn().await;
    app.auth.expect_no_session_lookup().await;

    let response = get(&app.router, "/api/auth/callback", &[]).await;

    assert_ne!(response.status, StatusCode::TEMPORARY_REDIRECT);
    assert!(response.header("content-language").is_none());
}

#[tokio::test]
async fn test_assets_are_not_gated() {
    let app = TestApp::spawn().await;
    app.auth.expect_no_session_lookup().await;

    let response = get(&app.router, "/favicon.ico", &[]).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_root_redirects_by_accept_language() {
    let app = TestApp::spawn().await;

    let response = get(&app.router, "/", &[("accept-language", "fr-FR,fr;q=0.9,en;q=0.8")]).await;

    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.location(), Some("/fr"));
}

#[tokio::test]
async fn test_other_locale_spelling_is_relocalized() {
    let app = TestApp::spawn().await;

    let response = get(&app.router, "/fr/register?ref=mail", &[]).await;

    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.location(), Some("/fr/inscription?ref=mail"));
}

#[tokio::test]
async fn test_unknown_localized_page_is_not_found() {
    let app = TestApp::spawn().await;

    let response = get(&app.router, "/en/nowhere", &[]).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json()["error"], "not_found");
}

#[tokio::test]
async fn test_unreachable_auth_service_treated_as_anonymous_by_default() {
    let app = TestApp::with(
        MockAuthService::failing(500).await,
        RecordingEmailProvider::default(),
        &[],
    )
    .await;

    let response = get(&app.router, "/en/dashboard", &session()).await;

    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.location(), Some("/en/login"));
}

#[tokio::test]
async fn test_unreachable_auth_service_with_error_policy() {
    let app = TestApp::with(
        MockAuthService::failing(500).await,
        RecordingEmailProvider::default(),
        &[("SESSION_LOOKUP_FAILURE", "error")],
    )
    .await;

    let response = get(&app.router, "/en/dashboard", &session()).await;

    assert_eq!(response.status, StatusCode::BAD_GATEWAY);
    assert_eq!(response.json()["error"], "auth_service_error");
}
