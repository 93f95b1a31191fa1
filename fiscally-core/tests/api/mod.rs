//! HTTP test infrastructure
//!
//! - `TestApp`: production `build_router()` wired to a [`MockAuthService`]
//!   and a [`RecordingEmailProvider`]
//! - request helpers returning status, headers and parsed JSON

pub mod mock_auth_service;

mod gate_http_test;
mod notification_http_test;
mod profile_http_test;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{HeaderMap, Method, Request, StatusCode},
    Router,
};
use fiscally_core::config::Config;
use fiscally_core::domain::{EmailMessage, EmailSendResult};
use fiscally_core::email::{EmailProvider, EmailProviderError};
use fiscally_core::server::build_router;
use fiscally_core::service::NotificationService;
use fiscally_core::session::HttpAuthClient;
use fiscally_core::state::AppState;
use mock_auth_service::MockAuthService;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tower::ServiceExt;

pub const APP_URL: &str = "https://app.test";

// ============================================================================
// Email capture
// ============================================================================

/// Keeps every message instead of delivering it
#[derive(Default)]
pub struct RecordingEmailProvider {
    sent: Mutex<Vec<EmailMessage>>,
    fail: bool,
}

impl RecordingEmailProvider {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailProvider for RecordingEmailProvider {
    async fn send(&self, message: &EmailMessage) -> Result<EmailSendResult, EmailProviderError> {
        if self.fail {
            return Err(EmailProviderError::ConnectionError("connection refused".to_string()));
        }
        let mut sent = self.sent.lock().unwrap();
        sent.push(message.clone());
        Ok(EmailSendResult::success(Some(format!("test-{}", sent.len()))))
    }

    async fn test_connection(&self) -> Result<(), EmailProviderError> {
        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        "recording"
    }
}

// ============================================================================
// Test application
// ============================================================================

pub struct TestApp {
    pub router: Router,
    pub auth: MockAuthService,
    pub emails: Arc<RecordingEmailProvider>,
}

pub fn test_config(auth_url: &str, extra: &[(&str, &str)]) -> Config {
    let mut vars: HashMap<String, String> = HashMap::from([
        ("AUTH_SERVICE_URL".to_string(), auth_url.to_string()),
        ("APP_URL".to_string(), APP_URL.to_string()),
        ("AUTH_SERVICE_TIMEOUT_MS".to_string(), "2000".to_string()),
    ]);
    for (k, v) in extra {
        vars.insert(k.to_string(), v.to_string());
    }
    Config::from_lookup(|key| vars.get(key).cloned()).unwrap()
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::with(MockAuthService::new().await, RecordingEmailProvider::default(), &[]).await
    }

    pub async fn with(
        auth: MockAuthService,
        emails: RecordingEmailProvider,
        extra_config: &[(&str, &str)],
    ) -> Self {
        let config = test_config(&auth.uri(), extra_config);
        let client = Arc::new(
            HttpAuthClient::new(&config.auth_service.url, Duration::from_secs(2)).unwrap(),
        );
        let emails = Arc::new(emails);
        let notifications = Arc::new(NotificationService::new(
            emails.clone(),
            config.app_name.clone(),
            config.app_url.clone(),
        ));

        let state = AppState {
            config: Arc::new(config),
            sessions: client.clone(),
            accounts: client,
            notifications,
            metrics_handle: None,
        };

        Self {
            router: build_router(state),
            auth,
            emails,
        }
    }
}

// ============================================================================
// Request helpers
// ============================================================================

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Option<Value>,
}

impl TestResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn location(&self) -> Option<&str> {
        self.header("location")
    }

    pub fn json(&self) -> &Value {
        self.body.as_ref().expect("response has no JSON body")
    }
}

pub async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap_or_default();
    let body = serde_json::from_slice(&body_bytes).ok();

    TestResponse {
        status,
        headers,
        body,
    }
}

pub fn request(method: Method, uri: &str, headers: &[(&str, &str)], body: Option<&Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn get(app: &Router, uri: &str, headers: &[(&str, &str)]) -> TestResponse {
    send(app, request(Method::GET, uri, headers, None)).await
}
