//! HTTP client for the authentication service REST API

use super::{AccountClient, AuthServiceError, SessionData, SessionLookup};
use async_trait::async_trait;
use axum::http::{
    header::{AUTHORIZATION, COOKIE},
    HeaderMap, StatusCode,
};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use url::Url;

const GET_SESSION_PATH: &str = "api/auth/get-session";
const UPDATE_USER_PATH: &str = "api/auth/update-user";
const CHANGE_EMAIL_PATH: &str = "api/auth/change-email";

/// Client for the authentication service
///
/// Credentials are never interpreted here: the caller's `cookie` and
/// `authorization` headers are forwarded as-is.
#[derive(Clone)]
pub struct HttpAuthClient {
    client: reqwest::Client,
    base_url: Url,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl HttpAuthClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AuthServiceError> {
        let mut base_url = Url::parse(base_url)
            .map_err(|e| AuthServiceError::Unavailable(format!("Invalid base URL: {}", e)))?;
        // Url::join drops the last segment unless the base ends with '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AuthServiceError::Unavailable(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    fn endpoint(&self, path: &str) -> Result<Url, AuthServiceError> {
        self.base_url
            .join(path)
            .map_err(|e| AuthServiceError::Unavailable(format!("Invalid endpoint: {}", e)))
    }

    fn forwarded_headers(headers: &HeaderMap) -> HeaderMap {
        let mut forwarded = HeaderMap::new();
        for name in [COOKIE, AUTHORIZATION] {
            for value in headers.get_all(&name) {
                forwarded.append(name.clone(), value.clone());
            }
        }
        forwarded
    }

    async fn post_json(
        &self,
        path: &str,
        headers: &HeaderMap,
        body: serde_json::Value,
    ) -> Result<(), AuthServiceError> {
        let response = self
            .client
            .post(self.endpoint(path)?)
            .headers(Self::forwarded_headers(headers))
            .json(&body)
            .send()
            .await
            .map_err(|e| AuthServiceError::Unavailable(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        if status == StatusCode::UNAUTHORIZED {
            return Err(AuthServiceError::Unauthenticated);
        }
        if status.is_client_error() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|b| b.message)
                .unwrap_or_else(|| status.to_string());
            return Err(AuthServiceError::Rejected(message));
        }

        Err(AuthServiceError::UnexpectedStatus(status.as_u16()))
    }
}

#[async_trait]
impl SessionLookup for HttpAuthClient {
    async fn get_session(
        &self,
        headers: &HeaderMap,
    ) -> Result<Option<SessionData>, AuthServiceError> {
        let response = self
            .client
            .get(self.endpoint(GET_SESSION_PATH)?)
            .headers(Self::forwarded_headers(headers))
            .send()
            .await
            .map_err(|e| AuthServiceError::Unavailable(e.to_string()))?;

        match response.status() {
            StatusCode::UNAUTHORIZED => Ok(None),
            status if status.is_success() => response
                .json::<Option<SessionData>>()
                .await
                .map_err(|e| AuthServiceError::InvalidResponse(e.to_string())),
            status => Err(AuthServiceError::UnexpectedStatus(status.as_u16())),
        }
    }
}

#[async_trait]
impl AccountClient for HttpAuthClient {
    async fn update_user(&self, headers: &HeaderMap, name: &str) -> Result<(), AuthServiceError> {
        self.post_json(UPDATE_USER_PATH, headers, json!({ "name": name }))
            .await
    }

    async fn change_email(
        &self,
        headers: &HeaderMap,
        new_email: &str,
        callback_url: &str,
    ) -> Result<(), AuthServiceError> {
        self.post_json(
            CHANGE_EMAIL_PATH,
            headers,
            json!({ "newEmail": new_email, "callbackURL": callback_url }),
        )
        .await
    }
}
