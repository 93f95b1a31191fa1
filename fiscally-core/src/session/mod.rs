//! Session capability backed by the external authentication service
//!
//! The service owns users and sessions. This crate only asks it two kinds of
//! question: "who is behind these request headers?" ([`SessionLookup`]) and
//! "apply this account change for them" ([`AccountClient`]).

pub mod http;

pub use http::HttpAuthClient;

use async_trait::async_trait;
use axum::http::HeaderMap;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Session record as returned by the authentication service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub user_id: String,
    pub expires_at: DateTime<Utc>,
}

/// User attached to a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub email_verified: bool,
    #[serde(default)]
    pub image: Option<String>,
}

/// A live session together with its user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionData {
    pub session: Session,
    pub user: SessionUser,
}

/// Authentication state exposed to the front end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    pub user: Option<SessionUser>,
    pub session: Option<Session>,
    pub is_authenticated: bool,
}

impl From<Option<SessionData>> for AuthState {
    fn from(data: Option<SessionData>) -> Self {
        match data {
            Some(SessionData { session, user }) => Self {
                user: Some(user),
                session: Some(session),
                is_authenticated: true,
            },
            None => Self {
                user: None,
                session: None,
                is_authenticated: false,
            },
        }
    }
}

/// Session of the current request, attached by the route gate.
#[derive(Debug, Clone, Default)]
pub struct CurrentSession(pub Option<SessionData>);

/// Errors talking to the authentication service
#[derive(Error, Debug)]
pub enum AuthServiceError {
    #[error("Authentication service unavailable: {0}")]
    Unavailable(String),

    #[error("Authentication service returned status {0}")]
    UnexpectedStatus(u16),

    #[error("Invalid response from authentication service: {0}")]
    InvalidResponse(String),

    #[error("Not authenticated")]
    Unauthenticated,

    #[error("Request rejected: {0}")]
    Rejected(String),
}

/// "Retrieve session for these request headers"
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionLookup: Send + Sync {
    /// `Ok(None)` means the headers carry no valid session.
    async fn get_session(&self, headers: &HeaderMap)
        -> Result<Option<SessionData>, AuthServiceError>;
}

/// Account mutations performed on behalf of the signed-in caller
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountClient: Send + Sync {
    async fn update_user(&self, headers: &HeaderMap, name: &str) -> Result<(), AuthServiceError>;

    /// Start an email change; the service mails a verification link whose
    /// confirmation lands on `callback_url`.
    async fn change_email(
        &self,
        headers: &HeaderMap,
        new_email: &str,
        callback_url: &str,
    ) -> Result<(), AuthServiceError>;
}

#[cfg(test)]
pub(crate) fn sample_session() -> SessionData {
    SessionData {
        session: Session {
            id: "sess_1".to_string(),
            user_id: "user_1".to_string(),
            expires_at: "2030-01-01T00:00:00Z".parse().unwrap(),
        },
        user: SessionUser {
            id: "user_1".to_string(),
            name: "Jeanne Dupont".to_string(),
            email: "jeanne@example.com".to_string(),
            email_verified: true,
            image: None,
        },
    }
}
