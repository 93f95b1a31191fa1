//! Session extractors for API handlers
//!
//! Handlers behind the route gate find the session in request extensions;
//! API routes are outside the gate and ask the session service themselves.

use crate::error::AppError;
use crate::session::{CurrentSession, SessionData};
use crate::state::HasSessions;
use axum::{extract::FromRequestParts, http::request::Parts};

/// The caller's session; rejects with 401 when there is none.
#[derive(Debug, Clone)]
pub struct AuthSession(pub SessionData);

impl<S> FromRequestParts<S> for AuthSession
where
    S: HasSessions,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match current_session(parts, state).await? {
            Some(session) => Ok(AuthSession(session)),
            None => Err(AppError::Unauthorized("Authentication required".to_string())),
        }
    }
}

/// The caller's session if any. Lookup failures count as anonymous.
#[derive(Debug, Clone, Default)]
pub struct OptionalSession(pub Option<SessionData>);

impl<S> FromRequestParts<S> for OptionalSession
where
    S: HasSessions,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match current_session(parts, state).await {
            Ok(session) => Ok(OptionalSession(session)),
            Err(e) => {
                tracing::warn!(error = %e, "Session lookup failed");
                Ok(OptionalSession(None))
            }
        }
    }
}

async fn current_session<S: HasSessions>(
    parts: &mut Parts,
    state: &S,
) -> Result<Option<SessionData>, AppError> {
    if let Some(CurrentSession(session)) = parts.extensions.get::<CurrentSession>() {
        return Ok(session.clone());
    }

    let session = state
        .sessions()
        .get_session(&parts.headers)
        .await
        .map_err(|e| AppError::AuthService(e.to_string()))?;
    parts.extensions.insert(CurrentSession(session.clone()));
    Ok(session)
}
