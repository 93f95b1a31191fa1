//! Authentication state of the caller

use crate::middleware::OptionalSession;
use crate::session::AuthState;
use axum::Json;

pub async fn me(OptionalSession(session): OptionalSession) -> Json<AuthState> {
    Json(AuthState::from(session))
}
