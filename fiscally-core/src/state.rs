//! Application state and the capability traits handlers depend on

use crate::config::{Config, SessionFailurePolicy};
use crate::service::NotificationService;
use crate::session::{AccountClient, SessionLookup};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

/// State that can answer "who is behind this request?".
///
/// Implemented by [`AppState`] and by the narrower [`RouteGateState`] so the
/// gate middleware and session extractors work with either.
pub trait HasSessions: Clone + Send + Sync + 'static {
    fn sessions(&self) -> &Arc<dyn SessionLookup>;

    fn session_failure_policy(&self) -> SessionFailurePolicy;
}

/// Everything the route gate needs
#[derive(Clone)]
pub struct RouteGateState {
    pub sessions: Arc<dyn SessionLookup>,
    pub failure_policy: SessionFailurePolicy,
}

impl RouteGateState {
    pub fn new(sessions: Arc<dyn SessionLookup>, failure_policy: SessionFailurePolicy) -> Self {
        Self {
            sessions,
            failure_policy,
        }
    }
}

impl HasSessions for RouteGateState {
    fn sessions(&self) -> &Arc<dyn SessionLookup> {
        &self.sessions
    }

    fn session_failure_policy(&self) -> SessionFailurePolicy {
        self.failure_policy
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub sessions: Arc<dyn SessionLookup>,
    pub accounts: Arc<dyn AccountClient>,
    pub notifications: Arc<NotificationService>,
    pub metrics_handle: Option<PrometheusHandle>,
}

impl AppState {
    pub fn route_gate_state(&self) -> RouteGateState {
        RouteGateState::new(
            self.sessions.clone(),
            self.config.auth_service.lookup_failure,
        )
    }
}

impl HasSessions for AppState {
    fn sessions(&self) -> &Arc<dyn SessionLookup> {
        &self.sessions
    }

    fn session_failure_policy(&self) -> SessionFailurePolicy {
        self.config.auth_service.lookup_failure
    }
}
