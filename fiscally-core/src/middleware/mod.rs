//! HTTP middleware
//!
//! - Route gate (session-based redirects followed by locale resolution)
//! - Session extractors for API handlers
//! - Request ID + metrics layer, sanitized trace spans, security headers

pub mod auth;
pub mod metrics;
pub mod route_gate;
pub mod security_headers;
pub mod trace;

pub use auth::{AuthSession, OptionalSession};
pub use metrics::ObservabilityLayer;
pub use route_gate::route_gate_middleware;
pub use security_headers::security_headers_middleware;
pub use trace::SanitizedMakeSpan;
