//! Request routing decisions for localized pages
//!
//! - [`matcher`] decides which requests are subject to gating at all
//! - [`gate`] classifies a path against session presence
//! - [`locale`] resolves the request locale once the gate lets it through
//!
//! Everything here is pure; the axum glue lives in
//! [`crate::middleware::route_gate`].

pub mod gate;
pub mod locale;
pub mod matcher;

pub use gate::{decide, GateDecision};
pub use locale::{resolve_locale, LocaleResolution, ResolvedLocale};
pub use matcher::is_gated;
