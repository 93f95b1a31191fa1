//! Fiscally Core
//!
//! Session-aware, bilingual (en/fr) request gate and account services for
//! the Fiscally web application. The authentication service owns users and
//! sessions; this crate decides where each request may go, resolves its
//! locale, and sends the localized transactional emails.

pub mod api;
pub mod config;
pub mod domain;
pub mod email;
pub mod error;
pub mod locale;
pub mod middleware;
pub mod routing;
pub mod server;
pub mod service;
pub mod session;
pub mod state;
pub mod telemetry;

pub use config::Config;
pub use error::{AppError, Result};
