//! Route gate: session-based redirects for protected and auth pages

use crate::locale::{Locale, LocalizedRoute};

/// Requests under this prefix are passed through untouched.
pub const PASS_THROUGH_PREFIX: &str = "/api/auth";

/// Markers of pages that require a session.
pub const PROTECTED_MARKERS: &[&str] = &["/dashboard", "/tableau-de-bord"];

/// Markers of login / registration / password-reset pages.
pub const AUTH_MARKERS: &[&str] = &[
    "/login",
    "/connexion",
    "/register",
    "/inscription",
    "/forgot-password",
    "/mot-de-passe-oublie",
];

/// Outcome of evaluating the gate for one request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Forward unchanged, skipping locale resolution
    PassThrough,
    /// Protected page without a session
    RedirectToLogin(Locale),
    /// Auth page with an active session
    RedirectToDashboard(Locale),
    /// Nothing to do; continue with locale resolution
    Continue,
}

impl GateDecision {
    /// `Location` for redirect decisions
    pub fn redirect_target(&self) -> Option<String> {
        match self {
            Self::RedirectToLogin(locale) => Some(LocalizedRoute::Login.href(*locale)),
            Self::RedirectToDashboard(locale) => Some(LocalizedRoute::Dashboard.href(*locale)),
            Self::PassThrough | Self::Continue => None,
        }
    }

    /// Metric / log label
    pub fn outcome(&self) -> &'static str {
        match self {
            Self::PassThrough => "pass_through",
            Self::RedirectToLogin(_) => "redirect_login",
            Self::RedirectToDashboard(_) => "redirect_dashboard",
            Self::Continue => "continue",
        }
    }
}

pub fn is_pass_through(path: &str) -> bool {
    path.starts_with(PASS_THROUGH_PREFIX)
}

pub fn is_protected_route(path: &str) -> bool {
    PROTECTED_MARKERS.iter().any(|marker| path.contains(marker))
}

pub fn is_auth_route(path: &str) -> bool {
    AUTH_MARKERS.iter().any(|marker| path.contains(marker))
}

/// Classify `path` given whether the caller has a session.
///
/// The protected check runs before the auth-page check, so a path carrying
/// both kinds of marker redirects to login when the session is absent.
pub fn decide(path: &str, session_present: bool) -> GateDecision {
    if is_pass_through(path) {
        return GateDecision::PassThrough;
    }

    if is_protected_route(path) && !session_present {
        return GateDecision::RedirectToLogin(Locale::redirect_locale(path));
    }

    if is_auth_route(path) && session_present {
        return GateDecision::RedirectToDashboard(Locale::redirect_locale(path));
    }

    GateDecision::Continue
}
