//! Localized page endpoints
//!
//! Rendering lives in the front end; these handlers answer with the context
//! a page needs once the route gate and locale resolution have let the
//! request through.

use crate::error::{AppError, Result};
use crate::locale::{Locale, LocalizedRoute};
use crate::routing::ResolvedLocale;
use crate::session::{CurrentSession, SessionUser};
use axum::{http::Uri, Extension, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PageContext {
    pub locale: Locale,
    /// Internal route name (`/dashboard`), identical across locales
    pub route: &'static str,
    /// Localized pathname without the locale prefix
    pub path: &'static str,
    pub authenticated: bool,
    pub user: Option<SessionUser>,
}

pub async fn page(
    resolved: Option<Extension<ResolvedLocale>>,
    session: Option<Extension<CurrentSession>>,
    uri: Uri,
) -> Result<Json<PageContext>> {
    // Requests the gate skipped (assets, framework paths) carry no locale.
    let Some(Extension(ResolvedLocale(locale))) = resolved else {
        return Err(not_found(&uri));
    };

    let rest = uri
        .path()
        .strip_prefix('/')
        .and_then(|p| p.strip_prefix(locale.as_str()))
        .unwrap_or_default();
    let route = LocalizedRoute::from_localized(locale, rest).ok_or_else(|| not_found(&uri))?;

    let user = session.and_then(|Extension(CurrentSession(s))| s).map(|s| s.user);

    Ok(Json(PageContext {
        locale,
        route: route.internal_path(),
        path: route.path(locale),
        authenticated: user.is_some(),
        user,
    }))
}

fn not_found(uri: &Uri) -> AppError {
    AppError::NotFound(format!("No page at {}", uri.path()))
}
