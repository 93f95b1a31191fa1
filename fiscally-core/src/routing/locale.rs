//! Locale resolution: the continuation after the route gate
//!
//! Every page URL carries its locale as the first segment. Unprefixed paths
//! are redirected to a prefixed one, and a page requested with another
//! locale's spelling is redirected to the spelling of the prefix locale.

use crate::locale::{negotiate_accept_language, Locale, LocalizedRoute};

/// Locale resolved for the current request, stored in request extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedLocale(pub Locale);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleResolution {
    /// Serve the request in `locale`; `set_cookie` when the locale cookie
    /// does not already hold it.
    Continue { locale: Locale, set_cookie: bool },
    /// Redirect to a correctly prefixed / spelled URL.
    Redirect(String),
}

/// Decide how to serve `path` with respect to locale.
///
/// `cookie_locale` is the remembered locale, `accept_language` the raw
/// header; both only matter for unprefixed paths.
pub fn resolve_locale(
    path: &str,
    query: Option<&str>,
    cookie_locale: Option<Locale>,
    accept_language: Option<&str>,
) -> LocaleResolution {
    if let Some(locale) = prefix_locale(path) {
        let rest = &path[1 + locale.as_str().len()..];

        if LocalizedRoute::from_localized(locale, rest).is_none() {
            if let Some(route) = LocalizedRoute::from_any(rest) {
                return LocaleResolution::Redirect(with_query(route.href(locale), query));
            }
        }

        return LocaleResolution::Continue {
            locale,
            set_cookie: cookie_locale != Some(locale),
        };
    }

    let locale = cookie_locale
        .or_else(|| accept_language.and_then(negotiate_accept_language))
        .unwrap_or(Locale::DEFAULT);

    let target = match LocalizedRoute::from_any(path) {
        Some(route) => route.href(locale),
        None => format!("/{}{}", locale, path),
    };

    LocaleResolution::Redirect(with_query(target, query))
}

/// Locale prefix written exactly as a supported tag (`/fr`, `/en/...`).
fn prefix_locale(path: &str) -> Option<Locale> {
    let segment = path.strip_prefix('/')?.split('/').next()?;
    Locale::ALL
        .into_iter()
        .find(|locale| locale.as_str() == segment)
}

fn with_query(path: String, query: Option<&str>) -> String {
    match query {
        Some(q) if !q.is_empty() => format!("{}?{}", path, q),
        _ => path,
    }
}
