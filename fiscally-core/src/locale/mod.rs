//! Supported locales and the localized page map
//!
//! Every locale-keyed table in the crate is an exhaustive `match` over
//! [`Locale`], so adding a locale is a compile error until every table
//! covers it.

mod negotiate;

pub use negotiate::negotiate_accept_language;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Name of the cookie remembering the visitor's last locale.
pub const LOCALE_COOKIE: &str = "NEXT_LOCALE";

/// A supported UI / email locale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Fr];
    pub const DEFAULT: Locale = Locale::En;

    /// BCP 47 tag used in URLs, cookies and headers
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
        }
    }

    /// Locale carried by the first path segment, or the default.
    pub fn from_path(path: &str) -> Self {
        first_segment(path)
            .and_then(|seg| seg.parse().ok())
            .unwrap_or(Self::DEFAULT)
    }

    /// Locale used for gate redirect targets: `fr` selects French, any
    /// other first segment selects English.
    pub fn redirect_locale(path: &str) -> Self {
        match first_segment(path) {
            Some("fr") => Self::Fr,
            _ => Self::En,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported locale: {0}")]
pub struct UnsupportedLocale(pub String);

impl FromStr for Locale {
    type Err = UnsupportedLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("en") {
            Ok(Self::En)
        } else if s.eq_ignore_ascii_case("fr") {
            Ok(Self::Fr)
        } else {
            Err(UnsupportedLocale(s.to_string()))
        }
    }
}

/// First non-empty segment of a path (`/fr/connexion` -> `fr`).
pub(crate) fn first_segment(path: &str) -> Option<&str> {
    path.trim_start_matches('/')
        .split('/')
        .next()
        .filter(|seg| !seg.is_empty())
}

/// Named application pages and their per-locale pathnames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocalizedRoute {
    Home,
    Dashboard,
    Login,
    Register,
    ForgotPassword,
    Contact,
}

impl LocalizedRoute {
    pub const ALL: [LocalizedRoute; 6] = [
        Self::Home,
        Self::Dashboard,
        Self::Login,
        Self::Register,
        Self::ForgotPassword,
        Self::Contact,
    ];

    /// Internal (locale-independent) pathname
    pub fn internal_path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Dashboard => "/dashboard",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::ForgotPassword => "/forgot-password",
            Self::Contact => "/contact",
        }
    }

    /// Pathname of this page in the given locale, without the locale prefix
    pub fn path(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Home, _) => "/",
            (Self::Dashboard, Locale::En) => "/dashboard",
            (Self::Dashboard, Locale::Fr) => "/tableau-de-bord",
            (Self::Login, Locale::En) => "/login",
            (Self::Login, Locale::Fr) => "/connexion",
            (Self::Register, Locale::En) => "/register",
            (Self::Register, Locale::Fr) => "/inscription",
            (Self::ForgotPassword, Locale::En) => "/forgot-password",
            (Self::ForgotPassword, Locale::Fr) => "/mot-de-passe-oublie",
            (Self::Contact, Locale::En) => "/contact-us",
            (Self::Contact, Locale::Fr) => "/contactez-nous",
        }
    }

    /// Full href including the locale prefix (`/fr/connexion`)
    pub fn href(&self, locale: Locale) -> String {
        match self {
            Self::Home => format!("/{}", locale),
            _ => format!("/{}{}", locale, self.path(locale)),
        }
    }

    /// Route whose spelling in `locale` is exactly `path`.
    pub fn from_localized(locale: Locale, path: &str) -> Option<Self> {
        let path = normalize(path);
        Self::ALL.into_iter().find(|route| route.path(locale) == path)
    }

    /// Route matching `path` in any locale spelling or its internal name.
    pub fn from_any(path: &str) -> Option<Self> {
        let path = normalize(path);
        Self::ALL.into_iter().find(|route| {
            route.internal_path() == path
                || Locale::ALL.iter().any(|&locale| route.path(locale) == path)
        })
    }
}

fn normalize(path: &str) -> &str {
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}
