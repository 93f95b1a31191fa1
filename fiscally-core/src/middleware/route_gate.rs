//! Route gate middleware
//!
//! For every gated request: look up the session, let [`decide`] classify
//! the path, then either redirect, pass through, or resolve the locale.

use crate::config::SessionFailurePolicy;
use crate::error::AppError;
use crate::locale::{Locale, LOCALE_COOKIE};
use crate::routing::{decide, is_gated, resolve_locale, GateDecision, LocaleResolution, ResolvedLocale};
use crate::session::{CurrentSession, SessionData};
use crate::state::HasSessions;
use axum::{
    body::Body,
    extract::State,
    http::{
        header::{ACCEPT_LANGUAGE, CONTENT_LANGUAGE, SET_COOKIE},
        HeaderMap, HeaderValue, Request,
    },
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

pub async fn route_gate_middleware<S: HasSessions>(
    State(state): State<S>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let path = request.uri().path().to_owned();
    if !is_gated(&path) {
        return next.run(request).await;
    }

    let session = match lookup_session(&state, request.headers()).await {
        Ok(session) => session,
        Err(e) => return e.into_response(),
    };

    let decision = decide(&path, session.is_some());
    metrics::counter!("fiscally_route_gate_decisions_total", "outcome" => decision.outcome())
        .increment(1);

    if let Some(target) = decision.redirect_target() {
        tracing::debug!(path = %path, target = %target, outcome = decision.outcome(), "Route gate redirect");
        return Redirect::temporary(&target).into_response();
    }
    if decision == GateDecision::PassThrough {
        return next.run(request).await;
    }

    let jar = CookieJar::from_headers(request.headers());
    let cookie_locale = jar
        .get(LOCALE_COOKIE)
        .and_then(|c| c.value().parse::<Locale>().ok());
    let accept_language = request
        .headers()
        .get(ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok());

    match resolve_locale(&path, request.uri().query(), cookie_locale, accept_language) {
        LocaleResolution::Redirect(target) => Redirect::temporary(&target).into_response(),
        LocaleResolution::Continue { locale, set_cookie } => {
            request.extensions_mut().insert(ResolvedLocale(locale));
            request.extensions_mut().insert(CurrentSession(session));

            let mut response = next.run(request).await;
            let headers = response.headers_mut();
            headers.insert(CONTENT_LANGUAGE, HeaderValue::from_static(locale.as_str()));
            if set_cookie {
                if let Ok(value) = HeaderValue::from_str(&locale_cookie(locale).to_string()) {
                    headers.append(SET_COOKIE, value);
                }
            }
            response
        }
    }
}

async fn lookup_session<S: HasSessions>(
    state: &S,
    headers: &HeaderMap,
) -> Result<Option<SessionData>, AppError> {
    match state.sessions().get_session(headers).await {
        Ok(session) => Ok(session),
        Err(e) => {
            metrics::counter!("fiscally_session_lookup_failures_total").increment(1);
            match state.session_failure_policy() {
                SessionFailurePolicy::Anonymous => {
                    tracing::warn!(error = %e, "Session lookup failed; treating request as anonymous");
                    Ok(None)
                }
                SessionFailurePolicy::Error => Err(AppError::AuthService(e.to_string())),
            }
        }
    }
}

fn locale_cookie(locale: Locale) -> Cookie<'static> {
    Cookie::build((LOCALE_COOKIE, locale.as_str()))
        .path("/")
        .same_site(SameSite::Lax)
        .build()
}
