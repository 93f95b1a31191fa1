//! Profile update for the signed-in user

use crate::domain::{ProfileResponse, UpdateProfileInput};
use crate::error::Result;
use crate::locale::{Locale, LocalizedRoute, LOCALE_COOKIE};
use crate::middleware::AuthSession;
use crate::service::EmailChangeNotice;
use crate::state::AppState;
use axum::{
    extract::State,
    http::{header::REFERER, HeaderMap},
    Json,
};
use axum_extra::extract::cookie::CookieJar;
use url::Url;
use validator::Validate;

/// PUT /api/user/profile
///
/// A name change is applied immediately. An email change only starts the
/// verification flow; the old address is notified and the response keeps
/// reporting it until the new one is confirmed.
pub async fn update_profile(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
    jar: CookieJar,
    headers: HeaderMap,
    Json(input): Json<UpdateProfileInput>,
) -> Result<Json<ProfileResponse>> {
    input.validate()?;

    let locale = request_locale(&jar, &headers);
    let user = &session.user;
    let name = input.trimmed_name();
    let email = input.trimmed_email();

    if name != user.name {
        state.accounts.update_user(&headers, name).await?;
        tracing::info!(user_id = %user.id, "Profile name updated");
    }

    let email_change_pending = !email.eq_ignore_ascii_case(&user.email);
    if email_change_pending {
        let callback_url = format!(
            "{}{}",
            state.config.app_url,
            LocalizedRoute::Dashboard.href(locale)
        );
        state
            .accounts
            .change_email(&headers, email, &callback_url)
            .await?;
        tracing::info!(user_id = %user.id, "Email change requested");

        let notice = EmailChangeNotice {
            old_email: &user.email,
            new_email: email,
            user_name: name,
            locale,
        };
        if let Err(e) = state.notifications.send_email_change_notification(notice).await {
            tracing::warn!(user_id = %user.id, error = %e, "Failed to notify previous email address");
        }
    }

    Ok(Json(ProfileResponse {
        success: true,
        name: name.to_string(),
        email: user.email.clone(),
        email_change_pending,
    }))
}

/// Locale cookie first, then the locale prefix of the page that sent the
/// request.
fn request_locale(jar: &CookieJar, headers: &HeaderMap) -> Locale {
    if let Some(locale) = jar
        .get(LOCALE_COOKIE)
        .and_then(|c| c.value().parse::<Locale>().ok())
    {
        return locale;
    }

    headers
        .get(REFERER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| Url::parse(v).ok())
        .map(|url| Locale::from_path(url.path()))
        .unwrap_or_default()
}
