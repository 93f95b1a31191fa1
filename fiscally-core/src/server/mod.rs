//! Server initialization and routing

use crate::api;
use crate::config::Config;
use crate::email::provider_from_config;
use crate::middleware::{
    route_gate_middleware, security_headers_middleware, ObservabilityLayer, SanitizedMakeSpan,
};
use crate::service::NotificationService;
use crate::session::HttpAuthClient;
use crate::state::{AppState, RouteGateState};
use anyhow::{Context, Result};
use axum::{
    routing::{get, post, put},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Wire the production dependencies and serve until Ctrl-C / SIGTERM.
pub async fn run(config: Config, metrics_handle: Option<PrometheusHandle>) -> Result<()> {
    let auth_client = Arc::new(
        HttpAuthClient::new(&config.auth_service.url, config.auth_service.timeout())
            .context("Failed to create authentication service client")?,
    );
    info!(url = %config.auth_service.url, "Authentication service client ready");

    let provider =
        provider_from_config(&config.email).context("Failed to create email provider")?;
    if !config.email.is_configured() {
        tracing::warn!("No email provider configured; notification hooks will fail");
    } else if let Err(e) = provider.test_connection().await {
        tracing::warn!(
            provider = provider.provider_name(),
            error = %e,
            "Email provider is not reachable"
        );
    } else {
        info!(provider = provider.provider_name(), "Email provider ready");
    }
    let notifications = Arc::new(NotificationService::new(
        provider,
        config.app_name.clone(),
        config.app_url.clone(),
    ));

    let addr = config.http_addr();
    let state = AppState {
        config: Arc::new(config),
        sessions: auth_client.clone(),
        accounts: auth_client,
        notifications,
        metrics_handle,
    };

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("HTTP server listening on {}", addr);

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(async {
            if let Err(e) = shutdown_signal().await {
                tracing::error!(error = %e, "Shutdown signal handler failed");
            }
        })
        .await
        .context("HTTP server error")?;

    info!("HTTP server stopped");
    Ok(())
}

/// Build the HTTP router.
///
/// Page routes sit behind the route gate; health, metrics and API routes
/// do not.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    let timeout = Duration::from_secs(state.config.request_timeout_secs);

    let pages = Router::new()
        .route("/", get(api::pages::page))
        .route("/{locale}", get(api::pages::page))
        .route("/{locale}/{*path}", get(api::pages::page))
        .layer(axum::middleware::from_fn_with_state(
            state.route_gate_state(),
            route_gate_middleware::<RouteGateState>,
        ));

    let mut router = Router::new()
        .route("/health", get(api::health::health))
        .route("/ready", get(api::health::ready))
        .route("/api/me", get(api::me::me))
        .route("/api/user/profile", put(api::profile::update_profile))
        .route(
            "/api/notifications/password-reset",
            post(api::notifications::password_reset),
        )
        .route(
            "/api/notifications/email-verification",
            post(api::notifications::email_verification),
        )
        .route(
            "/api/notifications/email-change-verification",
            post(api::notifications::email_change_verification),
        );
    if state.metrics_handle.is_some() {
        router = router.route("/metrics", get(api::metrics::metrics_handler));
    }

    router
        .merge(pages)
        .layer(axum::middleware::from_fn(security_headers_middleware))
        .layer(TimeoutLayer::new(timeout))
        .layer(TraceLayer::new_for_http().make_span_with(SanitizedMakeSpan))
        .layer(ObservabilityLayer)
        .layer(cors)
        .with_state(state)
}

async fn shutdown_signal() -> Result<()> {
    let ctrl_c = async { signal::ctrl_c().await.context("Failed to install Ctrl+C handler") };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .context("Failed to install SIGTERM handler")?
            .recv()
            .await;
        Ok::<_, anyhow::Error>(())
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<Result<()>>();

    tokio::select! {
        res = ctrl_c => res?,
        res = terminate => res?,
    }

    info!("Shutdown signal received");
    Ok(())
}
