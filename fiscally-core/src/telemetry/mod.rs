//! Telemetry initialization: structured logging and metrics

pub mod metrics;

use crate::config::{LogFormat, TelemetryConfig};
use anyhow::{Context, Result};
use metrics_exporter_prometheus::PrometheusHandle;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "fiscally_core=info,tower_http=debug";

/// Install the global subscriber and, when enabled, the Prometheus recorder.
///
/// Returns the handle used by the `/metrics` endpoint.
pub fn init(config: &TelemetryConfig) -> Result<Option<PrometheusHandle>> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_FILTER.into());
    let registry = tracing_subscriber::registry().with(env_filter);

    match config.log_format {
        // Flattened so `message` sits at the top level of each JSON line.
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().flatten_event(true))
            .try_init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).try_init(),
    }
    .context("Failed to install tracing subscriber")?;

    if !config.metrics_enabled {
        return Ok(None);
    }

    let handle = metrics::install_prometheus_recorder()?;
    metrics::describe_metrics();
    Ok(Some(handle))
}
