//! Prometheus recorder and metric descriptions

use anyhow::{Context, Result};
use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

pub fn install_prometheus_recorder() -> Result<PrometheusHandle> {
    let buckets = [
        0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
    ];

    PrometheusBuilder::new()
        .set_buckets(&buckets)
        .context("Invalid histogram buckets")?
        .install_recorder()
        .context("Failed to install Prometheus recorder")
}

/// Register HELP/TYPE lines so every series shows up from startup.
pub fn describe_metrics() {
    describe_counter!("fiscally_http_requests_total", "Total number of HTTP requests");
    describe_histogram!(
        "fiscally_http_request_duration_seconds",
        "HTTP request duration in seconds"
    );
    describe_gauge!(
        "fiscally_http_requests_in_flight",
        "Number of HTTP requests currently being processed"
    );
    describe_counter!(
        "fiscally_route_gate_decisions_total",
        "Route gate decisions by outcome"
    );
    describe_counter!(
        "fiscally_session_lookup_failures_total",
        "Session lookups that failed to reach a verdict"
    );
    describe_counter!(
        "fiscally_emails_sent_total",
        "Transactional emails by template, locale and status"
    );

    gauge!("fiscally_http_requests_in_flight").set(0.0);
    for outcome in ["pass_through", "redirect_login", "redirect_dashboard", "continue"] {
        counter!("fiscally_route_gate_decisions_total", "outcome" => outcome).absolute(0);
    }
    counter!("fiscally_session_lookup_failures_total").absolute(0);
}
