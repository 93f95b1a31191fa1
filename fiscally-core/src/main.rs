use anyhow::Result;
use fiscally_core::{config::Config, server, telemetry};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    let metrics_handle = telemetry::init(&config.telemetry)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        email_provider = config.email.provider_type(),
        "Starting Fiscally Core"
    );

    server::run(config, metrics_handle).await
}
