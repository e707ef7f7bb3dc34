// Main entry point - Builds the dashboard and optionally publishes it
mod application;
mod domain;
mod infrastructure;
mod presentation;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::{assemble_dashboard, render_dashboard};
use crate::application::layout::cpu_usage_layout;
use crate::infrastructure::config::load_grafana_config;
use crate::infrastructure::grafana_client::GrafanaClient;
use crate::presentation::cli::{publish_and_report, Command};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr, stdout carries only the dashboard
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let command = Command::from_args(std::env::args());

    let dashboard = assemble_dashboard(&cpu_usage_layout());
    let dashboard_json = render_dashboard(&dashboard).context("Failed to serialize dashboard")?;
    println!("{}", dashboard_json);

    if command == Command::Send {
        let grafana_config = load_grafana_config().context("Failed to load Grafana configuration")?;
        tracing::info!(url = %grafana_config.url, user = %grafana_config.user, "Publishing dashboard");

        let client = GrafanaClient::new(grafana_config)?;
        publish_and_report(&client, &dashboard_json)
            .await
            .context("Failed to publish dashboard")?;
    }

    Ok(())
}
