// Command line dispatch and operator-facing output
use crate::application::dashboard_publisher::{DashboardPublisher, PublishError, PublishReceipt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Print the dashboard JSON.
    Print,
    /// Print the dashboard JSON, then upsert it.
    Send,
}

impl Command {
    /// Only the first argument (after the program name) is looked at.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        match args.into_iter().nth(1).as_deref() {
            Some("send") => Command::Send,
            Some(other) => {
                tracing::warn!("Ignoring unrecognized argument {:?}", other);
                Command::Print
            }
            None => Command::Print,
        }
    }
}

/// Publishes once and reports the outcome. The error is handed back so the
/// caller can decide the exit status.
pub async fn publish_and_report(
    publisher: &dyn DashboardPublisher,
    dashboard_json: &str,
) -> Result<PublishReceipt, PublishError> {
    match publisher.publish(dashboard_json).await {
        Ok(receipt) => {
            tracing::info!(
                status = ?receipt.status,
                uid = ?receipt.uid,
                version = ?receipt.version,
                "Grafana accepted dashboard"
            );
            println!("\nDashboard successfully sent to Grafana!");
            println!("Dashboard URL: {}", dashboard_link(&receipt));
            Ok(receipt)
        }
        Err(error) => {
            report_failure(&error);
            Err(error)
        }
    }
}

fn dashboard_link(receipt: &PublishReceipt) -> String {
    match &receipt.url {
        Some(path) => format!("{}{}", receipt.endpoint, path),
        None => receipt.endpoint.clone(),
    }
}

fn report_failure(error: &PublishError) {
    match error {
        PublishError::Rejected { status, body } => {
            eprintln!("Failed to send dashboard to Grafana");
            eprintln!("Status Code: {}", status);
            eprintln!("Response: {}", body);
        }
        other => eprintln!("Error sending dashboard to Grafana: {}", other),
    }
}
