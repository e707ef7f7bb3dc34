// Publisher trait for pushing a rendered dashboard to a dashboard service
use async_trait::async_trait;
use thiserror::Error;

/// What the dashboard service reported back after an accepted upsert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishReceipt {
    /// Base URL of the dashboard service the document was sent to.
    pub endpoint: String,
    pub status: Option<String>,
    pub uid: Option<String>,
    pub url: Option<String>,
    pub version: Option<u64>,
}

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("dashboard document is not valid JSON: {0}")]
    InvalidDocument(#[from] serde_json::Error),

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("dashboard rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

#[async_trait]
pub trait DashboardPublisher: Send + Sync {
    /// Create or overwrite the dashboard described by `dashboard_json`.
    /// Makes exactly one attempt.
    async fn publish(&self, dashboard_json: &str) -> Result<PublishReceipt, PublishError>;
}
