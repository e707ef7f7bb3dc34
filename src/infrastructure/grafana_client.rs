// Grafana HTTP API client
use crate::application::dashboard_publisher::{DashboardPublisher, PublishError, PublishReceipt};
use crate::infrastructure::config::GrafanaConfig;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const UPSERT_PATH: &str = "api/dashboards/db";

#[derive(Clone)]
pub struct GrafanaClient {
    client: reqwest::Client,
    host: String,
    user: String,
    password: String,
}

#[derive(Debug, Serialize)]
struct UpsertRequest {
    dashboard: serde_json::Value,
    overwrite: bool,
}

#[derive(Debug, Default, Deserialize)]
struct UpsertResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    uid: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    version: Option<u64>,
}

impl GrafanaClient {
    pub fn new(config: GrafanaConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            host: config.url.trim_end_matches('/').to_string(),
            user: config.user,
            password: config.password,
        })
    }

    fn upsert_url(&self) -> String {
        format!("{}/{}", self.host, UPSERT_PATH)
    }
}

#[async_trait]
impl DashboardPublisher for GrafanaClient {
    async fn publish(&self, dashboard_json: &str) -> Result<PublishReceipt, PublishError> {
        let request = UpsertRequest {
            dashboard: serde_json::from_str(dashboard_json)?,
            overwrite: true,
        };
        let url = self.upsert_url();

        tracing::debug!("Posting dashboard to {}", url);
        let response = self
            .client
            .post(&url)
            .basic_auth(&self.user, Some(&self.password))
            .json(&request)
            .send()
            .await
            .map_err(|e| PublishError::Transport {
                url: url.clone(),
                source: Box::new(e),
            })?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if status != StatusCode::OK {
            return Err(PublishError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        // Older Grafana versions and proxies may answer with a non-JSON body.
        let upsert = serde_json::from_str::<UpsertResponse>(&body).unwrap_or_default();
        tracing::debug!(?upsert, "Dashboard accepted");

        Ok(PublishReceipt {
            endpoint: self.host.clone(),
            status: upsert.status,
            uid: upsert.uid,
            url: upsert.url,
            version: upsert.version,
        })
    }
}
