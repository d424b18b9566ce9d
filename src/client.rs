//! Analytics Backend Client
//!
//! HTTP client for `POST /api/data`. The controller only sees the
//! `DataSource` trait, so tests and alternative transports can stand in for
//! the real backend.

use async_trait::async_trait;
use reqwest::Client;

use crate::error::{DashboardError, DashboardResult};
use crate::model::{DashboardResponse, FilterRequest};

/// Anything that can answer a filter set with a dashboard payload
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetch the dashboard payload for the given request body
    async fn fetch(&self, request: &FilterRequest) -> DashboardResult<DashboardResponse>;
}

/// Configuration for the backend client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend (e.g., "http://127.0.0.1:5000")
    pub base_url: String,
    /// Path of the data endpoint
    pub data_path: String,
    /// Request timeout in milliseconds; `None` waits indefinitely
    pub request_timeout_ms: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            data_path: "/api/data".to_string(),
            request_timeout_ms: None,
        }
    }
}

impl ClientConfig {
    /// Full URL of the data endpoint
    pub fn data_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.data_path.trim_start_matches('/')
        )
    }
}

/// reqwest-backed client for the analytics backend
pub struct DataClient {
    client: Client,
    config: ClientConfig,
}

impl DataClient {
    /// Create a new client with the given configuration
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(ms) = config.request_timeout_ms {
            builder = builder.timeout(std::time::Duration::from_millis(ms));
        }

        Ok(Self {
            client: builder.build()?,
            config,
        })
    }

    /// Get the current configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait]
impl DataSource for DataClient {
    async fn fetch(&self, request: &FilterRequest) -> DashboardResult<DashboardResponse> {
        let url = self.config.data_url();
        tracing::debug!(%url, ?request, "Requesting dashboard data");

        let response = self.client.post(&url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(DashboardError::status(status.as_u16(), &text));
        }

        let body = response.bytes().await?;
        let data: DashboardResponse = serde_json::from_slice(&body)?;

        tracing::debug!(rows = data.table.len(), "Dashboard data received");
        Ok(data)
    }
}
