//! reqwest-backed transport

use async_trait::async_trait;
use openarch_core::{ApiConfig, ArchiveError, HttpTransport, Result};
use reqwest::Client;

/// HTTP transport using a shared reqwest client
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create from config, applying the request timeout and user agent
    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| ArchiveError::Network(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get_text(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ArchiveError::Network(format!("Request to {url} failed: {e}")))?;

        // Error payloads come back as JSON with a non-success status, so
        // the body is read either way and classified by the caller.
        let status = response.status();
        if !status.is_success() {
            tracing::debug!("{} returned status {}", url, status);
        }

        response
            .text()
            .await
            .map_err(|e| ArchiveError::Network(format!("Failed to read body of {url}: {e}")))
    }
}
