//! openarch client - search and document retrieval
//!
//! Talks to the openarch.nl REST API: paginated keyword search returning
//! record URLs, and retrieval of the A2A document behind a record URL.
//! Requests are issued one at a time with a fixed delay after each, and
//! nothing is retried.

pub mod endpoint;
pub mod harvest;
pub mod transport;

pub use harvest::{HarvestReport, SkippedRecord};
pub use transport::ReqwestTransport;

use openarch_core::{ApiConfig, ArchiveError, FetchOutcome, HttpTransport, Result};
use serde::Deserialize;
use serde_json::Value;

// ============================================================================
// Search response
// ============================================================================

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    response: SearchPage,
}

#[derive(Debug, Deserialize)]
struct SearchPage {
    number_found: Count,
    #[serde(default)]
    docs: Vec<SearchDoc>,
}

#[derive(Debug, Deserialize)]
struct SearchDoc {
    url: String,
}

/// `number_found` arrives as a number or as a numeric string
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Count {
    Number(u64),
    Text(String),
}

impl Count {
    fn value(&self) -> Result<usize> {
        match self {
            Self::Number(n) => Ok(*n as usize),
            Self::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| ArchiveError::Decode(format!("invalid number_found: {s}"))),
        }
    }
}

// ============================================================================
// Archive Client
// ============================================================================

/// Client for the archive API
pub struct ArchiveClient<T = ReqwestTransport> {
    transport: T,
    config: ApiConfig,
}

impl ArchiveClient<ReqwestTransport> {
    /// Create from config using the reqwest transport
    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        let transport = ReqwestTransport::from_config(config)?;
        Ok(Self::with_transport(transport, config.clone()))
    }
}

impl<T: HttpTransport> ArchiveClient<T> {
    pub fn with_transport(transport: T, config: ApiConfig) -> Self {
        Self { transport, config }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// GET followed by the courtesy delay
    async fn get(&self, url: &str) -> Result<String> {
        tracing::debug!("GET {}", url);
        let body = self.transport.get_text(url).await?;

        let delay = self.config.request_delay();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        Ok(body)
    }

    /// Collect the URLs of all records matching a name within `after..before`
    ///
    /// Pages are requested until `number_found` results have been covered.
    /// A result count of zero, or a page without documents, ends the search.
    /// A zero page size is rejected before any request is made.
    pub async fn search(
        &self,
        person_name: &str,
        before: i32,
        after: i32,
        relation_type: &str,
    ) -> Result<Vec<String>> {
        let page_size = self.config.page_size;
        if page_size == 0 {
            return Err(ArchiveError::Config(
                "api.page_size must be greater than zero".to_string(),
            ));
        }

        let mut urls = Vec::new();
        let mut page = 0usize;

        loop {
            let start = page * page_size;
            let url = endpoint::search_url(
                &self.config,
                person_name,
                before,
                after,
                relation_type,
                start,
            );

            let body = self.get(&url).await?;
            let envelope: SearchEnvelope = serde_json::from_str(&body)
                .map_err(|e| ArchiveError::Decode(format!("Invalid search response: {e}")))?;

            let found = envelope.response.number_found.value()?;
            let wanted = found.saturating_sub(start).min(page_size);
            let docs = envelope.response.docs;

            if wanted > 0 && docs.is_empty() {
                tracing::warn!(
                    "Search page at offset {} is empty although {} results were reported",
                    start,
                    found
                );
                break;
            }

            urls.extend(docs.into_iter().take(wanted).map(|d| d.url));
            page += 1;

            if page * page_size >= found {
                break;
            }
        }

        tracing::info!(
            "Search for {} ({}-{}, {}) returned {} records",
            person_name,
            after,
            before,
            relation_type,
            urls.len()
        );

        Ok(urls)
    }

    /// Fetch the A2A document behind a record URL
    ///
    /// Mapping-shaped bodies are the API's error payloads and come back as
    /// `FetchOutcome::ApiError`.
    pub async fn fetch(&self, url: &str) -> Result<FetchOutcome> {
        let endpoint = endpoint::document_url(&self.config, url)?;
        let body = self.get(&endpoint).await?;

        if body.trim().is_empty() {
            return Err(ArchiveError::EmptyResult(endpoint));
        }

        let value: Value = serde_json::from_str(&body)
            .map_err(|e| ArchiveError::Decode(format!("Invalid document from {endpoint}: {e}")))?;

        let outcome = FetchOutcome::from_json(value)?;
        if let FetchOutcome::ApiError(error) = &outcome {
            tracing::warn!(
                "API returned an error for {}: {}",
                url,
                error.message().unwrap_or("no description")
            );
        }

        Ok(outcome)
    }
}
