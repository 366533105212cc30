//! Search, fetch and merge
//!
//! A harvest runs one search, fetches every hit and merges the per-record
//! graphs. Records the archive refuses or that cannot be mapped are
//! reported and skipped; only network failures abort the run.

use openarch_core::{ArchiveError, FetchOutcome, Graph, HttpTransport, Result};
use openarch_extractor::DocumentExtractor;
use serde::Serialize;

use crate::ArchiveClient;

/// A record left out of the merged graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRecord {
    pub url: String,
    pub reason: String,
}

/// Outcome of a harvest
#[derive(Debug, Clone, Serialize)]
pub struct HarvestReport {
    /// Number of records merged into the graph
    pub records: usize,
    pub skipped: Vec<SkippedRecord>,
    pub graph: Graph,
}

impl<T: HttpTransport> ArchiveClient<T> {
    /// Search, fetch every hit and merge the graphs `extractor` builds
    pub async fn harvest<E>(
        &self,
        extractor: &E,
        person_name: &str,
        before: i32,
        after: i32,
        relation_type: &str,
    ) -> Result<HarvestReport>
    where
        E: DocumentExtractor<Output = Graph>,
    {
        let urls = self
            .search(person_name, before, after, relation_type)
            .await?;

        let mut graph = Graph::with_civ_namespaces();
        let mut records = 0;
        let mut skipped = Vec::new();

        for url in &urls {
            let doc = match self.fetch(url).await {
                Ok(FetchOutcome::Document(doc)) => doc,
                Ok(FetchOutcome::ApiError(error)) => {
                    let reason = error
                        .message()
                        .map(str::to_string)
                        .unwrap_or_else(|| error.description.to_string());
                    skipped.push(SkippedRecord {
                        url: url.clone(),
                        reason,
                    });
                    continue;
                }
                Err(e @ ArchiveError::Network(_)) => return Err(e),
                Err(e) => {
                    tracing::warn!("Skipping {}: {}", url, e);
                    skipped.push(SkippedRecord {
                        url: url.clone(),
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            match extractor.extract(&doc, url) {
                Ok(record_graph) => {
                    graph.merge(record_graph);
                    records += 1;
                }
                Err(e) => {
                    tracing::warn!("Skipping {}: {}", url, e);
                    skipped.push(SkippedRecord {
                        url: url.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        tracing::info!(
            "Harvested {} of {} records into {} triples",
            records,
            urls.len(),
            graph.len()
        );

        Ok(HarvestReport {
            records,
            skipped,
            graph,
        })
    }
}
