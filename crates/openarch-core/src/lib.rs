//! openarch core - Domain models, traits, and shared types
//!
//! This crate defines the abstractions shared by the client, the
//! extractors and the CLI:
//! - A2A document model (`RawDocument`, `A2aRecord`, `FetchOutcome`)
//! - Flat attribute rows
//! - In-memory triple graph and the `civ`/`schema` vocabularies
//! - The civil-registration role table
//! - Common error types
//! - The HTTP transport seam
//! - Configuration management

pub mod config;
pub mod document;
pub mod graph;
pub mod role;
pub mod vocab;

pub use config::{ApiConfig, ArchiveConfig, ConfigError, ExtractConfig, GenderPolicy, LoggingConfig};
pub use document::{A2aRecord, ErrorResult, FetchOutcome, PersonEntry, RawDocument, RelationEntry};
pub use graph::{Graph, Term, Triple};
pub use role::{Gender, Role};

use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Core error types for archive operations
#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Empty URL: no document endpoint could be constructed")]
    EmptyUrl,

    #[error("Invalid record URL: {0}")]
    InvalidUrl(String),

    #[error("Empty result from {0}")]
    EmptyResult(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("No role found for person {pid}")]
    RoleNotFound { pid: String },

    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ArchiveError>;

// ============================================================================
// Rows
// ============================================================================

/// Flat attribute row built from one document
///
/// Keys are the Dutch field names used by the archive (`plaats`,
/// `gebeurtenis`, `jaar`, `maand`, `dag`) plus per-role name parts such
/// as `voornaamMoeder`. Role keys only exist for roles present in the
/// document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Row {
    fields: BTreeMap<String, String>,
}

impl Row {
    /// Create an empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing any previous value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Get a field value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over fields in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

// ============================================================================
// Traits
// ============================================================================

/// Transport used by the archive client to issue GET requests
///
/// The production implementation wraps reqwest; tests substitute an
/// in-memory transport keyed by URL.
#[async_trait::async_trait]
pub trait HttpTransport: Send + Sync {
    /// Fetch the body of `url` as text
    async fn get_text(&self, url: &str) -> Result<String>;
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_insert_and_get() {
        let mut row = Row::new();
        row.insert("plaats", "Utrecht");
        row.insert("plaats", "Leiden");

        assert_eq!(row.get("plaats"), Some("Leiden"));
        assert_eq!(row.len(), 1);
        assert!(!row.contains_key("jaar"));
    }

    #[test]
    fn test_row_iterates_in_key_order() {
        let mut row = Row::new();
        row.insert("plaats", "Utrecht");
        row.insert("dag", "7");
        row.insert("jaar", "2021");

        let fields: Vec<_> = row.iter().collect();
        assert_eq!(
            fields,
            vec![("dag", "7"), ("jaar", "2021"), ("plaats", "Utrecht")]
        );
    }

    #[test]
    fn test_row_serializes_as_flat_object() {
        let mut row = Row::new();
        row.insert("jaar", "1850");
        row.insert("dag", "");

        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json, serde_json::json!({"dag": "", "jaar": "1850"}));
    }

    #[test]
    fn test_error_display() {
        let err = ArchiveError::RoleNotFound {
            pid: "Person1".to_string(),
        };
        assert_eq!(err.to_string(), "No role found for person Person1");
    }
}
