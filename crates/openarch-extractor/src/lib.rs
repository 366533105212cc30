//! openarch extractor - document to row / graph mapping
//!
//! Turns fetched A2A documents into either a flat attribute row or a set
//! of civil-registration triples. Both extractors read the same record
//! and share the role table; they do not depend on each other.

use openarch_core::{RawDocument, Result};

/// Trait for document extractors
pub trait DocumentExtractor: Send + Sync {
    type Output;

    /// Extract from `doc`, which was fetched from `url`
    fn extract(&self, doc: &RawDocument, url: &str) -> Result<Self::Output>;
}

pub mod graph;
pub mod normalize;
pub mod roles;
pub mod row;

pub use graph::{event_date, to_graph, GraphExtractor};
pub use normalize::normalize_name;
pub use roles::RoleTable;
pub use row::{to_row, to_row_with_url, RowExtractor};
