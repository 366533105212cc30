//! In-memory triple graph
//!
//! A set of subject-predicate-object triples with namespace bindings.
//! Subjects and predicates are IRIs; objects are IRIs or literals.
//! Insertion order is kept and duplicate triples are ignored.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::vocab;

/// Object position of a triple
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Term {
    Iri {
        value: String,
    },
    Literal {
        value: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        datatype: Option<String>,
    },
}

impl Term {
    pub fn iri(value: impl Into<String>) -> Self {
        Self::Iri {
            value: value.into(),
        }
    }

    /// Plain string literal
    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal {
            value: value.into(),
            datatype: None,
        }
    }

    /// Literal with a datatype IRI
    pub fn typed(value: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self::Literal {
            value: value.into(),
            datatype: Some(datatype.into()),
        }
    }

    /// `xsd:date` literal
    pub fn date(value: impl Into<String>) -> Self {
        Self::typed(value, vocab::XSD_DATE)
    }

    pub fn value(&self) -> &str {
        match self {
            Self::Iri { value } | Self::Literal { value, .. } => value,
        }
    }

    pub fn datatype(&self) -> Option<&str> {
        match self {
            Self::Literal { datatype, .. } => datatype.as_deref(),
            Self::Iri { .. } => None,
        }
    }
}

/// A single fact
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Triple {
    pub subject: String,
    pub predicate: String,
    pub object: Term,
}

impl Triple {
    pub fn new(subject: impl Into<String>, predicate: impl Into<String>, object: Term) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object,
        }
    }
}

/// Triple set with namespace bindings
#[derive(Debug, Clone, Default, Serialize)]
pub struct Graph {
    namespaces: BTreeMap<String, String>,
    triples: Vec<Triple>,
    #[serde(skip)]
    seen: HashSet<Triple>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Graph with the `civ` and `schema` prefixes bound
    pub fn with_civ_namespaces() -> Self {
        let mut graph = Self::new();
        graph.bind("civ", vocab::CIV_NS);
        graph.bind("schema", vocab::SCHEMA_NS);
        graph
    }

    /// Bind a prefix; an existing binding for the prefix is kept
    pub fn bind(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        self.namespaces
            .entry(prefix.into())
            .or_insert_with(|| namespace.into());
    }

    pub fn namespace(&self, prefix: &str) -> Option<&str> {
        self.namespaces.get(prefix).map(String::as_str)
    }

    /// Add a triple; returns false if it was already present
    pub fn add(
        &mut self,
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: Term,
    ) -> bool {
        self.insert(Triple::new(subject, predicate, object))
    }

    pub fn insert(&mut self, triple: Triple) -> bool {
        if self.seen.contains(&triple) {
            return false;
        }
        self.seen.insert(triple.clone());
        self.triples.push(triple);
        true
    }

    pub fn contains(&self, triple: &Triple) -> bool {
        self.seen.contains(triple)
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Triples matching the given pattern; `None` matches anything
    pub fn matching(
        &self,
        subject: Option<&str>,
        predicate: Option<&str>,
        object: Option<&Term>,
    ) -> Vec<&Triple> {
        self.triples
            .iter()
            .filter(|t| {
                subject.map_or(true, |s| t.subject == s)
                    && predicate.map_or(true, |p| t.predicate == p)
                    && object.map_or(true, |o| &t.object == o)
            })
            .collect()
    }

    /// Objects of all `(subject, predicate, _)` triples
    pub fn objects(&self, subject: &str, predicate: &str) -> Vec<&Term> {
        self.matching(Some(subject), Some(predicate), None)
            .into_iter()
            .map(|t| &t.object)
            .collect()
    }

    /// Merge another graph into this one
    ///
    /// Namespace bindings of `self` win over those of `other`.
    pub fn merge(&mut self, other: Graph) {
        for (prefix, ns) in other.namespaces {
            self.bind(prefix, ns);
        }
        for triple in other.triples {
            self.insert(triple);
        }
    }
}
