//! A2A document model
//!
//! The document endpoint returns a list of records. Inside a record the API
//! wraps every value under a key of the same name
//! (`{"a2a_Year": {"a2a_Year": "1850"}}`), and `a2a_Person` /
//! `a2a_RelationEP` are a list when there are several entries and a bare
//! object when there is one. Both quirks are absorbed here so the
//! extractors always see sequences and plain strings.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::{ArchiveError, Result};

// ============================================================================
// Fetch outcome
// ============================================================================

/// Result of a document fetch: either the record list or the API's own error
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    Document(RawDocument),
    ApiError(ErrorResult),
}

impl FetchOutcome {
    /// Classify a decoded response body
    ///
    /// A JSON object is an error payload, a JSON list is a document.
    pub fn from_json(value: Value) -> Result<Self> {
        match value {
            Value::Object(_) => Ok(Self::ApiError(ErrorResult { description: value })),
            Value::Array(items) => Ok(Self::Document(RawDocument::from_records(items)?)),
            other => Err(ArchiveError::Decode(format!(
                "expected a list or an object, got {}",
                json_kind(&other)
            ))),
        }
    }

    pub fn document(self) -> Option<RawDocument> {
        match self {
            Self::Document(doc) => Some(doc),
            Self::ApiError(_) => None,
        }
    }
}

/// API error payload, wrapped rather than raised
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorResult {
    pub description: Value,
}

impl ErrorResult {
    /// The `error_description` text of the payload, if present
    pub fn message(&self) -> Option<&str> {
        self.description
            .get("error_description")
            .and_then(Value::as_str)
    }
}

// ============================================================================
// Documents
// ============================================================================

/// A fetched A2A document: one or more same-shaped records
#[derive(Debug, Clone)]
pub struct RawDocument {
    records: Vec<A2aRecord>,
}

impl RawDocument {
    /// Build from the decoded record list
    pub fn from_records(items: Vec<Value>) -> Result<Self> {
        if items.is_empty() {
            return Err(ArchiveError::MalformedDocument(
                "document contains no records".to_string(),
            ));
        }

        let records = items
            .into_iter()
            .map(A2aRecord::from_json)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { records })
    }

    /// Build from a JSON value that must be a record list
    pub fn from_json(value: Value) -> Result<Self> {
        match value {
            Value::Array(items) => Self::from_records(items),
            other => Err(ArchiveError::MalformedDocument(format!(
                "expected a record list, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// The record the extractors work on
    pub fn primary(&self) -> &A2aRecord {
        &self.records[0]
    }
}

/// One event record with its persons and role relations
#[derive(Debug, Clone)]
pub struct A2aRecord {
    raw: Map<String, Value>,
    persons: Vec<Value>,
    relations: Vec<Value>,
}

impl A2aRecord {
    pub fn from_json(value: Value) -> Result<Self> {
        let Value::Object(raw) = value else {
            return Err(ArchiveError::MalformedDocument(format!(
                "record is {}, expected an object",
                json_kind(&value)
            )));
        };

        let persons = as_sequence(raw.get("a2a_Person"));
        let relations = as_sequence(raw.get("a2a_RelationEP"));

        Ok(Self {
            raw,
            persons,
            relations,
        })
    }

    fn event(&self) -> Option<&Value> {
        self.raw.get("a2a_Event")
    }

    /// `a2a_Event.a2a_EventPlace.a2a_Place`
    pub fn place(&self) -> String {
        let event_place = self.event().and_then(|e| e.get("a2a_EventPlace"));
        nested_text(event_place, "a2a_Place")
    }

    /// `a2a_Event.a2a_EventType`, e.g. `Geboorte`
    pub fn event_type(&self) -> String {
        nested_text(self.event(), "a2a_EventType")
    }

    fn date_part(&self, key: &str) -> String {
        let date = self.event().and_then(|e| e.get("a2a_EventDate"));
        nested_text(date, key)
    }

    pub fn year(&self) -> String {
        self.date_part("a2a_Year")
    }

    pub fn month(&self) -> String {
        self.date_part("a2a_Month")
    }

    pub fn day(&self) -> String {
        self.date_part("a2a_Day")
    }

    /// Role relations in document order
    pub fn relations(&self) -> impl Iterator<Item = RelationEntry<'_>> {
        self.relations.iter().map(RelationEntry)
    }

    /// Persons in document order
    pub fn persons(&self) -> impl Iterator<Item = PersonEntry<'_>> {
        self.persons.iter().map(PersonEntry)
    }
}

/// A borrowed `a2a_RelationEP` entry
#[derive(Debug, Clone, Copy)]
pub struct RelationEntry<'a>(&'a Value);

impl<'a> RelationEntry<'a> {
    /// Person key this relation points at (strict)
    pub fn person_key_ref(&self) -> Result<String> {
        strict_text(self.0, "a2a_PersonKeyRef")
    }

    /// Relation type as sent by the API, e.g. `Vader van de bruid` (strict)
    pub fn relation_type(&self) -> Result<String> {
        strict_text(self.0, "a2a_RelationType")
    }
}

/// A borrowed `a2a_Person` entry
#[derive(Debug, Clone, Copy)]
pub struct PersonEntry<'a>(&'a Value);

impl<'a> PersonEntry<'a> {
    /// Person identifier, unique within the document
    pub fn pid(&self) -> Result<String> {
        self.0
            .get("pid")
            .and_then(scalar_text)
            .ok_or_else(|| ArchiveError::MalformedDocument("person without pid".to_string()))
    }

    fn name_part(&self, key: &str) -> String {
        nested_text(self.0.get("a2a_PersonName"), key)
    }

    pub fn first_name(&self) -> String {
        self.name_part("a2a_PersonNameFirstName")
    }

    pub fn prefix_last_name(&self) -> String {
        self.name_part("a2a_PersonNamePrefixLastName")
    }

    pub fn last_name(&self) -> String {
        self.name_part("a2a_PersonNameLastName")
    }

    /// Gender as stated in the record (`Man`, `Vrouw`, `Onbekend`, ...)
    pub fn gender(&self) -> String {
        nested_text(Some(self.0), "a2a_Gender")
    }

    pub fn profession(&self) -> String {
        nested_text(Some(self.0), "a2a_Profession")
    }
}

// ============================================================================
// Field helpers
// ============================================================================

/// Lenient double lookup: `outer[key][key]`, empty string when absent
fn nested_text(outer: Option<&Value>, key: &str) -> String {
    outer
        .and_then(|o| o.get(key))
        .and_then(|inner| inner.get(key))
        .and_then(scalar_text)
        .unwrap_or_default()
}

/// Strict double lookup used for relation entries
fn strict_text(outer: &Value, key: &str) -> Result<String> {
    outer
        .get(key)
        .and_then(|inner| inner.get(key))
        .and_then(scalar_text)
        .ok_or_else(|| ArchiveError::MalformedDocument(format!("relation without {key}")))
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn as_sequence(value: Option<&Value>) -> Vec<Value> {
    match value {
        Some(Value::Array(items)) => items.clone(),
        Some(Value::Null) | None => Vec::new(),
        Some(single) => vec![single.clone()],
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

// ============================================================================
// Tests
// ============================================================================
