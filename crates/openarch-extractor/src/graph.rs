//! Graph extraction
//!
//! Converts a record into civil-registration facts: one `civ:` event, one
//! `schema:Person` per person, role properties from the event to each
//! person, and gender/occupation literals.

use openarch_core::vocab::{self, RDF_TYPE};
use openarch_core::{
    ApiConfig, ArchiveConfig, Gender, GenderPolicy, Graph, RawDocument, Result, Term,
};

use crate::normalize::normalize_name;
use crate::roles::RoleTable;
use crate::DocumentExtractor;

// ============================================================================
// Graph Extractor
// ============================================================================

/// Builds a graph from one document
#[derive(Debug, Clone)]
pub struct GraphExtractor {
    /// Site prefix stripped from the URL to form the registration id
    site_url: String,
    /// Derived-gender behaviour for persons without a role
    gender_policy: GenderPolicy,
}

impl Default for GraphExtractor {
    fn default() -> Self {
        Self {
            site_url: ApiConfig::default().site_url,
            gender_policy: GenderPolicy::default(),
        }
    }
}

impl GraphExtractor {
    pub fn new(site_url: impl Into<String>, gender_policy: GenderPolicy) -> Self {
        Self {
            site_url: site_url.into(),
            gender_policy,
        }
    }

    /// Create from config
    pub fn from_config(config: &ArchiveConfig) -> Self {
        Self::new(config.api.site_url.clone(), config.extract.gender_policy)
    }

    pub fn with_gender_policy(mut self, policy: GenderPolicy) -> Self {
        self.gender_policy = policy;
        self
    }

    /// Registration id: the URL without the site prefix, `:` replaced by `_`
    pub fn registration_id(&self, url: &str) -> String {
        url.replace(&self.site_url, "").replace(':', "_")
    }

    /// Build the graph for `doc`, minting IRIs under `url`
    pub fn build(&self, doc: &RawDocument, url: &str) -> Result<Graph> {
        let record = doc.primary();
        let mut graph = Graph::with_civ_namespaces();

        // Event
        let event_type = record.event_type();
        let event_iri = format!("{url}#{event_type}");

        graph.add(
            &event_iri,
            RDF_TYPE,
            Term::iri(vocab::event_class(&event_type)),
        );
        graph.add(
            &event_iri,
            vocab::CIV_EVENT_LOCATION,
            Term::literal(record.place()),
        );
        graph.add(
            &event_iri,
            vocab::CIV_REGISTRATION_ID,
            Term::literal(self.registration_id(url)),
        );
        graph.add(
            &event_iri,
            vocab::CIV_EVENT_DATE,
            Term::date(event_date(&record.year(), &record.month(), &record.day())),
        );

        // Persons
        let roles = RoleTable::from_record(record)?;
        let mut derived = Gender::Unknown;

        for person in record.persons() {
            let pid = person.pid()?;
            let person_iri = format!("{url}#{pid}");

            graph.add(&person_iri, RDF_TYPE, Term::iri(vocab::SCHEMA_PERSON));
            graph.add(
                &person_iri,
                vocab::CIV_PERSON_ID,
                Term::literal(pid.replace(':', "_")),
            );
            graph.add(
                &person_iri,
                vocab::SCHEMA_GIVEN_NAME,
                Term::literal(normalize_name(&person.first_name())),
            );

            let prefix = person.prefix_last_name();
            if !prefix.is_empty() {
                graph.add(
                    &person_iri,
                    vocab::CIV_PREFIX_FAMILY_NAME,
                    Term::literal(normalize_name(&prefix)),
                );
            }

            graph.add(
                &person_iri,
                vocab::SCHEMA_FAMILY_NAME,
                Term::literal(normalize_name(&person.last_name())),
            );

            match roles.role(&pid) {
                Some(role) => {
                    graph.add(&event_iri, role.iri(), Term::iri(&person_iri));
                    derived = role.derived_gender();
                }
                None => {
                    tracing::debug!("Person {} has no role in {}", pid, url);
                    if self.gender_policy == GenderPolicy::Reset {
                        derived = Gender::Unknown;
                    }
                }
            }

            let gender = Gender::from_record(&person.gender()).unwrap_or(derived);
            if gender.is_known() {
                graph.add(
                    &person_iri,
                    vocab::SCHEMA_GENDER,
                    Term::literal(gender.as_str()),
                );
            }

            let occupation = person.profession();
            if !occupation.is_empty() {
                graph.add(
                    &person_iri,
                    vocab::SCHEMA_HAS_OCCUPATION,
                    Term::literal(occupation),
                );
            }
        }

        Ok(graph)
    }
}

impl DocumentExtractor for GraphExtractor {
    type Output = Graph;

    fn extract(&self, doc: &RawDocument, url: &str) -> Result<Graph> {
        self.build(doc, url)
    }
}

/// Build a graph with the default site prefix and gender policy
pub fn to_graph(doc: &RawDocument, url: &str) -> Result<Graph> {
    GraphExtractor::default().build(doc, url)
}

/// `YYYY-MM-DD` from date parts, without any calendar validation
///
/// Month and day are left-padded with zeros to width 2, so a missing part
/// becomes `00`.
pub fn event_date(year: &str, month: &str, day: &str) -> String {
    format!("{year}-{}-{}", zero_pad(month, 2), zero_pad(day, 2))
}

fn zero_pad(value: &str, width: usize) -> String {
    let len = value.chars().count();
    if len >= width {
        return value.to_string();
    }
    format!("{}{value}", "0".repeat(width - len))
}

// ============================================================================
// Tests
// ============================================================================
