//! Row extraction
//!
//! Flattens a record into the field names used by the archive's own
//! spreadsheets: `plaats`, `gebeurtenis`, `jaar`, `maand`, `dag` and
//! per-role name parts.

use openarch_core::{RawDocument, Result, Row};

use crate::roles::RoleTable;
use crate::DocumentExtractor;

/// Build a row from a document
///
/// Fails with `RoleNotFound` when a person has no relation entry, since the
/// row keys are named after the role.
pub fn to_row(doc: &RawDocument) -> Result<Row> {
    let record = doc.primary();
    let mut row = Row::new();

    row.insert("plaats", record.place());
    row.insert("gebeurtenis", record.event_type());
    row.insert("jaar", record.year());
    row.insert("maand", record.month());
    row.insert("dag", record.day());

    let roles = RoleTable::from_record(record)?;

    for person in record.persons() {
        let pid = person.pid()?;
        let role = roles.require(&pid)?;

        row.insert(format!("voornaam{role}"), person.first_name());
        row.insert(format!("tussenvoegsel{role}"), person.prefix_last_name());
        row.insert(format!("achternaam{role}"), person.last_name());
    }

    Ok(row)
}

/// Build a row and record the source URL under `url`
pub fn to_row_with_url(doc: &RawDocument, url: &str) -> Result<Row> {
    let mut row = to_row(doc)?;
    row.insert("url", url);
    Ok(row)
}

/// Row extractor for use behind `DocumentExtractor`
#[derive(Debug, Clone, Copy, Default)]
pub struct RowExtractor;

impl DocumentExtractor for RowExtractor {
    type Output = Row;

    fn extract(&self, doc: &RawDocument, url: &str) -> Result<Row> {
        to_row_with_url(doc, url)
    }
}
