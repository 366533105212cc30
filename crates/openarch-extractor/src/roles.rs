//! Role table
//!
//! Maps person key refs to relation types for one record. Built from the
//! relation list before any person is looked at.

use std::collections::HashMap;

use openarch_core::{A2aRecord, ArchiveError, Result, Role};

/// Person key ref -> relation type (spaces replaced by underscores)
#[derive(Debug, Clone, Default)]
pub struct RoleTable {
    roles: HashMap<String, String>,
}

impl RoleTable {
    /// Build the table from the record's relation list
    ///
    /// A later relation for the same person replaces an earlier one.
    pub fn from_record(record: &A2aRecord) -> Result<Self> {
        let mut roles = HashMap::new();
        for relation in record.relations() {
            let key_ref = relation.person_key_ref()?;
            let relation_type = relation.relation_type()?.replace(' ', "_");
            roles.insert(key_ref, relation_type);
        }
        Ok(Self { roles })
    }

    /// Relation type for a person, if any
    pub fn relation_type(&self, pid: &str) -> Option<&str> {
        self.roles.get(pid).map(String::as_str)
    }

    /// Relation type for a person, failing when it is missing
    pub fn require(&self, pid: &str) -> Result<&str> {
        self.relation_type(pid)
            .ok_or_else(|| ArchiveError::RoleNotFound {
                pid: pid.to_string(),
            })
    }

    pub fn role(&self, pid: &str) -> Option<Role> {
        self.relation_type(pid).map(Role::from_relation_type)
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}
