//! Normalized lead records and their identity key.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::role::Role;

/// Street address split into the main line and the unit line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AddressLines {
    pub line1: String,
    pub line2: String,
}

/// A record derived from one source row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    /// Zero-based index of the source row.
    pub source_row: usize,
    /// Normalized values for assigned non-address roles. A full-name split
    /// stores its output under `FirstName` and `LastName`.
    pub values: BTreeMap<Role, String>,
    /// Present exactly when the address role is assigned.
    pub address: Option<AddressLines>,
    /// Unmapped source cells, aligned to the run's unmapped headers.
    pub passthrough: Vec<Option<String>>,
}

impl NormalizedRecord {
    pub fn new(source_row: usize) -> Self {
        Self {
            source_row,
            values: BTreeMap::new(),
            address: None,
            passthrough: Vec::new(),
        }
    }

    /// Normalized value for a role. The address role resolves to line 1.
    pub fn value(&self, role: Role) -> Option<&str> {
        match role {
            Role::Address => self.address.as_ref().map(|lines| lines.line1.as_str()),
            _ => self.values.get(&role).map(String::as_str),
        }
    }

    pub fn address_line1(&self) -> Option<&str> {
        self.address.as_ref().map(|lines| lines.line1.as_str())
    }

    pub fn address_line2(&self) -> Option<&str> {
        self.address.as_ref().map(|lines| lines.line2.as_str())
    }

    /// Builds the identity key from the given key roles. Missing values
    /// contribute an empty part so keys stay positionally comparable.
    pub fn dedupe_key(&self, key_roles: &[Role]) -> DedupeKey {
        DedupeKey(
            key_roles
                .iter()
                .map(|role| self.value(*role).unwrap_or_default().to_string())
                .collect(),
        )
    }
}

/// Normalized (AddressLine1, City, State, Zip) tuple restricted to the
/// assigned key roles. Equality is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DedupeKey(pub Vec<String>);
