//! Semantic column roles and the per-table role assignment.

use std::collections::BTreeMap;
use std::fmt;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Semantic role a source column can play in a lead record.
///
/// Declaration order is the order roles are evaluated and reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Address,
    City,
    State,
    Zip,
    Email,
    Phone,
    FirstName,
    LastName,
    FullName,
}

impl Role {
    pub const ALL: [Role; 9] = [
        Role::Address,
        Role::City,
        Role::State,
        Role::Zip,
        Role::Email,
        Role::Phone,
        Role::FirstName,
        Role::LastName,
        Role::FullName,
    ];

    /// Roles that participate in the deduplication key.
    pub const KEY_ROLES: [Role; 4] = [Role::Address, Role::City, Role::State, Role::Zip];

    /// Human-readable label used in reports.
    pub fn label(self) -> &'static str {
        match self {
            Role::Address => "Address",
            Role::City => "City",
            Role::State => "State",
            Role::Zip => "Zip",
            Role::Email => "Email",
            Role::Phone => "Phone",
            Role::FirstName => "First Name",
            Role::LastName => "Last Name",
            Role::FullName => "Full Name",
        }
    }

    pub fn is_key_role(self) -> bool {
        Self::KEY_ROLES.contains(&self)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Assignment of semantic roles to source headers for one table.
///
/// Built once by the column classifier and never mutated afterwards. A role
/// maps to at most one header; a header may serve several roles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleMap {
    assignments: BTreeMap<Role, String>,
    name_split_required: bool,
}

impl RoleMap {
    pub fn new(
        assignments: impl IntoIterator<Item = (Role, String)>,
        name_split_required: bool,
    ) -> Self {
        Self {
            assignments: assignments.into_iter().collect(),
            name_split_required,
        }
    }

    /// Header assigned to `role`, or `None` when the role is unresolved.
    pub fn header(&self, role: Role) -> Option<&str> {
        self.assignments.get(&role).map(String::as_str)
    }

    pub fn is_assigned(&self, role: Role) -> bool {
        self.assignments.contains_key(&role)
    }

    /// Assigned roles in role order.
    pub fn assigned(&self) -> impl Iterator<Item = (Role, &str)> {
        self.assignments
            .iter()
            .map(|(role, header)| (*role, header.as_str()))
    }

    /// True when only a full-name column was found and it must be split into
    /// first and last name downstream.
    pub fn name_split_required(&self) -> bool {
        self.name_split_required
    }

    /// Assigned roles usable as deduplication key parts.
    pub fn key_roles(&self) -> Vec<Role> {
        Role::KEY_ROLES
            .into_iter()
            .filter(|role| self.is_assigned(*role))
            .collect()
    }

    /// True if any role claims `header`.
    pub fn claims(&self, header: &str) -> bool {
        self.assignments.values().any(|h| h == header)
    }

    /// Headers claimed by no role, in table order.
    pub fn unmapped_headers(&self, headers: &[String]) -> Vec<String> {
        headers
            .iter()
            .filter(|header| !self.claims(header))
            .cloned()
            .collect()
    }
}

/// Serializes as the detected-columns report: every role label mapped to its
/// header or `null`.
impl Serialize for RoleMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Role::ALL.len()))?;
        for role in Role::ALL {
            map.serialize_entry(role.label(), &self.header(role))?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RoleMap {
        RoleMap::new(
            [
                (Role::Address, "Property Address".to_string()),
                (Role::Zip, "Zip".to_string()),
                (Role::FullName, "Owner Name".to_string()),
            ],
            true,
        )
    }

    #[test]
    fn key_roles_follow_role_order() {
        assert_eq!(sample().key_roles(), vec![Role::Address, Role::Zip]);
    }

    #[test]
    fn unmapped_headers_keep_table_order() {
        let headers: Vec<String> = ["Notes", "Zip", "Property Address", "Owner Name", "APN"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(sample().unmapped_headers(&headers), vec!["Notes", "APN"]);
    }

    #[test]
    fn serializes_every_role_with_nulls() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["Address"], "Property Address");
        assert_eq!(json["Full Name"], "Owner Name");
        assert!(json["Email"].is_null());
        assert_eq!(json.as_object().unwrap().len(), Role::ALL.len());
    }
}
