//! Priority-ordered keyword table used to recognise column roles.

use lead_model::Role;

/// Built-in keywords per role, tried in order. Matching is a case-insensitive
/// substring test against each header.
const DEFAULT_KEYWORDS: &[(Role, &[&str])] = &[
    (
        Role::Address,
        &["address", "street", "property address", "prop address"],
    ),
    (Role::City, &["city", "property city"]),
    (Role::State, &["state", "property state"]),
    (Role::Zip, &["zip", "zip code", "postal"]),
    (Role::Email, &["email", "e-mail"]),
    (Role::Phone, &["phone", "mobile", "cell"]),
    (Role::FirstName, &["first name", "owner first", "first"]),
    (Role::LastName, &["last name", "owner last", "last", "surname"]),
    (
        Role::FullName,
        &["full name", "owner name", "contact name", "name"],
    ),
];

/// Keywords for one role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleKeywords {
    pub role: Role,
    pub keywords: Vec<String>,
}

/// The full (role, keywords) table, one entry per role in role order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordTable {
    entries: Vec<RoleKeywords>,
}

impl Default for KeywordTable {
    fn default() -> Self {
        let entries = Role::ALL
            .into_iter()
            .map(|role| RoleKeywords {
                role,
                keywords: DEFAULT_KEYWORDS
                    .iter()
                    .find(|(r, _)| *r == role)
                    .map(|(_, words)| words.iter().map(|w| (*w).to_string()).collect())
                    .unwrap_or_default(),
            })
            .collect();
        Self { entries }
    }
}

impl KeywordTable {
    /// Appends extra keywords for `role` after the built-in ones.
    ///
    /// Keywords are trimmed and lowercased; blanks and repeats are ignored.
    #[must_use]
    pub fn with_extra<I, S>(mut self, role: Role, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.role == role) {
            for keyword in keywords {
                let keyword = keyword.as_ref().trim().to_lowercase();
                if keyword.is_empty() || entry.keywords.contains(&keyword) {
                    continue;
                }
                entry.keywords.push(keyword);
            }
        }
        self
    }

    pub fn keywords(&self, role: Role) -> &[String] {
        self.entries
            .iter()
            .find(|e| e.role == role)
            .map(|e| e.keywords.as_slice())
            .unwrap_or_default()
    }

    pub fn entries(&self) -> &[RoleKeywords] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_covers_every_role() {
        let table = KeywordTable::default();
        for role in Role::ALL {
            assert!(!table.keywords(role).is_empty(), "{role} has no keywords");
        }
        assert_eq!(table.keywords(Role::Email), ["email", "e-mail"]);
    }

    #[test]
    fn extras_are_appended_lowercased_once() {
        let table = KeywordTable::default().with_extra(Role::Address, ["Situs", " situs ", "", "street"]);
        assert_eq!(
            table.keywords(Role::Address),
            ["address", "street", "property address", "prop address", "situs"]
        );
    }
}
