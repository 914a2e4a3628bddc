//! TOML configuration file.
//!
//! ```toml
//! [options]
//! extra_columns = "drop"
//! zip_policy = "pad-numeric"
//! require_email_at = true
//! split_full_name = false
//!
//! [keywords]
//! address = ["situs"]
//! city = ["town"]
//! ```
//!
//! Keywords extend the built-in table for their role. Command-line flags are
//! applied on top of the file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use lead_map::KeywordTable;
use lead_model::{CleanOptions, ExtraColumns, Role, ZipPolicy};
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub options: CleanOptions,
    pub keywords: KeywordConfig,
}

/// Extra keywords per role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeywordConfig {
    pub address: Vec<String>,
    pub city: Vec<String>,
    pub state: Vec<String>,
    pub zip: Vec<String>,
    pub email: Vec<String>,
    pub phone: Vec<String>,
    pub first_name: Vec<String>,
    pub last_name: Vec<String>,
    pub full_name: Vec<String>,
}

impl KeywordConfig {
    fn for_role(&self, role: Role) -> &[String] {
        match role {
            Role::Address => &self.address,
            Role::City => &self.city,
            Role::State => &self.state,
            Role::Zip => &self.zip,
            Role::Email => &self.email,
            Role::Phone => &self.phone,
            Role::FirstName => &self.first_name,
            Role::LastName => &self.last_name,
            Role::FullName => &self.full_name,
        }
    }
}

impl ConfigFile {
    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).context("parse config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Built-in keyword table extended with the configured keywords.
    pub fn keyword_table(&self) -> KeywordTable {
        Role::ALL
            .into_iter()
            .fold(KeywordTable::default(), |table, role| {
                table.with_extra(role, self.keywords.for_role(role))
            })
    }
}

/// Command-line switches layered over the file options. Each switch only
/// moves its option away from the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    pub drop_extra_columns: bool,
    pub pad_zip: bool,
    pub require_email_at: bool,
    pub no_name_split: bool,
}

impl Overrides {
    pub fn apply(self, mut options: CleanOptions) -> CleanOptions {
        if self.drop_extra_columns {
            options.extra_columns = ExtraColumns::Drop;
        }
        if self.pad_zip {
            options.zip_policy = ZipPolicy::PadNumeric;
        }
        if self.require_email_at {
            options.require_email_at = true;
        }
        if self.no_name_split {
            options.split_full_name = false;
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = ConfigFile::parse("").unwrap();
        assert_eq!(config.options, CleanOptions::default());
        assert_eq!(config.keyword_table(), KeywordTable::default());
    }

    #[test]
    fn parses_options_and_keywords() {
        let config = ConfigFile::parse(
            r#"
            [options]
            extra_columns = "drop"
            zip_policy = "pad-numeric"

            [keywords]
            address = ["Situs"]
            "#,
        )
        .unwrap();
        assert_eq!(config.options.extra_columns, ExtraColumns::Drop);
        assert_eq!(config.options.zip_policy, ZipPolicy::PadNumeric);
        assert!(config.options.split_full_name);
        let table = config.keyword_table();
        assert!(table.keywords(Role::Address).iter().any(|k| k == "situs"));
    }

    #[test]
    fn flags_override_file_options() {
        let config = ConfigFile::parse("[options]\nrequire_email_at = true\n").unwrap();
        let overrides = Overrides {
            pad_zip: true,
            no_name_split: true,
            ..Overrides::default()
        };
        let options = overrides.apply(config.options);
        assert!(options.require_email_at);
        assert_eq!(options.zip_policy, ZipPolicy::PadNumeric);
        assert!(!options.split_full_name);
        assert_eq!(options.extra_columns, ExtraColumns::Keep);
    }

    #[test]
    fn rejects_unknown_sections() {
        assert!(ConfigFile::parse("[keywords]\ncounty = [\"parish\"]\n").is_err());
    }
}
