//! Configuration options for a cleaning run.

use serde::{Deserialize, Serialize};

/// What to do with source columns that no role claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExtraColumns {
    /// Append them unchanged after the canonical columns.
    #[default]
    Keep,
    /// Leave them out of the output.
    Drop,
}

/// Zip code normalization policy. Exactly one applies per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ZipPolicy {
    /// First run of five consecutive digits, otherwise empty.
    #[default]
    FirstDigitRun,
    /// Left-pad all-numeric values shorter than five digits with zeros
    /// (spreadsheet exports often lose leading zeros), otherwise behave as
    /// [`ZipPolicy::FirstDigitRun`].
    PadNumeric,
}

/// Options controlling a cleaning run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanOptions {
    /// Unmapped column policy.
    pub extra_columns: ExtraColumns,

    /// Zip normalization policy.
    pub zip_policy: ZipPolicy,

    /// Blank out normalized emails that lack an `@`.
    pub require_email_at: bool,

    /// Split a full-name column into first and last name when no dedicated
    /// first/last columns exist.
    pub split_full_name: bool,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            extra_columns: ExtraColumns::Keep,
            zip_policy: ZipPolicy::FirstDigitRun,
            require_email_at: false,
            split_full_name: true,
        }
    }
}

impl CleanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_extra_columns(mut self, policy: ExtraColumns) -> Self {
        self.extra_columns = policy;
        self
    }

    pub fn with_zip_policy(mut self, policy: ZipPolicy) -> Self {
        self.zip_policy = policy;
        self
    }

    pub fn with_require_email_at(mut self, enable: bool) -> Self {
        self.require_email_at = enable;
        self
    }

    pub fn with_split_full_name(mut self, enable: bool) -> Self {
        self.split_full_name = enable;
        self
    }
}
