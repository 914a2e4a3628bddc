//! JSON report written by `clean --report`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use lead_core::{CleanResult, RunSummary};
use lead_model::RoleMap;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CleanReport<'a> {
    pub input: &'a Path,
    /// `None` for dry runs.
    pub output: Option<&'a Path>,
    pub detected_columns: &'a RoleMap,
    pub output_columns: &'a [String],
    pub summary: &'a RunSummary,
}

impl<'a> CleanReport<'a> {
    pub fn new(input: &'a Path, output: Option<&'a Path>, result: &'a CleanResult) -> Self {
        Self {
            input,
            output,
            detected_columns: &result.roles,
            output_columns: result.table.headers(),
            summary: &result.summary,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("serialize report")
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_json()?)
            .with_context(|| format!("write report {}", path.display()))
    }
}

/// `<stem>_cleaned.csv` next to the input file.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "leads".to_string());
    input.with_file_name(format!("{stem}_cleaned.csv"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_lands_beside_input() {
        assert_eq!(
            default_output_path(Path::new("data/leads.csv")),
            PathBuf::from("data/leads_cleaned.csv")
        );
        assert_eq!(
            default_output_path(Path::new("export")),
            PathBuf::from("export_cleaned.csv")
        );
    }
}
