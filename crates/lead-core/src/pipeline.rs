//! Staged cleaning run.
//!
//! Each stage is its own type and every transition consumes the previous
//! stage, so a run can only move forward. Starting over means building a new
//! [`CleaningRun`].

use std::fmt;
use std::time::Instant;

use lead_map::{KeywordTable, classify_with};
use lead_model::{
    CleanOptions, ExtraColumns, NormalizedRecord, Result, Role, RoleMap, Row, Table,
};
use lead_normalize::{canonicalize_address, normalize_field, split_full_name};
use serde::Serialize;
use tracing::{debug, info, info_span};

use crate::dedupe::{DedupeOutcome, dedupe};
use crate::output::{OutputColumn, build_table, output_columns};

/// Pipeline stage reached by a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Idle,
    Classified,
    Normalized,
    Deduped,
    Done,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Idle => "idle",
            Stage::Classified => "classified",
            Stage::Normalized => "normalized",
            Stage::Deduped => "deduped",
            Stage::Done => "done",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Counts describing a finished run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub input_rows: usize,
    pub output_rows: usize,
    pub dropped_blank_address: usize,
    pub dropped_duplicates: usize,
    /// Source headers no role claimed, whether or not they were kept.
    pub unmapped_columns: Vec<String>,
    pub name_split: bool,
    /// False when no key role was assigned and dedupe was a no-op.
    pub dedupe_applied: bool,
    pub stage: Stage,
}

/// Output of a completed run.
#[derive(Debug, Clone)]
pub struct CleanResult {
    pub table: Table,
    pub roles: RoleMap,
    pub summary: RunSummary,
}

/// A run that has not classified its columns yet.
#[derive(Debug, Clone)]
pub struct CleaningRun<'a> {
    table: &'a Table,
    options: CleanOptions,
    keywords: KeywordTable,
}

impl<'a> CleaningRun<'a> {
    pub fn new(table: &'a Table, options: CleanOptions) -> Self {
        Self {
            table,
            options,
            keywords: KeywordTable::default(),
        }
    }

    /// Replaces the keyword table used for classification.
    pub fn with_keywords(mut self, keywords: KeywordTable) -> Self {
        self.keywords = keywords;
        self
    }

    pub fn stage(&self) -> Stage {
        Stage::Idle
    }

    pub fn classify(self) -> ClassifiedRun<'a> {
        let _span = info_span!("classify").entered();
        let start = Instant::now();
        let headers = self.table.headers();
        let roles = classify_with(headers, &self.keywords);
        let name_split = roles.name_split_required() && self.options.split_full_name;

        // A full-name column that is not split is carried as an ordinary
        // unmapped column.
        let unmapped: Vec<String> = headers
            .iter()
            .filter(|header| {
                !roles
                    .assigned()
                    .any(|(role, h)| h == header.as_str() && (role != Role::FullName || name_split))
            })
            .cloned()
            .collect();
        let passthrough = match self.options.extra_columns {
            ExtraColumns::Keep => unmapped
                .iter()
                .filter_map(|header| self.table.column_index(header))
                .collect(),
            ExtraColumns::Drop => Vec::new(),
        };

        for (role, header) in roles.assigned() {
            debug!(role = %role, header, "column assigned");
        }
        info!(
            assigned = roles.assigned().count(),
            unmapped = unmapped.len(),
            name_split,
            duration_ms = start.elapsed().as_millis(),
            "columns classified"
        );

        ClassifiedRun {
            table: self.table,
            options: self.options,
            roles,
            name_split,
            unmapped,
            passthrough,
        }
    }
}

/// A run whose column roles are fixed.
#[derive(Debug, Clone)]
pub struct ClassifiedRun<'a> {
    table: &'a Table,
    options: CleanOptions,
    roles: RoleMap,
    name_split: bool,
    unmapped: Vec<String>,
    /// Source column indices copied into each record.
    passthrough: Vec<usize>,
}

impl<'a> ClassifiedRun<'a> {
    pub fn stage(&self) -> Stage {
        Stage::Classified
    }

    pub fn roles(&self) -> &RoleMap {
        &self.roles
    }

    pub fn unmapped_columns(&self) -> &[String] {
        &self.unmapped
    }

    /// Normalizes every row independently.
    pub fn normalize(self) -> NormalizedRun<'a> {
        let _span = info_span!("normalize").entered();
        let start = Instant::now();
        let columns: Vec<(Role, Option<usize>)> = self
            .roles
            .assigned()
            .map(|(role, header)| (role, self.table.column_index(header)))
            .collect();

        let records: Vec<NormalizedRecord> = self
            .table
            .rows()
            .iter()
            .enumerate()
            .map(|(index, row)| self.normalize_row(index, row, &columns))
            .collect();

        info!(
            records = records.len(),
            duration_ms = start.elapsed().as_millis(),
            "rows normalized"
        );
        NormalizedRun {
            classified: self,
            records,
        }
    }

    fn normalize_row(
        &self,
        index: usize,
        row: &Row,
        columns: &[(Role, Option<usize>)],
    ) -> NormalizedRecord {
        let mut record = NormalizedRecord::new(index);
        for (role, column) in columns {
            let cell = column.and_then(|idx| row.get(idx));
            match role {
                Role::Address => {
                    record.address = Some(canonicalize_address(cell.unwrap_or_default()));
                }
                Role::FullName => {
                    if self.name_split {
                        let (first, last) = split_full_name(cell.unwrap_or_default());
                        record.values.insert(Role::FirstName, first);
                        record.values.insert(Role::LastName, last);
                    }
                }
                role => {
                    record
                        .values
                        .insert(*role, normalize_field(*role, cell, &self.options));
                }
            }
        }
        record.passthrough = self
            .passthrough
            .iter()
            .map(|idx| row.get(*idx).map(str::to_string))
            .collect();
        record
    }
}

/// A run holding one normalized record per source row.
#[derive(Debug, Clone)]
pub struct NormalizedRun<'a> {
    classified: ClassifiedRun<'a>,
    records: Vec<NormalizedRecord>,
}

impl<'a> NormalizedRun<'a> {
    pub fn stage(&self) -> Stage {
        Stage::Normalized
    }

    pub fn roles(&self) -> &RoleMap {
        &self.classified.roles
    }

    pub fn records(&self) -> &[NormalizedRecord] {
        &self.records
    }

    /// Collapses duplicate records. Always taken; with no key roles this is a
    /// no-op.
    pub fn dedupe(self) -> DedupedRun<'a> {
        let _span = info_span!("dedupe").entered();
        let start = Instant::now();
        let key_roles = self.classified.roles.key_roles();
        let applied = !key_roles.is_empty();
        let outcome = dedupe(self.records, &key_roles);
        info!(
            applied,
            kept = outcome.records.len(),
            dropped_blank_address = outcome.dropped_blank_address,
            dropped_duplicates = outcome.dropped_duplicates,
            duration_ms = start.elapsed().as_millis(),
            "records deduplicated"
        );
        DedupedRun {
            classified: self.classified,
            outcome,
            applied,
        }
    }
}

/// A run whose surviving records are final.
#[derive(Debug, Clone)]
pub struct DedupedRun<'a> {
    classified: ClassifiedRun<'a>,
    outcome: DedupeOutcome,
    applied: bool,
}

impl DedupedRun<'_> {
    pub fn stage(&self) -> Stage {
        Stage::Deduped
    }

    pub fn roles(&self) -> &RoleMap {
        &self.classified.roles
    }

    pub fn records(&self) -> &[NormalizedRecord] {
        &self.outcome.records
    }

    /// Canonical columns this run will emit.
    pub fn output_columns(&self) -> Vec<OutputColumn> {
        output_columns(&self.classified.roles, self.classified.name_split)
    }

    /// Shapes the output table and closes the run.
    pub fn finish(self) -> Result<CleanResult> {
        let _span = info_span!("output").entered();
        let start = Instant::now();
        let classified = self.classified;
        let columns = output_columns(&classified.roles, classified.name_split);
        let passthrough_headers: Vec<String> = classified
            .passthrough
            .iter()
            .map(|idx| classified.table.headers()[*idx].clone())
            .collect();
        let table = build_table(&self.outcome.records, &columns, &passthrough_headers)?;

        let summary = RunSummary {
            input_rows: classified.table.row_count(),
            output_rows: table.row_count(),
            dropped_blank_address: self.outcome.dropped_blank_address,
            dropped_duplicates: self.outcome.dropped_duplicates,
            unmapped_columns: classified.unmapped,
            name_split: classified.name_split,
            dedupe_applied: self.applied,
            stage: Stage::Done,
        };
        info!(
            columns = table.headers().len(),
            rows = table.row_count(),
            duration_ms = start.elapsed().as_millis(),
            "output table built"
        );
        Ok(CleanResult {
            table,
            roles: classified.roles,
            summary,
        })
    }
}

/// Runs every stage with the built-in keyword table.
pub fn run_pipeline(table: &Table, options: &CleanOptions) -> Result<CleanResult> {
    run_pipeline_with(table, options, &KeywordTable::default())
}

/// Runs every stage with a custom keyword table.
pub fn run_pipeline_with(
    table: &Table,
    options: &CleanOptions,
    keywords: &KeywordTable,
) -> Result<CleanResult> {
    let _span = info_span!("clean", rows = table.row_count()).entered();
    CleaningRun::new(table, *options)
        .with_keywords(keywords.clone())
        .classify()
        .normalize()
        .dedupe()
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> Table {
        let mut table = Table::new(headers.iter().map(|h| h.to_string()).collect()).unwrap();
        for row in rows {
            table
                .push_row(
                    row.iter()
                        .map(|cell| (!cell.is_empty()).then(|| cell.to_string()))
                        .collect(),
                )
                .unwrap();
        }
        table
    }

    #[test]
    fn stages_advance_in_order() {
        let input = table(&["Address", "Zip"], &[&["1 Elm St", "02108"]]);
        let run = CleaningRun::new(&input, CleanOptions::default());
        assert_eq!(run.stage(), Stage::Idle);
        let run = run.classify();
        assert_eq!(run.stage(), Stage::Classified);
        let run = run.normalize();
        assert_eq!(run.stage(), Stage::Normalized);
        assert_eq!(run.records().len(), 1);
        let run = run.dedupe();
        assert_eq!(run.stage(), Stage::Deduped);
        let result = run.finish().unwrap();
        assert_eq!(result.summary.stage, Stage::Done);
    }

    #[test]
    fn unsplit_full_name_is_passed_through() {
        let input = table(&["Owner Name", "Address"], &[&["JANE DOE", "1 Elm St"]]);
        let options = CleanOptions::default().with_split_full_name(false);
        let result = run_pipeline(&input, &options).unwrap();
        assert_eq!(
            result.table.headers(),
            ["Address Line 1", "Address Line 2", "Owner Name"]
        );
        assert_eq!(result.table.cell(0, "Owner Name"), Some("JANE DOE"));
        assert!(!result.summary.name_split);
        assert_eq!(result.summary.unmapped_columns, vec!["Owner Name"]);
    }

    #[test]
    fn missing_cells_normalize_to_empty_strings() {
        let input = table(&["Address", "City"], &[&["1 Elm St", ""]]);
        let result = run_pipeline(&input, &CleanOptions::default()).unwrap();
        assert_eq!(result.table.cell(0, "City"), Some(""));
        assert_eq!(result.table.cell(0, "Address Line 2"), Some(""));
    }
}
