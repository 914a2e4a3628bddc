//! In-memory tabular data exchanged with the loader and writer.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// One row of a [`Table`], positionally aligned to the table headers.
///
/// `None` marks an absent cell, which is distinct from an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    cells: Vec<Option<String>>,
}

impl Row {
    pub fn cells(&self) -> &[Option<String>] {
        &self.cells
    }

    /// Returns the cell at `index`, flattening absent cells and out-of-range
    /// indices to `None`.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.cells.get(index).and_then(|cell| cell.as_deref())
    }
}

/// Ordered headers plus ordered rows.
///
/// Headers are unique and case-preserving. Every row carries exactly one cell
/// per header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    /// Creates an empty table, rejecting duplicate header names.
    pub fn new(headers: Vec<String>) -> Result<Self> {
        let mut seen = BTreeSet::new();
        for header in &headers {
            if !seen.insert(header.as_str()) {
                return Err(ModelError::DuplicateHeader(header.clone()));
            }
        }
        Ok(Self {
            headers,
            rows: Vec::new(),
        })
    }

    /// Appends a row. Short rows are padded with absent cells; rows wider
    /// than the header are rejected.
    pub fn push_row(&mut self, mut cells: Vec<Option<String>>) -> Result<()> {
        if cells.len() > self.headers.len() {
            return Err(ModelError::RowWidth {
                row: self.rows.len(),
                expected: self.headers.len(),
                found: cells.len(),
            });
        }
        cells.resize(self.headers.len(), None);
        self.rows.push(Row { cells });
        Ok(())
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }

    /// Looks up a cell by row index and header name.
    pub fn cell(&self, row: usize, header: &str) -> Option<&str> {
        let index = self.column_index(header)?;
        self.rows.get(row)?.get(index)
    }
}
