//! Error types for CSV ingestion and output.

use std::path::PathBuf;

use lead_model::ModelError;
use thiserror::Error;

/// Errors raised while loading or writing CSV tables.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IngestError {
    /// Input file does not exist.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Input file exists but could not be opened.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV or invalid UTF-8.
    #[error("failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Input has no header row.
    #[error("CSV input is empty")]
    EmptyCsv,

    /// Two header cells share a name.
    #[error("duplicate column header '{header}'")]
    DuplicateHeader { header: String },

    /// Output could not be created or flushed.
    #[error("failed to write CSV to {target}: {source}")]
    Write {
        target: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Model(ModelError),
}

impl From<ModelError> for IngestError {
    fn from(error: ModelError) -> Self {
        match error {
            ModelError::DuplicateHeader(header) => IngestError::DuplicateHeader { header },
            other => IngestError::Model(other),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
