//! CSV ingestion and output for lead tables.
//!
//! The loader turns a CSV file into a [`Table`](lead_model::Table): the first
//! record is the header row, empty cells become absent, ragged rows are
//! padded or truncated to the header width and blank rows are skipped. The
//! writer emits the header row followed by every row, with absent cells
//! written as empty fields.

pub mod error;
mod reader;
mod writer;

pub use error::{IngestError, Result};
pub use reader::{read_csv_from_reader, read_csv_table};
pub use writer::{write_csv_file, write_csv_table};
