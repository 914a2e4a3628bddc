use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("duplicate header: {0}")]
    DuplicateHeader(String),
    #[error("row {row} has {found} cells but the table has {expected} headers")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;
