//! CSV store error types

use std::path::PathBuf;

use thiserror::Error;

/// Result type for CSV store operations
pub type CsvResult<T> = std::result::Result<T, CsvError>;

/// Errors that can occur in the CSV store
#[derive(Debug, Error)]
pub enum CsvError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV library error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Spreadsheet directory does not exist
    #[error("Spreadsheet directory not found: {}", .0.display())]
    MissingSpreadsheet(PathBuf),

    /// Table name cannot be used as a file name
    #[error("Invalid table name: {0:?}")]
    InvalidTableName(String),

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] workboard_core::Error),
}

impl From<CsvError> for workboard_core::Error {
    fn from(err: CsvError) -> Self {
        match err {
            CsvError::Core(inner) => inner,
            other => workboard_core::Error::backend(other),
        }
    }
}
