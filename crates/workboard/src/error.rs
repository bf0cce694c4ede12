//! Error types for the board

use thiserror::Error;

use crate::session::Mode;

/// Result type alias using [`BoardError`]
pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors raised by order submission and the job board
///
/// "Nothing to save", "no orders" and "no matching orders" are not errors;
/// they are reported through [`SubmitOutcome`](crate::SubmitOutcome) and
/// [`LoadOutcome`](crate::LoadOutcome).
#[derive(Debug, Error)]
pub enum BoardError {
    /// The store could not be opened at startup
    #[error("Store is not connected: {0}")]
    Offline(String),

    /// A store call failed
    #[error("Store error: {0}")]
    Store(#[from] workboard_core::Error),

    /// Required columns are absent from the header row
    #[error("Table is missing columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// A display column is not where write-back expects it
    #[error("Column {column:?} must be in column {expected}, found {found:?}")]
    ColumnLayout {
        column: String,
        expected: String,
        found: String,
    },

    /// No display column matches a name
    #[error("Unknown column: {0:?}")]
    UnknownColumn(String),

    /// Attempt to edit a read-only column
    #[error("Column {0:?} is read-only")]
    ReadOnly(String),

    /// Value outside a column's allowed options
    #[error("{value:?} is not a valid {column} option")]
    InvalidOption { column: String, value: String },

    /// Board row index out of range
    #[error("Row {row} is out of range (board has {len} rows)")]
    RowOutOfRange { row: usize, len: usize },

    /// A write-back stopped partway
    #[error("Failed to write sheet row {row} after {written} row(s) were saved: {source}")]
    WriteBack {
        row: u32,
        written: usize,
        #[source]
        source: workboard_core::Error,
    },

    /// Action belongs to the other mode
    #[error("Cannot {action} in {mode} mode")]
    WrongMode { action: &'static str, mode: Mode },

    /// Refresh requested before anything was loaded
    #[error("No job board is loaded")]
    NotLoaded,

    /// Export failed
    #[error("Export failed: {0}")]
    Export(#[from] workboard_xlsx::XlsxError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
