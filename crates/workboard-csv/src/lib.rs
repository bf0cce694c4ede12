//! # workboard-csv
//!
//! A [`SheetStore`](workboard_core::SheetStore) kept on disk as CSV files.
//!
//! A spreadsheet is a directory under the store root and each table is one
//! `<table>.csv` file inside it. Appends go straight to the end of the file;
//! range updates rewrite the table through a temporary file.

mod error;
mod options;
mod reader;
mod store;
mod writer;

pub use error::{CsvError, CsvResult};
pub use options::{CsvStoreOptions, LineTerminator};
pub use store::CsvStore;
