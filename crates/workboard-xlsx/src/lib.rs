//! # workboard-xlsx
//!
//! XLSX (Office Open XML) writer for exporting a single table view.
//!
//! Only what an export needs is supported: one worksheet, text cells, a bold
//! header row and an optional solid background fill per data row.

pub mod error;
pub mod sheet;
pub mod writer;

mod styles;

pub use error::{XlsxError, XlsxResult};
pub use sheet::SheetExport;
pub use writer::XlsxWriter;
