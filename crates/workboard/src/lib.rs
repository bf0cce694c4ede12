//! # workboard
//!
//! A warehouse work-order board backed by a spreadsheet store.
//!
//! Two components share one spreadsheet:
//!
//! - The **order submitter** ([`submit_orders`]) drops blank rows from the
//!   admin's grid, stamps the order date and initial status, and appends the
//!   rest to the order form table in one call.
//! - The **job board** ([`Board`]) reads the job board table, filters it by
//!   an inclusive [`DateRange`], lets workers edit a fixed set of columns,
//!   and writes each changed row back to the sheet row it came from.
//!
//! The store itself is any [`SheetStore`]: a directory of CSV files in
//! production, or a [`MemoryStore`] in tests.
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use workboard::prelude::*;
//!
//! let mut store = MemoryStore::new("Growth Checklist");
//! init_tables(&mut store, &TablesConfig::default()).unwrap();
//! store
//!     .append_rows(
//!         "Job Board",
//!         &[["2024-06-03", "OPT-1", "Hex bolt", "40", "", "", "", "", ""]
//!             .iter()
//!             .map(|s| s.to_string())
//!             .collect()],
//!         ValueInput::UserEntered,
//!     )
//!     .unwrap();
//!
//! let june = DateRange::new(
//!     NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
//! );
//! let LoadOutcome::Loaded(mut board) =
//!     Board::load(&store, "Job Board", june, EditPolicy::default()).unwrap()
//! else {
//!     panic!("expected rows");
//! };
//!
//! assert_eq!(board.view().rows()[0].get(Column::Status), "Waiting");
//! board.set_cell(0, Column::Status, "Done").unwrap();
//! let written = board.write_back(&mut store).unwrap();
//! assert_eq!(written.rows[0].sheet_row(), 3);
//! ```

pub mod board;
pub mod config;
pub mod connection;
pub mod diff;
pub mod error;
pub mod export;
pub mod order;
pub mod prelude;
pub mod range;
pub mod schema;
pub mod session;
pub mod tint;
pub mod view;

pub use board::{Board, EditPolicy, LoadOutcome, RowAddress, WriteBack};
pub use config::{BoardConfig, BoardSettings, ConfigError, StoreConfig, TablesConfig, SECRET_ENV};
pub use connection::{create_store, init_tables, Connection};
pub use diff::dirty_rows;
pub use error::{BoardError, Result};
pub use export::{export_file_name, EXPORT_SHEET_NAME};
pub use order::{is_blank, submit_orders, OrderDraft, OrderField, OrderGrid, SubmitOutcome};
pub use range::{parse_store_date, DateRange};
pub use schema::{Column, Status};
pub use session::{Mode, Notice, Session};
pub use tint::{row_tints, RowTint};
pub use view::{normalize_text, BoardView, ViewRow};

// Re-export store types
pub use workboard_core::{CellRange, MemoryStore, Row, SheetStore, StoreCall, StoreOp, ValueInput};
pub use workboard_csv::CsvStore;
