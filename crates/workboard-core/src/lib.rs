//! # workboard-core
//!
//! Core types shared by the workboard crates.
//!
//! This crate provides the pieces every store backend and the board itself
//! agree on:
//! - [`SheetStore`] - A row-addressable spreadsheet store made of named tables
//! - [`CellAddress`] and [`CellRange`] - A1-style addressing for range writes
//! - [`ValueInput`] - Raw vs user-entered write semantics
//! - [`MemoryStore`] - An in-process store that records every call
//! - [`Color`] - RGB colors used for row tints and export fills
//!
//! ## Example
//!
//! ```rust
//! use workboard_core::{CellRange, MemoryStore, SheetStore, ValueInput};
//!
//! let mut store = MemoryStore::new("Growth Checklist");
//! store.insert_table("Job Board", vec![
//!     vec!["Job Board".to_string()],
//!     vec!["Date".to_string(), "Status".to_string()],
//! ]);
//!
//! store
//!     .append_rows(
//!         "Job Board",
//!         &[vec!["2024-06-01".to_string(), String::new()]],
//!         ValueInput::UserEntered,
//!     )
//!     .unwrap();
//! store
//!     .update_range(
//!         "Job Board",
//!         &CellRange::parse("A3:B3").unwrap(),
//!         &[vec!["2024/06/01".to_string(), "Done".to_string()]],
//!         ValueInput::Raw,
//!     )
//!     .unwrap();
//!
//! let rows = store.read_all("Job Board").unwrap();
//! assert_eq!(rows[2], vec!["2024/06/01".to_string(), "Done".to_string()]);
//! ```

pub mod address;
pub mod color;
pub mod error;
pub mod input;
pub mod memory;
pub mod store;

pub use address::{CellAddress, CellRange};
pub use color::Color;
pub use error::{Error, Result};
pub use input::{coerce_user_entered, ValueInput, STORE_DATE_FORMAT};
pub use memory::{MemoryStore, StoreCall, StoreOp};
pub use store::{cell, patch_rows, Row, SheetStore};

/// Maximum number of rows in a table (spreadsheet grid limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a table (spreadsheet grid limit)
pub const MAX_COLS: u16 = 16_384;
