//! Prelude module - common imports for workboard users
//!
//! ```rust
//! use workboard::prelude::*;
//! ```

pub use crate::{
    // Job board
    Board,
    // Config
    BoardConfig,
    BoardError,
    BoardView,
    Column,
    Connection,
    // Store types
    CsvStore,
    DateRange,
    EditPolicy,
    LoadOutcome,
    MemoryStore,
    Mode,
    Notice,
    // Orders
    OrderDraft,
    OrderGrid,
    Result,
    RowTint,
    Session,
    SheetStore,
    Status,
    SubmitOutcome,
    TablesConfig,
    ValueInput,
    WriteBack,

    init_tables,
    submit_orders,
};
