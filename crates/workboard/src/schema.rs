//! Table layouts, display columns and status values

use std::fmt;
use std::str::FromStr;

use workboard_core::Row;

use crate::error::BoardError;

/// Rows before the first data row: a title row, then the header row
pub const PREAMBLE_ROWS: usize = 2;

/// 1-based sheet row of the first data row
pub const FIRST_DATA_ROW: u32 = PREAMBLE_ROWS as u32 + 1;

/// Number of display columns, and the width of every write-back range
pub const DISPLAY_WIDTH: u16 = 9;

/// First column of the write-back range (column A)
pub const FIRST_DISPLAY_COLUMN: u16 = 0;

/// Order form columns, in the order rows are appended
pub const ORDER_FORM_HEADER: [&str; 9] = [
    "Order Date",
    "Option ID",
    "Item Name",
    "Target Qty",
    "Admin Comment",
    "Status",
    "Completed Qty",
    "Worker",
    "Worker Comment",
];

/// Roster entry that is always accepted for the worker column
pub const OTHER_WORKER: &str = "Other";

/// Title and header rows for a new table
pub fn preamble(title: &str, header: &[&str]) -> Vec<Row> {
    vec![
        vec![title.to_string()],
        header.iter().map(|h| h.to_string()).collect(),
    ]
}

/// A job board column shown to workers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Date,
    OptionId,
    ItemName,
    TargetQty,
    CompletedQty,
    Status,
    Worker,
    Instructions,
    WorkerComment,
}

impl Column {
    /// Display columns in write-back order (columns A through I)
    pub const DISPLAY: [Column; DISPLAY_WIDTH as usize] = [
        Column::Date,
        Column::OptionId,
        Column::ItemName,
        Column::TargetQty,
        Column::CompletedQty,
        Column::Status,
        Column::Worker,
        Column::Instructions,
        Column::WorkerComment,
    ];

    /// Header name in the job board table
    pub fn header(self) -> &'static str {
        match self {
            Column::Date => "Date",
            Column::OptionId => "Option ID",
            Column::ItemName => "Item Name",
            Column::TargetQty => "Target Qty",
            Column::CompletedQty => "Completed Qty",
            Column::Status => "Status",
            Column::Worker => "Worker",
            Column::Instructions => "Instructions",
            Column::WorkerComment => "Worker Comment",
        }
    }

    /// Short snake_case key, used on the command line
    pub fn key(self) -> &'static str {
        match self {
            Column::Date => "date",
            Column::OptionId => "option_id",
            Column::ItemName => "item_name",
            Column::TargetQty => "target_qty",
            Column::CompletedQty => "completed_qty",
            Column::Status => "status",
            Column::Worker => "worker",
            Column::Instructions => "instructions",
            Column::WorkerComment => "worker_comment",
        }
    }

    /// Position within [`Column::DISPLAY`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Whether workers may edit this column
    pub fn is_editable(self) -> bool {
        !matches!(
            self,
            Column::Date | Column::OptionId | Column::ItemName | Column::TargetQty
        )
    }

    /// Display headers in order
    pub fn display_headers() -> Vec<&'static str> {
        Self::DISPLAY.iter().map(|c| c.header()).collect()
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

impl FromStr for Column {
    type Err = BoardError;

    /// Accepts the key (`worker_comment`) or the header (`Worker Comment`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Column::DISPLAY
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(s) || c.header().eq_ignore_ascii_case(s))
            .ok_or_else(|| BoardError::UnknownColumn(s.to_string()))
    }
}

/// Work status of a job row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Waiting,
    Ready,
    Done,
    BlockedLowStock,
    Deferred,
    Other,
}

impl Status {
    /// Every status, in the order offered to workers
    pub const ALL: [Status; 6] = [
        Status::Waiting,
        Status::Ready,
        Status::Done,
        Status::BlockedLowStock,
        Status::Deferred,
        Status::Other,
    ];

    /// Text stored in the table
    pub fn label(self) -> &'static str {
        match self {
            Status::Waiting => "Waiting",
            Status::Ready => "Ready",
            Status::Done => "Done",
            Status::BlockedLowStock => "Blocked (low stock)",
            Status::Deferred => "Deferred",
            Status::Other => "Other",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Status {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Status::ALL
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| BoardError::InvalidOption {
                column: Column::Status.header().to_string(),
                value: s.to_string(),
            })
    }
}
