//! Per-row background tints for the job board

use std::collections::HashMap;

use workboard_core::Color;

use crate::schema::{Column, Status};
use crate::view::BoardView;

/// Tint tag for one displayed row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowTint {
    /// Status is done
    Done,
    /// Date group with even position
    Even,
    /// Date group with odd position
    Odd,
}

impl RowTint {
    pub const DONE_COLOR: Color = Color::rgb(0xCC, 0xFF, 0xCC);
    pub const EVEN_COLOR: Color = Color::WHITE;
    pub const ODD_COLOR: Color = Color::rgb(0xF2, 0xF6, 0xFC);

    pub fn color(self) -> Color {
        match self {
            RowTint::Done => Self::DONE_COLOR,
            RowTint::Even => Self::EVEN_COLOR,
            RowTint::Odd => Self::ODD_COLOR,
        }
    }
}

/// Tint every row of `view`
///
/// Rows whose trimmed status is exactly `Done` get [`RowTint::Done`]. All other rows alternate
/// between even and odd by date value: each distinct date gets the next
/// parity the first time it is seen, so rows sharing a date always match.
/// Done rows still claim a parity for their date.
pub fn row_tints(view: &BoardView) -> Vec<RowTint> {
    let mut groups: HashMap<&str, usize> = HashMap::new();
    view.iter()
        .map(|row| {
            let next = groups.len();
            let group = *groups.entry(row.get(Column::Date)).or_insert(next);
            if row.get(Column::Status).trim() == Status::Done.label() {
                RowTint::Done
            } else if group % 2 == 0 {
                RowTint::Even
            } else {
                RowTint::Odd
            }
        })
        .collect()
}
