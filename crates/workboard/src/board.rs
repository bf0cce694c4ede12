//! The job board: load, filter, edit and write back
//!
//! A [`Board`] is built from a full read of the job board table. It keeps
//! two copies of the filtered rows: the snapshot as loaded and the view the
//! worker edits. Write-back compares the two and pushes each changed row to
//! the sheet row it was loaded from, one range update per row.

use chrono::NaiveDate;
use tracing::{debug, info};
use workboard_core::{cell, CellAddress, CellRange, Row, SheetStore, ValueInput};

use crate::diff;
use crate::error::{BoardError, Result};
use crate::range::{parse_store_date, DateRange};
use crate::schema::{
    Column, Status, DISPLAY_WIDTH, FIRST_DATA_ROW, FIRST_DISPLAY_COLUMN, OTHER_WORKER,
    PREAMBLE_ROWS,
};
use crate::tint::{row_tints, RowTint};
use crate::view::{normalize_text, BoardView, ViewRow};

/// The sheet row a board row was loaded from (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowAddress(u32);

impl RowAddress {
    /// Address of the data row at `index` (0 is the first row after the preamble)
    pub fn from_data_index(index: usize) -> Self {
        Self(FIRST_DATA_ROW + index as u32)
    }

    pub fn sheet_row(self) -> u32 {
        self.0
    }

    /// The write-back span for this row, columns A through I
    pub fn range(self) -> Result<CellRange> {
        Ok(CellRange::row_span(self.0, FIRST_DISPLAY_COLUMN, DISPLAY_WIDTH)?)
    }
}

/// Which values workers may enter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditPolicy {
    roster: Vec<String>,
}

impl EditPolicy {
    pub fn new(roster: Vec<String>) -> Self {
        Self { roster }
    }

    /// Workers offered in the worker column, "Other" last
    pub fn worker_options(&self) -> Vec<&str> {
        self.roster
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(OTHER_WORKER))
            .collect()
    }

    /// Validate a new value for `column`, returning the text to store
    ///
    /// Status must be one of the known labels and is stored in canonical
    /// form. Worker must be blank or a roster entry. Other editable columns
    /// take any text.
    pub fn check(&self, column: Column, value: &str) -> Result<String> {
        if !column.is_editable() {
            return Err(BoardError::ReadOnly(column.header().to_string()));
        }
        match column {
            Column::Status => Ok(value.parse::<Status>()?.label().to_string()),
            Column::Worker => {
                let value = value.trim();
                if value.is_empty() {
                    return Ok(String::new());
                }
                self.worker_options()
                    .into_iter()
                    .find(|w| *w == value)
                    .map(str::to_string)
                    .ok_or_else(|| BoardError::InvalidOption {
                        column: column.header().to_string(),
                        value: value.to_string(),
                    })
            }
            _ => Ok(value.to_string()),
        }
    }
}

/// What a load produced
#[derive(Debug)]
pub enum LoadOutcome {
    /// The table holds nothing beyond its header rows
    NoOrders,
    /// No row falls inside the requested range
    NoMatches,
    Loaded(Board),
}

/// Rows pushed by a successful write-back
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteBack {
    pub rows: Vec<RowAddress>,
}

impl WriteBack {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A filtered, editable slice of the job board table
#[derive(Debug, Clone)]
pub struct Board {
    table: String,
    range: DateRange,
    addresses: Vec<RowAddress>,
    snapshot: BoardView,
    view: BoardView,
    policy: EditPolicy,
}

impl Board {
    /// Read `table` from the store and build the board for `range`
    pub fn load(
        store: &dyn SheetStore,
        table: &str,
        range: DateRange,
        policy: EditPolicy,
    ) -> Result<LoadOutcome> {
        let rows = store.read_all(table)?;
        Self::from_rows(table, &rows, range, policy)
    }

    /// Build the board from every row of the table, preamble included
    pub fn from_rows(
        table: &str,
        rows: &[Row],
        range: DateRange,
        policy: EditPolicy,
    ) -> Result<LoadOutcome> {
        if rows.len() <= PREAMBLE_ROWS {
            debug!(table, rows = rows.len(), "no data rows");
            return Ok(LoadOutcome::NoOrders);
        }

        let header = &rows[PREAMBLE_ROWS - 1];
        let position = |column: Column| header.iter().position(|h| h.trim() == column.header());

        let date_col = position(Column::Date)
            .ok_or_else(|| BoardError::MissingColumns(vec![Column::Date.header().to_string()]))?;

        let data = &rows[PREAMBLE_ROWS..];
        let mut matches: Vec<(NaiveDate, usize)> = data
            .iter()
            .enumerate()
            .filter_map(|(i, row)| {
                let date = parse_store_date(cell(row, date_col))?;
                range.contains(date).then_some((date, i))
            })
            .collect();

        if matches.is_empty() {
            debug!(table, %range, "no rows in range");
            return Ok(LoadOutcome::NoMatches);
        }

        let columns = display_positions(header)?;

        // sort_by_key is stable: rows sharing a date keep their sheet order
        matches.sort_by_key(|&(date, _)| date);

        let addresses = matches
            .iter()
            .map(|&(_, i)| RowAddress::from_data_index(i))
            .collect();
        let snapshot: BoardView = matches
            .iter()
            .map(|&(_, i)| view_row(&data[i], &columns))
            .collect();

        info!(table, %range, rows = snapshot.len(), "loaded job board");
        Ok(LoadOutcome::Loaded(Board {
            table: table.to_string(),
            range,
            addresses,
            view: snapshot.clone(),
            snapshot,
            policy,
        }))
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    pub fn policy(&self) -> &EditPolicy {
        &self.policy
    }

    pub fn len(&self) -> usize {
        self.view.len()
    }

    pub fn is_empty(&self) -> bool {
        self.view.is_empty()
    }

    /// Sheet rows backing each board row, in display order
    pub fn addresses(&self) -> &[RowAddress] {
        &self.addresses
    }

    /// Rows as loaded (or as last written back)
    pub fn snapshot(&self) -> &BoardView {
        &self.snapshot
    }

    /// Rows as currently edited
    pub fn view(&self) -> &BoardView {
        &self.view
    }

    /// Tints for the edited view
    pub fn tints(&self) -> Vec<RowTint> {
        row_tints(&self.view)
    }

    /// Edit one cell of the view
    pub fn set_cell(&mut self, row: usize, column: Column, value: &str) -> Result<()> {
        let value = self.policy.check(column, value)?;
        let len = self.view.len();
        let target = self
            .view
            .get_mut(row)
            .ok_or(BoardError::RowOutOfRange { row, len })?;
        target.set(column, value);
        Ok(())
    }

    /// Indices of rows edited since load or the last write-back
    pub fn dirty_rows(&self) -> Vec<usize> {
        diff::dirty_rows(&self.snapshot, &self.view)
    }

    /// Sheet rows that a write-back would touch
    pub fn dirty_addresses(&self) -> Vec<RowAddress> {
        self.dirty_rows()
            .into_iter()
            .filter_map(|i| self.addresses.get(i).copied())
            .collect()
    }

    /// Throw away edits, restoring the snapshot
    pub fn discard_edits(&mut self) {
        self.view = self.snapshot.clone();
    }

    /// Push every changed row back to the sheet row it was loaded from
    ///
    /// Each row is a separate update of all nine display columns. There is
    /// no check for concurrent changes: the last write wins. The snapshot
    /// follows each successful update, so after a failure the rows already
    /// written are no longer dirty and a retry pushes only the rest.
    pub fn write_back(&mut self, store: &mut dyn SheetStore) -> Result<WriteBack> {
        let mut done = WriteBack::default();
        for i in self.dirty_rows() {
            let (Some(&address), Some(edited)) = (self.addresses.get(i), self.view.get(i)) else {
                continue;
            };
            let edited = edited.clone();
            let range = address.range()?;

            store
                .update_range(&self.table, &range, &[edited.to_row()], ValueInput::UserEntered)
                .map_err(|source| BoardError::WriteBack {
                    row: address.sheet_row(),
                    written: done.len(),
                    source,
                })?;
            debug!(table = %self.table, %range, "wrote back row");

            if let Some(slot) = self.snapshot.get_mut(i) {
                *slot = edited;
            }
            done.rows.push(address);
        }

        if done.is_empty() {
            info!(table = %self.table, "nothing to write back");
        } else {
            info!(table = %self.table, rows = done.len(), "wrote back edited rows");
        }
        Ok(done)
    }
}

/// Header positions of the display columns, validated against A..I
fn display_positions(header: &[String]) -> Result<[usize; DISPLAY_WIDTH as usize]> {
    let found: Vec<Option<usize>> = Column::DISPLAY
        .iter()
        .map(|c| header.iter().position(|h| h.trim() == c.header()))
        .collect();

    let missing: Vec<String> = Column::DISPLAY
        .iter()
        .zip(&found)
        .filter(|(_, pos)| pos.is_none())
        .map(|(c, _)| c.header().to_string())
        .collect();
    if !missing.is_empty() {
        return Err(BoardError::MissingColumns(missing));
    }

    let mut positions = [0usize; DISPLAY_WIDTH as usize];
    for (i, (column, pos)) in Column::DISPLAY.iter().zip(found).enumerate() {
        let pos = pos.unwrap_or_default();
        let expected = FIRST_DISPLAY_COLUMN as usize + i;
        if pos != expected {
            return Err(BoardError::ColumnLayout {
                column: column.header().to_string(),
                expected: CellAddress::column_to_letters(expected as u16),
                found: CellAddress::column_to_letters(pos.min(u16::MAX as usize) as u16),
            });
        }
        positions[i] = pos;
    }
    Ok(positions)
}

fn view_row(row: &[String], columns: &[usize; DISPLAY_WIDTH as usize]) -> ViewRow {
    let mut view = ViewRow::default();
    for (column, &pos) in Column::DISPLAY.iter().zip(columns) {
        let raw = cell(row, pos);
        // A genuinely empty status means Waiting; a placeholder means blank.
        let text = match column {
            Column::Date => normalize_text(raw.trim()),
            Column::Status if raw.trim().is_empty() => Status::Waiting.label().to_string(),
            Column::Status => normalize_text(raw.trim()),
            _ => normalize_text(raw),
        };
        view.set(*column, text);
    }
    view
}
