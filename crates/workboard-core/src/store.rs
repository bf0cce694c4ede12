//! The spreadsheet store abstraction

use crate::address::CellRange;
use crate::error::Result;
use crate::input::ValueInput;

/// One table row; cells are text and rows may be ragged
pub type Row = Vec<String>;

/// Read a cell from a ragged row, treating missing cells as empty
pub fn cell(row: &[String], col: usize) -> &str {
    row.get(col).map(String::as_str).unwrap_or("")
}

/// A spreadsheet made of named tables of text rows
///
/// Each method is one remote call. Implementations do not retry and do not
/// detect concurrent writers: an update overwrites whatever the target range
/// holds at the time of the call.
pub trait SheetStore {
    /// Human-readable name of the spreadsheet this store is bound to
    fn spreadsheet(&self) -> &str;

    /// Names of all tables, in store order
    fn table_names(&self) -> Result<Vec<String>>;

    /// Every row of a table, including any title/header preamble
    fn read_all(&self, table: &str) -> Result<Vec<Row>>;

    /// Append rows after the last row of a table in a single call
    fn append_rows(&mut self, table: &str, rows: &[Row], input: ValueInput) -> Result<()>;

    /// Overwrite a rectangular range; `values` must match the range shape
    fn update_range(
        &mut self,
        table: &str,
        range: &CellRange,
        values: &[Row],
        input: ValueInput,
    ) -> Result<()>;

    /// Create a new table holding `preamble` as its first rows
    fn create_table(&mut self, table: &str, preamble: &[Row]) -> Result<()>;
}

/// Check that `values` fit `range` exactly
pub(crate) fn check_shape(range: &CellRange, values: &[Row]) -> Result<()> {
    let cols = range.col_count() as usize;
    if values.len() != range.row_count() as usize || values.iter().any(|row| row.len() != cols) {
        return Err(crate::Error::ShapeMismatch {
            range: range.to_string(),
            rows: range.row_count(),
            cols: range.col_count(),
            actual_rows: values.len(),
        });
    }
    Ok(())
}

/// Write `values` into `rows` at `range`, padding the table as needed
///
/// Shared by backends that hold a table as `Vec<Row>`.
pub fn patch_rows(
    rows: &mut Vec<Row>,
    range: &CellRange,
    values: &[Row],
    input: ValueInput,
) -> Result<()> {
    check_shape(range, values)?;

    let first_row = range.start.row as usize;
    let first_col = range.start.col as usize;
    let last_row = range.end.row as usize;
    let last_col = range.end.col as usize;

    if rows.len() <= last_row {
        rows.resize_with(last_row + 1, Vec::new);
    }
    for (offset, source) in values.iter().enumerate() {
        let target = &mut rows[first_row + offset];
        if target.len() <= last_col {
            target.resize(last_col + 1, String::new());
        }
        for (i, value) in source.iter().enumerate() {
            target[first_col + i] = input.apply(value);
        }
    }
    Ok(())
}
