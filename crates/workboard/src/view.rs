//! The worker-facing view: display columns only, all text

use std::ops::Index;

use workboard_core::Row;

use crate::schema::{Column, DISPLAY_WIDTH};

/// Literal forms of a missing value that load as empty text
pub const MISSING_PLACEHOLDERS: [&str; 4] = ["None", "nan", "NaN", "<NA>"];

/// Collapse placeholder forms of "missing" to an empty string
pub fn normalize_text(value: &str) -> String {
    if MISSING_PLACEHOLDERS.contains(&value.trim()) {
        String::new()
    } else {
        value.to_string()
    }
}

/// One displayed row, one cell per display column
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ViewRow([String; DISPLAY_WIDTH as usize]);

impl ViewRow {
    pub fn new(cells: [String; DISPLAY_WIDTH as usize]) -> Self {
        Self(cells)
    }

    pub fn get(&self, column: Column) -> &str {
        &self.0[column.index()]
    }

    /// Overwrite a cell with no editability checks
    pub fn set(&mut self, column: Column, value: impl Into<String>) {
        self.0[column.index()] = value.into();
    }

    pub fn cells(&self) -> &[String] {
        &self.0
    }

    /// The row as written back to the store
    pub fn to_row(&self) -> Row {
        self.0.to_vec()
    }
}

impl Index<Column> for ViewRow {
    type Output = str;

    fn index(&self, column: Column) -> &str {
        self.get(column)
    }
}

/// Rows of the job board in display order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardView {
    rows: Vec<ViewRow>,
}

impl BoardView {
    pub fn new(rows: Vec<ViewRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[ViewRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ViewRow> {
        self.rows.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut ViewRow> {
        self.rows.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ViewRow> {
        self.rows.iter()
    }
}

impl FromIterator<ViewRow> for BoardView {
    fn from_iter<I: IntoIterator<Item = ViewRow>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a BoardView {
    type Item = &'a ViewRow;
    type IntoIter = std::slice::Iter<'a, ViewRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
