//! The exported sheet model

use crate::error::{XlsxError, XlsxResult};
use workboard_core::Color;

/// Maximum length of a worksheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;

/// One worksheet worth of text cells
#[derive(Debug, Clone, Default)]
pub struct SheetExport {
    name: String,
    header: Vec<String>,
    rows: Vec<Vec<String>>,
    fills: Vec<Option<Color>>,
}

impl SheetExport {
    /// Create an export with a worksheet name and header row
    pub fn new(name: impl Into<String>, header: Vec<String>) -> XlsxResult<Self> {
        let name = name.into();
        if name.is_empty()
            || name.chars().count() > MAX_SHEET_NAME_LEN
            || name.contains(['[', ']', ':', '*', '?', '/', '\\'])
        {
            return Err(XlsxError::InvalidSheet(format!("bad sheet name {:?}", name)));
        }
        Ok(Self {
            name,
            header,
            rows: Vec::new(),
            fills: Vec::new(),
        })
    }

    /// Add a data row with an optional background fill
    pub fn push_row(&mut self, cells: Vec<String>, fill: Option<Color>) {
        self.rows.push(cells);
        self.fills.push(fill);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Fill of data row `index`, if any
    pub fn fill(&self, index: usize) -> Option<Color> {
        self.fills.get(index).copied().flatten()
    }

    /// Widest row, header included
    pub fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.header.len()))
            .max()
            .unwrap_or(0)
    }
}
