//! Exporting the job board to an XLSX file

use std::fs::File;
use std::io::{Cursor, Seek, Write};
use std::path::{Path, PathBuf};

use tracing::info;
use workboard_xlsx::{SheetExport, XlsxWriter};

use crate::board::Board;
use crate::error::Result;
use crate::range::DateRange;
use crate::schema::Column;
use crate::tint::row_tints;

/// Worksheet name inside exported workbooks
pub const EXPORT_SHEET_NAME: &str = "Job Board";

/// File name for an export of `range`, e.g. `job-board_20240601_20240610.xlsx`
pub fn export_file_name(range: &DateRange) -> String {
    format!(
        "job-board_{}_{}.xlsx",
        range.start().format("%Y%m%d"),
        range.end().format("%Y%m%d")
    )
}

impl Board {
    /// The loaded rows as a sheet, with the display header and row tints
    ///
    /// Exports show the board as loaded; unsaved edits are not included.
    pub fn to_sheet(&self) -> Result<SheetExport> {
        let header = Column::display_headers()
            .into_iter()
            .map(str::to_string)
            .collect();
        let mut sheet = SheetExport::new(EXPORT_SHEET_NAME, header)?;
        for (row, tint) in self.snapshot().iter().zip(row_tints(self.snapshot())) {
            sheet.push_row(row.to_row(), Some(tint.color()));
        }
        Ok(sheet)
    }

    /// Write the export as an XLSX workbook to `writer`
    pub fn export_xlsx<W: Write + Seek>(&self, writer: W) -> Result<()> {
        XlsxWriter::write(&self.to_sheet()?, writer)?;
        Ok(())
    }

    pub fn export_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Cursor::new(Vec::new());
        self.export_xlsx(&mut buf)?;
        Ok(buf.into_inner())
    }

    /// Write the export into `dir` under [`export_file_name`]
    pub fn export_to_dir(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(export_file_name(&self.range()));
        self.export_xlsx(File::create(&path)?)?;
        info!(path = %path.display(), rows = self.snapshot().len(), "exported job board");
        Ok(path)
    }
}
