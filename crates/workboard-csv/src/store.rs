//! Directory-of-CSV-files store

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{CsvError, CsvResult};
use crate::options::CsvStoreOptions;
use crate::{reader, writer};
use workboard_core::{patch_rows, CellRange, Error, Result, Row, SheetStore, ValueInput};

const TABLE_EXTENSION: &str = "csv";

/// A spreadsheet stored as one CSV file per table
#[derive(Debug, Clone)]
pub struct CsvStore {
    name: String,
    dir: PathBuf,
    options: CsvStoreOptions,
}

impl CsvStore {
    /// Open an existing spreadsheet `root/name`
    pub fn open(root: impl AsRef<Path>, name: &str) -> CsvResult<Self> {
        Self::open_with_options(root, name, CsvStoreOptions::default())
    }

    /// Open an existing spreadsheet with explicit CSV options
    pub fn open_with_options(
        root: impl AsRef<Path>,
        name: &str,
        options: CsvStoreOptions,
    ) -> CsvResult<Self> {
        let dir = root.as_ref().join(name);
        if !dir.is_dir() {
            return Err(CsvError::MissingSpreadsheet(dir));
        }
        info!(spreadsheet = name, dir = %dir.display(), "opened csv store");
        Ok(Self {
            name: name.to_string(),
            dir,
            options,
        })
    }

    /// Create the spreadsheet directory if needed, then open it
    pub fn create(root: impl AsRef<Path>, name: &str) -> CsvResult<Self> {
        fs::create_dir_all(root.as_ref().join(name))?;
        Self::open(root, name)
    }

    /// Directory holding the table files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn table_path(&self, table: &str) -> CsvResult<PathBuf> {
        let invalid = table.trim().is_empty()
            || table.starts_with('.')
            || table.contains(['/', '\\', '\0']);
        if invalid {
            return Err(CsvError::InvalidTableName(table.to_string()));
        }
        Ok(self.dir.join(format!("{table}.{TABLE_EXTENSION}")))
    }

    fn existing_table(&self, table: &str) -> CsvResult<PathBuf> {
        let path = self.table_path(table)?;
        if !path.is_file() {
            return Err(Error::TableNotFound(table.to_string()).into());
        }
        Ok(path)
    }

    fn list_tables(&self) -> CsvResult<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(TABLE_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}

impl SheetStore for CsvStore {
    fn spreadsheet(&self) -> &str {
        &self.name
    }

    fn table_names(&self) -> Result<Vec<String>> {
        Ok(self.list_tables()?)
    }

    fn read_all(&self, table: &str) -> Result<Vec<Row>> {
        let path = self.existing_table(table)?;
        let rows = reader::read_file(&path, &self.options)?;
        debug!(table, rows = rows.len(), "read table");
        Ok(rows)
    }

    fn append_rows(&mut self, table: &str, rows: &[Row], input: ValueInput) -> Result<()> {
        let path = self.existing_table(table)?;
        let coerced: Vec<Row> = rows
            .iter()
            .map(|row| row.iter().map(|v| input.apply(v)).collect())
            .collect();
        writer::append_file(&path, &coerced, &self.options)?;
        debug!(table, rows = rows.len(), "appended rows");
        Ok(())
    }

    fn update_range(
        &mut self,
        table: &str,
        range: &CellRange,
        values: &[Row],
        input: ValueInput,
    ) -> Result<()> {
        let path = self.existing_table(table)?;
        let mut rows = reader::read_file(&path, &self.options)?;
        patch_rows(&mut rows, range, values, input)?;
        writer::write_file(&path, &rows, &self.options)?;
        debug!(table, %range, "updated range");
        Ok(())
    }

    fn create_table(&mut self, table: &str, preamble: &[Row]) -> Result<()> {
        let path = self.table_path(table)?;
        if path.exists() {
            return Err(Error::DuplicateTable(table.to_string()));
        }
        writer::write_file(&path, preamble, &self.options)?;
        info!(table, "created table");
        Ok(())
    }
}
