//! Table file writer

use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use crate::error::CsvResult;
use crate::options::CsvStoreOptions;
use workboard_core::Row;

fn builder(options: &CsvStoreOptions) -> csv::WriterBuilder {
    let mut builder = csv::WriterBuilder::new();
    builder
        .delimiter(options.delimiter)
        .quote(options.quote)
        .terminator(options.line_terminator.to_csv())
        .flexible(true);
    builder
}

/// Write records to any writer
pub(crate) fn write<W: Write>(writer: W, rows: &[Row], options: &CsvStoreOptions) -> CsvResult<()> {
    let mut csv_writer = builder(options).from_writer(writer);
    for row in rows {
        // A zero-field record would be skipped entirely; keep the row position.
        if row.is_empty() {
            csv_writer.write_record([""])?;
        } else {
            csv_writer.write_record(row)?;
        }
    }
    csv_writer.flush()?;
    Ok(())
}

/// Replace a table file with `rows`
///
/// The new content goes to a sibling temp file which is then renamed over
/// the original.
pub(crate) fn write_file(path: &Path, rows: &[Row], options: &CsvStoreOptions) -> CsvResult<()> {
    let tmp = path.with_extension("csv.tmp");
    {
        let file = File::create(&tmp)?;
        write(file, rows, options)?;
    }
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Append records to the end of a table file
///
/// A file whose last record lacks a terminator (e.g. after a hand edit) gets
/// one first, so the new records never merge into the last row.
pub(crate) fn append_file(path: &Path, rows: &[Row], options: &CsvStoreOptions) -> CsvResult<()> {
    let mut file = OpenOptions::new().read(true).append(true).open(path)?;
    if file.metadata()?.len() > 0 {
        let mut last = [0u8; 1];
        file.seek(SeekFrom::End(-1))?;
        file.read_exact(&mut last)?;
        if last[0] != b'\n' {
            file.write_all(options.line_terminator.as_bytes())?;
        }
    }
    write(file, rows, options)
}
