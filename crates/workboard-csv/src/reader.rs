//! Table file reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::CsvResult;
use crate::options::CsvStoreOptions;
use workboard_core::Row;

/// Read every record of a table file as text rows
///
/// No header handling happens here: the title and header rows are ordinary
/// records, and ragged records are kept as-is.
pub(crate) fn read_file(path: &Path, options: &CsvStoreOptions) -> CsvResult<Vec<Row>> {
    let file = File::open(path)?;
    read(file, options)
}

pub(crate) fn read<R: Read>(reader: R, options: &CsvStoreOptions) -> CsvResult<Vec<Row>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .quote(options.quote)
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}
