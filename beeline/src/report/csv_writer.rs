use crate::io::{file_ops, IoError};
use serde::Serialize;
use std::io::Write;

/// reports are `;`-separated so that free text such as street names may
/// contain commas.
pub const REPORT_DELIMITER: u8 = b';';

/// creates a report writer at `path`, gzip-compressed if the name ends with `.gz`.
pub fn create_writer(path: &str, overwrite: bool) -> Result<csv::Writer<Box<dyn Write>>, IoError> {
    let buffer = file_ops::open_writer(path, overwrite)?;
    let writer = csv::WriterBuilder::new()
        .has_headers(true)
        .delimiter(REPORT_DELIMITER)
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(buffer);
    Ok(writer)
}

/// writes all rows to a new report file.
pub fn write_rows<T: Serialize>(path: &str, rows: &[T], overwrite: bool) -> Result<(), IoError> {
    let mut writer = create_writer(path, overwrite)?;
    let csv_error = |source: csv::Error| IoError::CsvError {
        path: String::from(path),
        source,
    };
    for row in rows.iter() {
        writer.serialize(row).map_err(csv_error)?;
    }
    writer.flush().map_err(|source| IoError::FileError {
        path: String::from(path),
        source,
    })?;
    log::info!("wrote {} rows to {path}", rows.len());
    Ok(())
}
