//! Report writers for recently updated repositories.
//!
//! Two formats are supported and chosen by the output path's extension:
//!
//! - **CSV**: four columns with a header row, CRLF line endings
//! - **Text**: fixed-width table with a dashed rule under the header
//!
//! Writers are total over the records they are given. They neither filter nor
//! reorder.

mod csv;
mod model;
mod text;
#[cfg(test)]
mod test_helpers;

use std::fs::File;
use std::io::{BufWriter, Write};

pub use csv::{CSV_HEADER, write_csv};
pub use model::{ExportFormat, ReportDestination};
pub use text::{NAME_WIDTH, STARS_WIDTH, UPDATED_WIDTH, write_text};

use crate::github::{ReportError, RepositoryRecord};

/// Writes records in the given format to the writer.
///
/// # Errors
///
/// Returns [`ReportError::Io`] if writing to the output fails.
pub fn write_format<W: Write>(
    writer: &mut W,
    records: &[RepositoryRecord],
    format: ExportFormat,
) -> Result<(), ReportError> {
    match format {
        ExportFormat::Csv => write_csv(writer, records),
        ExportFormat::Text => write_text(writer, records),
    }
}

/// Creates or truncates the destination file and writes the report to it.
///
/// # Errors
///
/// Returns [`ReportError::Io`] if the file cannot be created, written, or
/// flushed.
pub fn write_report(
    destination: &ReportDestination,
    records: &[RepositoryRecord],
) -> Result<(), ReportError> {
    let path = destination.path();
    let file = File::create(path).map_err(|e| ReportError::Io {
        message: format!("failed to create output file '{path}': {e}"),
    })?;
    let mut writer = BufWriter::new(file);
    write_format(&mut writer, records, destination.format())?;
    writer.flush().map_err(|e| ReportError::Io {
        message: format!("failed to flush output file '{path}': {e}"),
    })
}
