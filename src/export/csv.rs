//! CSV formatter for repository reports.
//!
//! Rows are terminated with CRLF and fields are quoted only when they contain
//! a comma, a double quote, or a line break. Embedded quotes are doubled.

use std::borrow::Cow;
use std::io::Write;

use crate::github::error::io_error;
use crate::github::{ReportError, RepositoryRecord};

/// Column names, in output order.
pub const CSV_HEADER: [&str; 4] = ["repository", "description", "stars", "last_updated"];

const RECORD_TERMINATOR: &str = "\r\n";

/// Writes the header row followed by one row per record.
///
/// A missing description is written as an empty field.
///
/// # Errors
///
/// Returns [`ReportError::Io`] if writing to the output fails.
pub fn write_csv<W: Write>(writer: &mut W, records: &[RepositoryRecord]) -> Result<(), ReportError> {
    write_row(writer, &CSV_HEADER)?;

    for record in records {
        let stars = record.stars.to_string();
        let updated = record.updated_at_display();
        write_row(
            writer,
            &[
                record.name.as_str(),
                record.description.as_deref().unwrap_or_default(),
                stars.as_str(),
                updated.as_str(),
            ],
        )?;
    }

    Ok(())
}

fn write_row<W: Write>(writer: &mut W, fields: &[&str]) -> Result<(), ReportError> {
    let line = fields
        .iter()
        .map(|field| escape_field(field))
        .collect::<Vec<_>>()
        .join(",");
    write!(writer, "{line}{RECORD_TERMINATOR}").map_err(|e| io_error(&e))
}

/// Quotes a field when it would otherwise be ambiguous.
fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\r', '\n']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}
