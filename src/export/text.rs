//! Fixed-width table formatter for repository reports.
//!
//! Produces a header line, a dashed rule of the same width, and one row per
//! record. Lines are separated by `\n` with no trailing newline after the
//! last row.

use std::io::Write;

use crate::github::error::io_error;
use crate::github::{ReportError, RepositoryRecord};

/// Width of the repository name column. Longer names are truncated.
pub const NAME_WIDTH: usize = 40;
/// Width of the right-aligned star count column.
pub const STARS_WIDTH: usize = 5;
/// Width of the left-aligned timestamp column.
pub const UPDATED_WIDTH: usize = 20;

const COLUMN_GAP: &str = "  ";

/// Writes the records as a fixed-width table.
///
/// Newlines inside descriptions are flattened to spaces and the result is
/// trimmed so every record occupies exactly one line.
///
/// # Errors
///
/// Returns [`ReportError::Io`] if writing to the output fails.
pub fn write_text<W: Write>(
    writer: &mut W,
    records: &[RepositoryRecord],
) -> Result<(), ReportError> {
    let header = header_line();
    let rule = "-".repeat(header.chars().count());

    write!(writer, "{header}\n{rule}").map_err(|e| io_error(&e))?;
    for record in records {
        write!(writer, "\n{}", row_line(record)).map_err(|e| io_error(&e))?;
    }

    Ok(())
}

fn header_line() -> String {
    format!(
        "{:<NAME_WIDTH$}{COLUMN_GAP}{:>STARS_WIDTH$}{COLUMN_GAP}{:<UPDATED_WIDTH$}{COLUMN_GAP}Description",
        "Repository", "Stars", "Last updated",
    )
}

fn row_line(record: &RepositoryRecord) -> String {
    let name: String = record.name.chars().take(NAME_WIDTH).collect();
    let description = record
        .description
        .as_deref()
        .unwrap_or_default()
        .replace('\n', " ");

    format!(
        "{name:<NAME_WIDTH$}{COLUMN_GAP}{stars:>STARS_WIDTH$}{COLUMN_GAP}{updated:<UPDATED_WIDTH$}{COLUMN_GAP}{description}",
        stars = record.stars,
        updated = record.updated_at_display(),
        description = description.trim(),
    )
}
