//! Output formatting utilities for CLI operations.

use std::io::Write;

use camino::Utf8Path;
use recent_repos::ReportError;

/// Writes the one-line success summary.
///
/// # Errors
///
/// Returns [`ReportError::Io`] if writing to the output fails.
pub fn write_report_summary<W: Write>(
    writer: &mut W,
    count: usize,
    path: &Utf8Path,
) -> Result<(), ReportError> {
    writeln!(writer, "Wrote {count} repositories to {path}").map_err(|error| ReportError::Io {
        message: error.to_string(),
    })
}

/// Prints a failed run's error and returns its process exit status.
///
/// The status depends only on the error, so a diagnostic that cannot be
/// written still exits 2 on rate-limit exhaustion.
pub fn report_failure<W: Write>(writer: &mut W, error: &ReportError) -> u8 {
    if let Err(write_error) = writeln!(writer, "{error}") {
        tracing::debug!(%write_error, "could not write error to stderr");
    }
    error.exit_status()
}
