//! Report formats and output destination resolution.
//!
//! The format is chosen purely from the output path's extension: `.txt`
//! selects the fixed-width table and anything else becomes CSV, gaining a
//! `.csv` suffix when it lacks one.

use camino::{Utf8Path, Utf8PathBuf};

const TEXT_SUFFIX: &str = ".txt";
const CSV_SUFFIX: &str = ".csv";

/// Supported report formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values with a header row.
    Csv,
    /// Human-readable fixed-width table.
    Text,
}

/// Where the report goes and in which format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDestination {
    path: Utf8PathBuf,
    format: ExportFormat,
}

impl ReportDestination {
    /// Resolves the requested output path into a destination.
    ///
    /// Extension matching is case-insensitive. A path that is neither `.txt`
    /// nor `.csv` has `.csv` appended.
    ///
    /// # Example
    ///
    /// ```
    /// use recent_repos::export::{ExportFormat, ReportDestination};
    ///
    /// let destination = ReportDestination::resolve("report");
    /// assert_eq!(destination.path().as_str(), "report.csv");
    /// assert_eq!(destination.format(), ExportFormat::Csv);
    /// ```
    #[must_use]
    pub fn resolve(requested: &str) -> Self {
        let lowered = requested.to_lowercase();
        if lowered.ends_with(TEXT_SUFFIX) {
            return Self {
                path: Utf8PathBuf::from(requested),
                format: ExportFormat::Text,
            };
        }

        let path = if lowered.ends_with(CSV_SUFFIX) {
            Utf8PathBuf::from(requested)
        } else {
            Utf8PathBuf::from(format!("{requested}{CSV_SUFFIX}"))
        };

        Self {
            path,
            format: ExportFormat::Csv,
        }
    }

    /// Returns the path the report is written to.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Returns the report format.
    #[must_use]
    pub const fn format(&self) -> ExportFormat {
        self.format
    }
}
