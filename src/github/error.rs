//! Error types exposed by the report pipeline.

use thiserror::Error;

use super::rate_limit::RateLimitInfo;

const FAILURE_EXIT_STATUS: u8 = 1;
const RATE_LIMIT_EXIT_STATUS: u8 = 2;

/// Errors surfaced while configuring the run, talking to GitHub, or writing
/// the report.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReportError {
    /// A URL could not be parsed or joined.
    #[error("URL is invalid: {0}")]
    InvalidUrl(String),

    /// GitHub answered with a non-success status.
    #[error("HTTP error {status}: {body}")]
    Api {
        /// Numeric HTTP status code.
        status: u16,
        /// Response body returned with the failure.
        body: String,
    },

    /// Networking failed while calling GitHub.
    #[error("Network error: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The response body was not the expected JSON document.
    #[error("failed to decode GitHub response: {message}")]
    Decode {
        /// Decoder error detail.
        message: String,
    },

    /// The remaining request allowance reported by GitHub reached zero.
    #[error("{}", rate_limit_message(.rate_limit.as_ref()))]
    RateLimitExhausted {
        /// Rate limit snapshot taken from the response headers.
        rate_limit: Option<RateLimitInfo>,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded or is inconsistent.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },
}

impl ReportError {
    /// Returns the numeric process exit status for this failure.
    ///
    /// Rate limit exhaustion maps to `2`; everything else to `1`.
    #[must_use]
    pub const fn exit_status(&self) -> u8 {
        match self {
            Self::RateLimitExhausted { .. } => RATE_LIMIT_EXIT_STATUS,
            _ => FAILURE_EXIT_STATUS,
        }
    }
}

/// Converts an I/O error to a [`ReportError::Io`].
pub(crate) fn io_error(error: &std::io::Error) -> ReportError {
    ReportError::Io {
        message: error.to_string(),
    }
}

fn rate_limit_message(rate_limit: Option<&RateLimitInfo>) -> String {
    let base = "GitHub API rate limit reached. Try later or set GITHUB_TOKEN.";
    rate_limit.and_then(RateLimitInfo::reset_at).map_or_else(
        || base.to_owned(),
        |reset_at| format!("{base} (resets at {reset_at})"),
    )
}
