//! Diagnostic logging setup.
//!
//! Events go to stderr so they never interleave with the summary line on
//! stdout. `RUST_LOG` takes precedence over the configured level.

use std::io;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

use crate::github::ReportError;

/// Builds the event filter from `RUST_LOG`, falling back to `level`.
///
/// # Errors
///
/// Returns [`ReportError::Configuration`] when `RUST_LOG` is unset or invalid
/// and `level` is not a valid filter directive either.
pub fn build_filter(level: &str) -> Result<EnvFilter, ReportError> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|error| ReportError::Configuration {
            message: format!("invalid log level '{level}': {error}"),
        })
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns [`ReportError::Configuration`] when the filter is invalid or a
/// global subscriber is already installed.
pub fn init(level: &str) -> Result<(), ReportError> {
    let subscriber = tracing_subscriber::registry()
        .with(build_filter(level)?)
        .with(fmt::layer().compact().with_target(false).with_writer(io::stderr));

    tracing::subscriber::set_global_default(subscriber).map_err(|error| {
        ReportError::Configuration {
            message: format!("failed to install log subscriber: {error}"),
        }
    })
}
