//! Recent repository report CLI entrypoint.

mod cli;

use std::io;
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use recent_repos::{RecentReposConfig, ReportError, logging};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::debug!(?error, "run failed");
            ExitCode::from(cli::output::report_failure(&mut io::stderr().lock(), &error))
        }
    }
}

fn run() -> Result<(), ReportError> {
    let config = load_config()?;
    logging::init(&config.log_level)?;
    cli::recent_report::run(&config)
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`ReportError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<RecentReposConfig, ReportError> {
    RecentReposConfig::load().map_err(|error| ReportError::Configuration {
        message: error.to_string(),
    })
}
