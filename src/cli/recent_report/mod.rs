//! Recently updated repository report operation.

use std::io::{self, Write};

use chrono::{DateTime, Utc};
use recent_repos::collector::{collect_recent, lookback_cutoff};
use recent_repos::export::write_report;
use recent_repos::{ClientConfig, GitHubClient, RecentReposConfig, ReportError, RepositoryPageSource};

use super::output::write_report_summary;

/// Collects the configured organization's recent repositories and writes the
/// report, printing a summary line to stdout.
///
/// # Errors
///
/// Returns [`ReportError::Configuration`] if the configuration is invalid,
/// [`ReportError::RateLimitExhausted`] if GitHub stops serving requests, and
/// the other variants for network, API, decode, or file failures.
pub fn run(config: &RecentReposConfig) -> Result<(), ReportError> {
    let mut stdout = io::stdout().lock();
    run_with_source_builder(config, Utc::now(), GitHubClient::new, &mut stdout)
}

/// Runs the report using a custom page source builder and clock reading.
///
/// This function is exposed for testing with mock sources.
pub fn run_with_source_builder<S, F, W>(
    config: &RecentReposConfig,
    now: DateTime<Utc>,
    build_source: F,
    writer: &mut W,
) -> Result<(), ReportError>
where
    S: RepositoryPageSource,
    F: FnOnce(ClientConfig) -> Result<S, ReportError>,
    W: Write,
{
    config.validate()?;
    let org = config.organization()?;
    let client_config = config.client_config()?;
    let start_url = client_config.org_repos_url(org.as_str(), config.per_page)?;
    let cutoff = lookback_cutoff(now, config.days);

    tracing::info!(
        org = org.as_str(),
        days = config.days,
        %cutoff,
        authenticated = client_config.token.is_some(),
        "collecting recently updated repositories"
    );

    let source = build_source(client_config)?;
    let collection = collect_recent(&source, start_url.as_str(), cutoff)?;

    tracing::info!(
        pages = collection.pages_fetched,
        records = collection.records.len(),
        skipped = collection.skipped,
        stopped_early = collection.stopped_early,
        "collection finished"
    );

    let destination = config.destination();
    write_report(&destination, &collection.records)?;
    write_report_summary(writer, collection.records.len(), destination.path())
}
