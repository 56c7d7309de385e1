//! Recent repository report library.
//!
//! Lists a GitHub organization's public repositories newest-update first,
//! keeps those updated within a lookback window, and writes them as CSV or a
//! fixed-width text table. Pagination stops early once a page reaches past
//! the window, and an exhausted rate limit aborts the run with a distinct
//! exit status.

pub mod collector;
pub mod config;
pub mod export;
pub mod github;
pub mod logging;

pub use collector::{Collection, collect_recent, lookback_cutoff};
pub use config::RecentReposConfig;
pub use export::{ExportFormat, ReportDestination, write_report};
pub use github::{
    ClientConfig, GitHubClient, OrganizationLogin, PageLinks, PersonalAccessToken, RateLimitInfo,
    ReportError, RepositoryPage, RepositoryPageSource, RepositoryRecord,
};
