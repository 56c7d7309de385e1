//! GitHub organization repository listing.
//!
//! This module talks to the REST endpoint that lists an organization's public
//! repositories. It builds requests from an explicit [`ClientConfig`], follows
//! `Link` pagination, and reads the `X-RateLimit-*` headers so callers can
//! stop once the allowance runs out. Failures are mapped into [`ReportError`]
//! variants that carry the process exit status.

pub mod client;
pub mod error;
pub mod locator;
pub mod models;
pub mod pagination;
pub mod rate_limit;

pub use client::{ClientConfig, GitHubClient, RepositoryPage, RepositoryPageSource};
pub use error::ReportError;
pub use locator::{OrganizationLogin, PersonalAccessToken};
pub use models::{ApiRepository, RepositoryRecord};
pub use pagination::PageLinks;
pub use rate_limit::RateLimitInfo;

#[cfg(test)]
pub use client::MockRepositoryPageSource;
