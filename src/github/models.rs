//! Data models representing organization repositories.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;

/// Timestamp layout GitHub uses for `updated_at`, e.g. `2025-06-10T07:25:32Z`.
pub const GITHUB_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// A repository that qualified for the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRecord {
    /// Repository name without the owner prefix.
    pub name: String,
    /// Free-text description, if the repository has one.
    pub description: Option<String>,
    /// Stargazer count.
    pub stars: u64,
    /// Last time GitHub recorded an update to the repository.
    pub updated_at: DateTime<Utc>,
}

impl RepositoryRecord {
    /// Renders `updated_at` in GitHub's timestamp layout.
    #[must_use]
    pub fn updated_at_display(&self) -> String {
        format_github_timestamp(self.updated_at)
    }
}

/// Repository object as returned by `GET /orgs/{org}/repos`.
///
/// Only the fields the report needs are decoded; everything is defaulted so a
/// sparse object never fails the whole page.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ApiRepository {
    /// Repository name.
    #[serde(default)]
    pub name: String,
    /// Repository description.
    #[serde(default)]
    pub description: Option<String>,
    /// Stargazer count.
    #[serde(default)]
    pub stargazers_count: u64,
    /// Raw `updated_at` timestamp string.
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl ApiRepository {
    /// Parses `updated_at`, returning `None` when it is missing or malformed.
    #[must_use]
    pub fn parsed_updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
            .as_deref()
            .and_then(|raw| parse_github_timestamp(raw).ok())
    }

    /// Converts into a [`RepositoryRecord`] using an already parsed timestamp.
    #[must_use]
    pub fn with_updated_at(self, updated_at: DateTime<Utc>) -> RepositoryRecord {
        RepositoryRecord {
            name: self.name,
            description: self.description,
            stars: self.stargazers_count,
            updated_at,
        }
    }
}

/// Parses a GitHub `YYYY-MM-DDTHH:MM:SSZ` timestamp as UTC.
///
/// # Errors
///
/// Returns the `chrono` parse error when the input does not match the layout.
pub fn parse_github_timestamp(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    NaiveDateTime::parse_from_str(raw, GITHUB_TIMESTAMP_FORMAT).map(|naive| naive.and_utc())
}

/// Formats an instant in GitHub's timestamp layout.
#[must_use]
pub fn format_github_timestamp(instant: DateTime<Utc>) -> String {
    instant.format(GITHUB_TIMESTAMP_FORMAT).to_string()
}
