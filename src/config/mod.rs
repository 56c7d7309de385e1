//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – `macadmins`, 30 days, `report.csv`, 100 per page
//! 2. **Configuration file** – `.recent-repos.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `RECENT_REPOS_ORG`, `RECENT_REPOS_DAYS`, …,
//!    and `GITHUB_TOKEN` for the token
//! 4. **Command-line arguments** – `--org`/`-o`, `--days`/`-d`, `--out`,
//!    `--per-page`, `--token`/`-t`
//!
//! # Configuration File
//!
//! ```toml
//! org = "macadmins"
//! days = 14
//! out = "recent.txt"
//! per_page = 50
//! api_base = "https://ghe.example.com/api/v3"
//! log_level = "info"
//! ```

use std::env;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::export::ReportDestination;
use crate::github::client::{ClientConfig, DEFAULT_API_BASE, DEFAULT_USER_AGENT};
use crate::github::error::ReportError;
use crate::github::locator::{OrganizationLogin, PersonalAccessToken};

/// Environment variable consulted when no token is configured.
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Largest page size the repository listing endpoint accepts.
pub const MAX_PER_PAGE: u8 = 100;

const DEFAULT_ORG: &str = "macadmins";
const DEFAULT_DAYS: u32 = 30;
const DEFAULT_OUT: &str = "report.csv";
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use recent_repos::RecentReposConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = RecentReposConfig::load().expect("failed to load configuration");
/// config.validate().expect("configuration should be consistent");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "RECENT_REPOS",
    discovery(
        dotfile_name = ".recent-repos.toml",
        config_file_name = "recent-repos.toml",
        app_name = "recent-repos"
    )
)]
pub struct RecentReposConfig {
    /// GitHub organization whose public repositories are listed.
    ///
    /// Can be provided via:
    /// - CLI: `--org <ORG>` or `-o <ORG>`
    /// - Environment: `RECENT_REPOS_ORG`
    /// - Config file: `org = "..."`
    #[ortho_config(cli_short = 'o')]
    pub org: String,

    /// Lookback window in days.
    ///
    /// Can be provided via:
    /// - CLI: `--days <DAYS>` or `-d <DAYS>`
    /// - Environment: `RECENT_REPOS_DAYS`
    /// - Config file: `days = 30`
    #[ortho_config(cli_short = 'd')]
    pub days: u32,

    /// Output path. A `.txt` extension selects the text table; anything else
    /// is written as CSV.
    #[ortho_config()]
    pub out: String,

    /// Page size requested from the API, between 1 and 100.
    #[ortho_config()]
    pub per_page: u8,

    /// Personal access token for GitHub API authentication.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `RECENT_REPOS_TOKEN` or `GITHUB_TOKEN`
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// Base URL of the GitHub REST API, for GitHub Enterprise Server.
    #[ortho_config()]
    pub api_base: String,

    /// `User-Agent` header sent with every request.
    #[ortho_config()]
    pub user_agent: String,

    /// Default log filter used when `RUST_LOG` is unset.
    #[ortho_config()]
    pub log_level: String,
}

impl Default for RecentReposConfig {
    fn default() -> Self {
        Self {
            org: DEFAULT_ORG.to_owned(),
            days: DEFAULT_DAYS,
            out: DEFAULT_OUT.to_owned(),
            per_page: MAX_PER_PAGE,
            token: None,
            api_base: DEFAULT_API_BASE.to_owned(),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl RecentReposConfig {
    /// Resolves the token from configuration or the `GITHUB_TOKEN`
    /// environment variable.
    ///
    /// Blank values are treated as absent at every source, so an empty
    /// `--token ""` still falls back to `GITHUB_TOKEN`.
    #[must_use]
    pub fn resolve_token(&self) -> Option<PersonalAccessToken> {
        self.token
            .as_deref()
            .and_then(PersonalAccessToken::new)
            .or_else(|| {
                env::var(GITHUB_TOKEN_ENV)
                    .ok()
                    .and_then(PersonalAccessToken::new)
            })
    }

    /// Checks the configuration for values the API would reject.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Configuration`] when the organization is blank
    /// or `per_page` is outside `1..=100`.
    pub fn validate(&self) -> Result<(), ReportError> {
        self.organization()?;
        validate_per_page(self.per_page)
    }

    /// Returns the validated organization login.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Configuration`] when the organization is blank.
    pub fn organization(&self) -> Result<OrganizationLogin, ReportError> {
        OrganizationLogin::new(&self.org)
    }

    /// Builds the HTTP client configuration, including the resolved token.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidUrl`] when `api_base` is not an absolute
    /// URL.
    pub fn client_config(&self) -> Result<ClientConfig, ReportError> {
        Ok(ClientConfig::new(&self.api_base, self.resolve_token())?
            .with_user_agent(self.user_agent.as_str()))
    }

    /// Resolves the output destination from `out`.
    #[must_use]
    pub fn destination(&self) -> ReportDestination {
        ReportDestination::resolve(&self.out)
    }
}

fn validate_per_page(per_page: u8) -> Result<(), ReportError> {
    if (1..=MAX_PER_PAGE).contains(&per_page) {
        Ok(())
    } else {
        Err(ReportError::Configuration {
            message: format!("per_page must be between 1 and {MAX_PER_PAGE}, got {per_page}"),
        })
    }
}
