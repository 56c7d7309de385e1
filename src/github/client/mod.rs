//! Blocking GitHub REST client for listing organization repositories.
//!
//! Requests carry a fixed header set built from [`ClientConfig`]. The
//! configuration is passed in explicitly so the fetcher never consults
//! process-wide state.

use http::header::{ACCEPT, HeaderMap, HeaderValue, LINK, USER_AGENT};
use reqwest::blocking::{Client, Response};
use url::Url;

use super::error::ReportError;
use super::locator::PersonalAccessToken;
use super::models::ApiRepository;
use super::pagination::PageLinks;
use super::rate_limit::RateLimitInfo;

/// Default GitHub REST API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";
/// Media type requested from the API.
pub const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";
/// REST API version the client is written against.
pub const GITHUB_API_VERSION: &str = "2022-11-28";
/// Client identifier sent as `User-Agent` unless overridden.
pub const DEFAULT_USER_AGENT: &str = "recent-repos";

const API_VERSION_HEADER: &str = "x-github-api-version";

/// Connection settings shared by every request in a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API base URL (e.g. `https://api.github.com`).
    pub api_base: Url,
    /// Value sent as `User-Agent`.
    pub user_agent: String,
    /// Optional bearer token; unauthenticated access when absent.
    pub token: Option<PersonalAccessToken>,
}

impl ClientConfig {
    /// Builds configuration for the given API base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidUrl`] when `api_base` is not an absolute
    /// URL.
    pub fn new(api_base: &str, token: Option<PersonalAccessToken>) -> Result<Self, ReportError> {
        let base_url =
            Url::parse(api_base).map_err(|error| ReportError::InvalidUrl(error.to_string()))?;
        Ok(Self {
            api_base: base_url,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            token,
        })
    }

    /// Overrides the `User-Agent` value.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Builds the URL of the first page of an organization's public
    /// repositories, newest update first.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidUrl`] when the base URL cannot carry a
    /// path (for example `mailto:` URLs).
    pub fn org_repos_url(&self, org: &str, per_page: u8) -> Result<Url, ReportError> {
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|()| ReportError::InvalidUrl(format!("{} cannot be a base", self.api_base)))?
            .pop_if_empty()
            .extend(["orgs", org, "repos"]);
        url.query_pairs_mut()
            .append_pair("per_page", &per_page.to_string())
            .append_pair("type", "public")
            .append_pair("sort", "updated")
            .append_pair("direction", "desc");
        Ok(url)
    }

    fn default_headers(&self) -> Result<HeaderMap, ReportError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));
        headers.insert(API_VERSION_HEADER, HeaderValue::from_static(GITHUB_API_VERSION));
        headers.insert(USER_AGENT, header_value(&self.user_agent, "user agent")?);
        Ok(headers)
    }
}

/// One page of the organization repository listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryPage {
    /// Repository objects in API order.
    pub items: Vec<ApiRepository>,
    /// URL of the following page, if any.
    pub next_url: Option<String>,
    /// Rate limit snapshot when the response carried one.
    pub rate_limit: Option<RateLimitInfo>,
}

/// Source of repository listing pages.
#[cfg_attr(test, mockall::automock)]
pub trait RepositoryPageSource {
    /// Fetches the page at `url`.
    ///
    /// # Errors
    ///
    /// Returns a [`ReportError`] when the request fails or the body cannot be
    /// decoded.
    fn fetch_page(&self, url: &str) -> Result<RepositoryPage, ReportError>;
}

/// `reqwest`-backed GitHub client.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
    config: ClientConfig,
}

impl GitHubClient {
    /// Creates a client from explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Configuration`] when a header value is invalid or
    /// the HTTP client cannot be constructed.
    pub fn new(config: ClientConfig) -> Result<Self, ReportError> {
        let client = Client::builder()
            .default_headers(config.default_headers()?)
            .build()
            .map_err(|error| ReportError::Configuration {
                message: format!("failed to configure HTTP client: {error}"),
            })?;
        Ok(Self { client, config })
    }

    fn send(&self, url: &str) -> Result<Response, ReportError> {
        let mut request = self.client.get(url);
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token.value());
        }

        request.send().map_err(|error| ReportError::Network {
            message: error.to_string(),
        })
    }
}

impl RepositoryPageSource for GitHubClient {
    fn fetch_page(&self, url: &str) -> Result<RepositoryPage, ReportError> {
        tracing::debug!(url, "fetching repository page");
        let response = self.send(url)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .unwrap_or_else(|_| "(failed to read error response body)".to_owned());
            return Err(ReportError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let headers = response.headers();
        let rate_limit = RateLimitInfo::from_headers(headers);
        let link = headers.get(LINK).and_then(|value| value.to_str().ok());
        let next_url = PageLinks::parse(link).next().map(ToOwned::to_owned);

        let body = response.text().map_err(|error| ReportError::Network {
            message: format!("failed to read response body: {error}"),
        })?;
        let items: Vec<ApiRepository> =
            serde_json::from_str(&body).map_err(|error| ReportError::Decode {
                message: error.to_string(),
            })?;

        tracing::debug!(
            count = items.len(),
            has_next = next_url.is_some(),
            remaining = ?rate_limit.as_ref().map(RateLimitInfo::remaining),
            "fetched repository page"
        );

        Ok(RepositoryPage {
            items,
            next_url,
            rate_limit,
        })
    }
}

fn header_value(value: &str, what: &str) -> Result<HeaderValue, ReportError> {
    HeaderValue::from_str(value).map_err(|error| ReportError::Configuration {
        message: format!("invalid {what} header value: {error}"),
    })
}
