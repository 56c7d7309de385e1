//! Rate limit information from GitHub API responses.
//!
//! GitHub reports the caller's request allowance through `X-RateLimit-*`
//! headers on every response. The collector inspects the remaining count after
//! each page and aborts the run once it reaches zero.

use std::time::{SystemTime, UNIX_EPOCH};

use http::HeaderMap;

/// Header carrying the maximum requests allowed in the current window.
pub const RATE_LIMIT_LIMIT_HEADER: &str = "x-ratelimit-limit";
/// Header carrying the requests left in the current window.
pub const RATE_LIMIT_REMAINING_HEADER: &str = "x-ratelimit-remaining";
/// Header carrying the Unix timestamp at which the window resets.
pub const RATE_LIMIT_RESET_HEADER: &str = "x-ratelimit-reset";

/// Rate limit snapshot extracted from GitHub API response headers.
///
/// The remaining count is signed so that any value GitHub reports, however
/// odd, still compares sensibly against zero.
///
/// # Example
///
/// ```
/// use recent_repos::github::rate_limit::RateLimitInfo;
///
/// let info = RateLimitInfo::new(59).with_limit(Some(60));
/// assert!(!info.is_exhausted());
/// assert_eq!(info.remaining(), 59);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitInfo {
    remaining: i64,
    limit: Option<u32>,
    reset_at: Option<u64>,
}

impl RateLimitInfo {
    /// Creates a snapshot from the remaining request count.
    #[must_use]
    pub const fn new(remaining: i64) -> Self {
        Self {
            remaining,
            limit: None,
            reset_at: None,
        }
    }

    /// Sets the window's request limit.
    #[must_use]
    pub const fn with_limit(mut self, limit: Option<u32>) -> Self {
        self.limit = limit;
        self
    }

    /// Sets the Unix timestamp at which the window resets.
    #[must_use]
    pub const fn with_reset_at(mut self, reset_at: Option<u64>) -> Self {
        self.reset_at = reset_at;
        self
    }

    /// Reads the rate limit headers from a response.
    ///
    /// Returns `None` when `X-RateLimit-Remaining` is absent or is not an
    /// integer. The limit and reset headers are optional.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let remaining = header_number::<i64>(headers, RATE_LIMIT_REMAINING_HEADER)?;
        Some(
            Self::new(remaining)
                .with_limit(header_number(headers, RATE_LIMIT_LIMIT_HEADER))
                .with_reset_at(header_number(headers, RATE_LIMIT_RESET_HEADER)),
        )
    }

    /// Returns the remaining requests in the current window.
    #[must_use]
    pub const fn remaining(&self) -> i64 {
        self.remaining
    }

    /// Returns the maximum requests allowed in the current window, if known.
    #[must_use]
    pub const fn limit(&self) -> Option<u32> {
        self.limit
    }

    /// Returns the Unix timestamp when the rate limit resets, if known.
    #[must_use]
    pub const fn reset_at(&self) -> Option<u64> {
        self.reset_at
    }

    /// Returns true if the rate limit has been exhausted.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.remaining <= 0
    }

    /// Calculates seconds until the rate limit resets.
    ///
    /// Returns `None` when no reset time was reported and 0 if the reset time
    /// has already passed.
    #[must_use]
    pub fn seconds_until_reset(&self) -> Option<u64> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |duration| duration.as_secs());

        self.reset_at.map(|reset_at| reset_at.saturating_sub(now))
    }
}

fn header_number<T: std::str::FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse().ok())
}
