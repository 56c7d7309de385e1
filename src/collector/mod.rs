//! Page-by-page collection of recently updated repositories.
//!
//! [`PageWalk`] lazily follows `next` links from a starting URL. [`collect_recent`]
//! drains it, keeping repositories updated at or after the cutoff. Because the
//! listing is requested newest-first, a page whose last entry predates the
//! cutoff ends the walk; the per-record filter alone keeps the result correct
//! if that ordering ever fails.

use std::cmp::Reverse;

use chrono::{DateTime, TimeDelta, Utc};

use crate::github::{
    ApiRepository, RateLimitInfo, ReportError, RepositoryPage, RepositoryPageSource,
    RepositoryRecord,
};

/// Returns the earliest update instant still considered recent.
///
/// Saturates at the earliest representable instant for very large windows.
#[must_use]
pub fn lookback_cutoff(now: DateTime<Utc>, days: u32) -> DateTime<Utc> {
    TimeDelta::try_days(i64::from(days))
        .and_then(|window| now.checked_sub_signed(window))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Lazy sequence of listing pages linked by `next` URLs.
///
/// The walk ends when a page has no `next` link or a fetch fails; the failure
/// is yielded once and nothing is fetched after it.
pub struct PageWalk<'a, S: ?Sized> {
    source: &'a S,
    next_url: Option<String>,
}

impl<'a, S: RepositoryPageSource + ?Sized> PageWalk<'a, S> {
    /// Starts a walk at `start_url`.
    #[must_use]
    pub fn new(source: &'a S, start_url: impl Into<String>) -> Self {
        Self {
            source,
            next_url: Some(start_url.into()),
        }
    }
}

impl<S: RepositoryPageSource + ?Sized> Iterator for PageWalk<'_, S> {
    type Item = Result<RepositoryPage, ReportError>;

    fn next(&mut self) -> Option<Self::Item> {
        let url = self.next_url.take()?;
        let result = self.source.fetch_page(&url);
        if let Ok(page) = &result {
            self.next_url.clone_from(&page.next_url);
        }
        Some(result)
    }
}

/// Result of a collection run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    /// Qualifying repositories, newest update first.
    pub records: Vec<RepositoryRecord>,
    /// Number of pages fetched.
    pub pages_fetched: usize,
    /// Repositories skipped because their timestamp did not parse.
    pub skipped: usize,
    /// True when the walk stopped before pagination was exhausted.
    pub stopped_early: bool,
}

/// Collects repositories updated at or after `cutoff`.
///
/// # Errors
///
/// Propagates fetch failures unchanged. Returns
/// [`ReportError::RateLimitExhausted`] as soon as a page reports no remaining
/// requests; that page's repositories are discarded.
pub fn collect_recent<S: RepositoryPageSource + ?Sized>(
    source: &S,
    start_url: &str,
    cutoff: DateTime<Utc>,
) -> Result<Collection, ReportError> {
    let mut collection = Collection::default();

    for fetched in PageWalk::new(source, start_url) {
        let page = fetched?;
        collection.pages_fetched += 1;

        if let Some(rate_limit) = page.rate_limit.filter(RateLimitInfo::is_exhausted) {
            tracing::warn!(
                pages = collection.pages_fetched,
                reset_in_seconds = ?rate_limit.seconds_until_reset(),
                "rate limit exhausted; aborting collection"
            );
            return Err(ReportError::RateLimitExhausted {
                rate_limit: Some(rate_limit),
            });
        }

        if absorb_page(&mut collection, page, cutoff) {
            tracing::debug!(
                pages = collection.pages_fetched,
                "oldest repository on page predates cutoff; stopping"
            );
            collection.stopped_early = true;
            break;
        }
    }

    sort_newest_first(&mut collection.records);
    Ok(collection)
}

/// Filters one page into the collection.
///
/// Returns true when the page's last entry predates the cutoff.
fn absorb_page(
    collection: &mut Collection,
    page: RepositoryPage,
    cutoff: DateTime<Utc>,
) -> bool {
    let oldest_on_page = page
        .items
        .last()
        .and_then(ApiRepository::parsed_updated_at);

    for item in page.items {
        let Some(updated_at) = item.parsed_updated_at() else {
            tracing::warn!(
                repository = %item.name,
                updated_at = ?item.updated_at,
                "skipping repository with unparseable updated_at"
            );
            collection.skipped += 1;
            continue;
        };

        if updated_at >= cutoff {
            collection.records.push(item.with_updated_at(updated_at));
        }
    }

    oldest_on_page.is_some_and(|oldest| oldest < cutoff)
}

/// Sorts records by update time, newest first. Ties keep arrival order.
pub fn sort_newest_first(records: &mut [RepositoryRecord]) {
    records.sort_by_key(|record| Reverse(record.updated_at));
}
