//! Pagination links for GitHub API responses.
//!
//! GitHub advertises neighbouring pages through an RFC 5988 `Link` header:
//!
//! ```text
//! <https://api.github.com/orgs/o/repos?page=2>; rel="next", <...?page=9>; rel="last"
//! ```
//!
//! [`PageLinks::parse`] decodes that header into a relation-to-URL mapping.
//! Parsing never fails; anything it cannot make sense of is dropped.

use std::collections::BTreeMap;

/// Relation name GitHub uses for the following page.
pub const NEXT_RELATION: &str = "next";

/// Relation-to-URL mapping decoded from a `Link` header.
///
/// # Example
///
/// ```
/// use recent_repos::github::pagination::PageLinks;
///
/// let links = PageLinks::parse(Some(
///     r#"<https://api.github.com/x?page=2>; rel="next", <https://api.github.com/x?page=5>; rel="last""#,
/// ));
/// assert_eq!(links.next(), Some("https://api.github.com/x?page=2"));
/// assert_eq!(links.get("last"), Some("https://api.github.com/x?page=5"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLinks {
    relations: BTreeMap<String, String>,
}

impl PageLinks {
    /// Parses a raw `Link` header value.
    ///
    /// Entries are separated by `,` and parameters by `;`. The first section
    /// is the target URL, with surrounding angle brackets removed when both are
    /// present. Entries without a `rel` parameter are skipped; a repeated
    /// relation keeps the last URL seen.
    #[must_use]
    pub fn parse(header: Option<&str>) -> Self {
        let relations = header
            .into_iter()
            .flat_map(|value| value.split(','))
            .filter_map(parse_entry)
            .collect();

        Self { relations }
    }

    /// Returns the URL for the given relation.
    #[must_use]
    pub fn get(&self, relation: &str) -> Option<&str> {
        self.relations.get(relation).map(String::as_str)
    }

    /// Returns the URL of the next page.
    #[must_use]
    pub fn next(&self) -> Option<&str> {
        self.get(NEXT_RELATION)
    }

    /// Returns true when no relations were decoded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }

    /// Returns the number of decoded relations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.relations.len()
    }
}

fn parse_entry(entry: &str) -> Option<(String, String)> {
    let mut sections = entry.trim().split(';');
    let target = sections.next()?.trim();
    let mut params = sections.peekable();
    params.peek()?;

    let url = target
        .strip_prefix('<')
        .and_then(|rest| rest.strip_suffix('>'))
        .unwrap_or(target);

    // The last `rel=` parameter wins.
    let relation = params
        .filter_map(|param| param.trim().strip_prefix("rel="))
        .map(|value| value.trim_matches('"'))
        .next_back()
        .filter(|value| !value.is_empty())?;

    Some((relation.to_owned(), url.to_owned()))
}
