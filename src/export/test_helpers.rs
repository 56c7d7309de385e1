//! Shared fixtures for report writer tests.

use chrono::{DateTime, TimeZone, Utc};

use crate::github::RepositoryRecord;

/// Builder for [`RepositoryRecord`] values with a fixed default timestamp.
#[must_use]
pub struct RecordBuilder {
    name: String,
    description: Option<String>,
    stars: u64,
    updated_at: DateTime<Utc>,
}

impl RecordBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            description: None,
            stars: 0,
            updated_at: Utc
                .with_ymd_and_hms(2025, 6, 10, 7, 25, 32)
                .single()
                .expect("valid default timestamp"),
        }
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_owned());
        self
    }

    pub const fn stars(mut self, stars: u64) -> Self {
        self.stars = stars;
        self
    }

    pub fn updated_at(mut self, raw: &str) -> Self {
        self.updated_at = crate::github::models::parse_github_timestamp(raw)
            .expect("test timestamp should parse");
        self
    }

    pub fn build(self) -> RepositoryRecord {
        RepositoryRecord {
            name: self.name,
            description: self.description,
            stars: self.stars,
            updated_at: self.updated_at,
        }
    }
}

/// Runs a writer against an in-memory buffer and returns the UTF-8 output.
pub fn render<F>(write: F) -> String
where
    F: FnOnce(&mut Vec<u8>) -> Result<(), crate::github::ReportError>,
{
    let mut buffer = Vec::new();
    write(&mut buffer).expect("writing to a Vec should succeed");
    String::from_utf8(buffer).expect("report output should be UTF-8")
}
