//! Domain wrapper types for the recent repository report BDD tests.

use std::str::FromStr;

/// Page number for pagination (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PageNumber(u32);

impl PageNumber {
    pub(crate) const fn value(self) -> u32 {
        self.0
    }
}

impl FromStr for PageNumber {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.parse::<u32>().map_err(|error| error.to_string())?;
        if value == 0 {
            return Err("PageNumber must be >= 1".to_owned());
        }

        Ok(Self(value))
    }
}

/// Comma-separated list of "days before now" offsets, one per repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DayOffsets(Vec<i64>);

impl DayOffsets {
    pub(crate) fn values(&self) -> &[i64] {
        &self.0
    }
}

impl FromStr for DayOffsets {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .map(|part| part.trim().parse::<i64>())
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}
