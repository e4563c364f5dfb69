//! Inclusive date interval.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Date;
use crate::error::{TierwiseError, TierwiseResult};

/// An inclusive `[start, end]` date interval.
///
/// Both endpoints belong to the range, so a range whose start equals its
/// end covers exactly one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    start: Date,
    end: Date,
}

impl DateRange {
    /// Creates a new range.
    ///
    /// # Errors
    ///
    /// Returns `TierwiseError::InvalidRange` if `start` is after `end`.
    pub fn new(start: Date, end: Date) -> TierwiseResult<Self> {
        if start > end {
            return Err(TierwiseError::invalid_range(format!(
                "start {start} is after end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Builds a range whose ordering the caller has already established.
    pub(crate) fn spanning(start: Date, end: Date) -> Self {
        debug_assert!(start <= end, "spanning called with {start} > {end}");
        Self { start, end }
    }

    /// Creates a range from `(year, month, day)` triples.
    ///
    /// # Errors
    ///
    /// Returns `TierwiseError::InvalidDate` if either triple is not a
    /// calendar date, or `TierwiseError::InvalidRange` if start is after end.
    pub fn from_ymd(start: (i32, u32, u32), end: (i32, u32, u32)) -> TierwiseResult<Self> {
        Self::new(
            Date::from_ymd(start.0, start.1, start.2)?,
            Date::from_ymd(end.0, end.1, end.2)?,
        )
    }

    /// The first day of the range.
    #[must_use]
    pub fn start(&self) -> Date {
        self.start
    }

    /// The last day of the range.
    #[must_use]
    pub fn end(&self) -> Date {
        self.end
    }

    /// Inclusive day count.
    #[must_use]
    pub fn length_days(&self) -> i64 {
        self.start.days_between(&self.end) + 1
    }

    /// Returns true if `date` lies within the range.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    /// Returns true if the two ranges share at least one day.
    #[must_use]
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// The days common to both ranges, if any.
    #[must_use]
    pub fn intersection(&self, other: &DateRange) -> Option<DateRange> {
        if !self.overlaps(other) {
            return None;
        }
        Some(DateRange {
            start: self.start.max(other.start),
            end: self.end.min(other.end),
        })
    }

    /// Number of days common to both ranges (0 if disjoint).
    #[must_use]
    pub fn overlap_days(&self, other: &DateRange) -> i64 {
        self.intersection(other)
            .map_or(0, |shared| shared.length_days())
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}
