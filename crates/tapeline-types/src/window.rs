//! Time window and month iteration.

use chrono::{DateTime, Datelike, Months, NaiveDate, NaiveTime, Utc};

use crate::WindowError;

/// An inclusive UTC time window for row selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    /// Start instant (inclusive).
    pub start: DateTime<Utc>,
    /// End instant (inclusive).
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// Creates a new time window, validating that start <= end.
    ///
    /// # Errors
    ///
    /// Returns an error if start > end.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, WindowError> {
        if start > end {
            return Err(WindowError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns true if the window contains the given instant.
    #[must_use]
    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        ts >= self.start && ts <= self.end
    }

    /// Returns an iterator over the first instant of every calendar month
    /// the window touches.
    #[must_use]
    pub fn months(&self) -> MonthIterator {
        MonthIterator::new(self.start.date_naive(), self.end.date_naive())
    }
}

impl std::fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start.to_rfc3339(), self.end.to_rfc3339())
    }
}

/// Iterator over month starts in a time window.
#[derive(Debug, Clone)]
pub struct MonthIterator {
    current: Option<NaiveDate>,
    end: NaiveDate,
}

impl MonthIterator {
    fn new(start: NaiveDate, end: NaiveDate) -> Self {
        let first = start.with_day(1);
        Self {
            current: first,
            end,
        }
    }
}

impl Iterator for MonthIterator {
    type Item = DateTime<Utc>;

    fn next(&mut self) -> Option<Self::Item> {
        let month = self.current.filter(|m| *m <= self.end)?;
        self.current = month.checked_add_months(Months::new(1));
        Some(month.and_time(NaiveTime::MIN).and_utc())
    }
}
