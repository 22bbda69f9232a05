//! Inclusive calendar date range.
//!
//! # Time Model
//! Dates are `chrono::NaiveDate` (no time zone). An event covers every date
//! in `[start, end]`, both ends included, so a one-day event has
//! `start == end`.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// A closed interval of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// First date (inclusive).
    pub start: NaiveDate,
    /// Last date (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a new range. No ordering check is made; see [`is_inverted`](Self::is_inverted).
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Single-day range.
    pub fn single(date: NaiveDate) -> Self {
        Self::new(date, date)
    }

    /// Whether `end` precedes `start`.
    #[inline]
    pub fn is_inverted(&self) -> bool {
        self.end < self.start
    }

    /// Number of dates in the range (0 if inverted).
    pub fn day_count(&self) -> usize {
        if self.is_inverted() {
            return 0;
        }
        (self.end - self.start).num_days() as usize + 1
    }

    /// Whether a date falls within the range.
    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Iterates the dates in ascending order.
    ///
    /// Includes `end` even when it is `NaiveDate::MAX`.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let start = self.start;
        (0..self.day_count() as u64).map(move |i| start + Days::new(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_day_count_inclusive() {
        assert_eq!(DateRange::new(d(2024, 3, 1), d(2024, 3, 6)).day_count(), 6);
        assert_eq!(DateRange::single(d(2024, 3, 1)).day_count(), 1);
    }

    #[test]
    fn test_day_count_crosses_month_and_leap_day() {
        let r = DateRange::new(d(2024, 2, 27), d(2024, 3, 2));
        assert_eq!(r.day_count(), 5); // 27, 28, 29, 1, 2
        let days: Vec<_> = r.days().collect();
        assert_eq!(days[2], d(2024, 2, 29));
        assert_eq!(*days.last().unwrap(), d(2024, 3, 2));
    }

    #[test]
    fn test_inverted_range() {
        let r = DateRange::new(d(2024, 3, 5), d(2024, 3, 1));
        assert!(r.is_inverted());
        assert_eq!(r.day_count(), 0);
        assert_eq!(r.days().count(), 0);
    }

    #[test]
    fn test_days_reach_max_date() {
        let end = NaiveDate::MAX;
        let start = end - Days::new(3);
        let r = DateRange::new(start, end);

        let days: Vec<_> = r.days().collect();
        assert_eq!(days.len(), 4);
        assert_eq!(days.len(), r.day_count());
        assert_eq!(days[0], start);
        assert_eq!(*days.last().unwrap(), NaiveDate::MAX);
        assert_eq!(DateRange::single(end).days().collect::<Vec<_>>(), vec![end]);
    }

    #[test]
    fn test_contains() {
        let r = DateRange::new(d(2024, 1, 10), d(2024, 1, 12));
        assert!(r.contains(d(2024, 1, 10)));
        assert!(r.contains(d(2024, 1, 12)));
        assert!(!r.contains(d(2024, 1, 13)));
        assert!(!r.contains(d(2024, 1, 9)));
    }

    #[test]
    fn test_serde_iso_dates() {
        let r: DateRange =
            serde_json::from_str(r#"{"start":"2024-05-01","end":"2024-05-03"}"#).unwrap();
        assert_eq!(r.day_count(), 3);
    }
}
