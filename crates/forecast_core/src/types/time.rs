//! Calendar date type for time-indexed series.
//!
//! This module provides:
//! - `Date`: Type-safe date wrapper around chrono::NaiveDate
//! - Day arithmetic used to extend a history into a forecast horizon
//!
//! # Examples
//!
//! ```
//! use forecast_core::types::time::Date;
//!
//! let last_close = Date::from_ymd(2024, 2, 28).unwrap();
//! let next = last_close.add_days(2);
//!
//! assert_eq!(next.to_string(), "2024-03-01");
//! assert_eq!(next - last_close, 2);
//! ```

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Type-safe date wrapper around chrono::NaiveDate.
///
/// Provides ISO 8601 serialisation and day arithmetic. Series records
/// carry one `Date` per row.
///
/// # Examples
///
/// ```
/// use forecast_core::types::time::Date;
///
/// // Create from year, month, day
/// let date = Date::from_ymd(2024, 6, 15).unwrap();
/// assert_eq!(date.year(), 2024);
/// assert_eq!(date.month(), 6);
/// assert_eq!(date.day(), 15);
///
/// // Parse from ISO 8601 string
/// let parsed: Date = "2024-06-15".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// // Calculate days between dates
/// let start = Date::from_ymd(2024, 1, 1).unwrap();
/// let end = Date::from_ymd(2024, 1, 11).unwrap();
/// assert_eq!(end - start, 10);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Returns
    /// `Ok(Date)` if the date is valid, `Err(DateError::InvalidDate)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use forecast_core::types::time::Date;
    ///
    /// let leap = Date::from_ymd(2024, 2, 29).unwrap();
    /// assert_eq!(leap.day(), 29);
    ///
    /// assert!(Date::from_ymd(2024, 2, 30).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Parses a date from an ISO 8601 string.
    ///
    /// Accepts `YYYY-MM-DD` and the `YYYY-MM-DD HH:MM:SS` / `YYYY-MM-DDTHH:MM:SS`
    /// timestamp forms that market data exports commonly carry; the time
    /// component is discarded.
    ///
    /// # Examples
    ///
    /// ```
    /// use forecast_core::types::time::Date;
    ///
    /// let date = Date::parse("2024-06-15").unwrap();
    /// let stamped = Date::parse("2024-06-15 00:00:00").unwrap();
    /// assert_eq!(date, stamped);
    ///
    /// assert!(Date::parse("not-a-date").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DateError> {
        let trimmed = s.trim();
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return Ok(Date(date));
        }
        ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"]
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
            .map(|dt| Date(dt.date()))
            .ok_or_else(|| DateError::ParseError(format!("unrecognised date '{}'", s)))
    }

    /// Returns the date `days` calendar days later (earlier if negative).
    ///
    /// Saturates at chrono's representable range.
    pub fn add_days(self, days: i64) -> Self {
        let shifted = if days >= 0 {
            self.0.checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            self.0.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        shifted.map(Date).unwrap_or(self)
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    ///
    /// The result is positive if `self` is after `other`, negative otherwise.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    /// Formats the date as ISO 8601 (YYYY-MM-DD).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ymd_valid() {
        let date = Date::from_ymd(2024, 6, 15).unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 6);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn test_from_ymd_invalid() {
        let err = Date::from_ymd(2023, 2, 29).unwrap_err();
        assert_eq!(
            err,
            DateError::InvalidDate {
                year: 2023,
                month: 2,
                day: 29
            }
        );
    }

    #[test]
    fn test_parse_iso_and_timestamp_forms() {
        let plain = Date::parse("2024-01-02").unwrap();
        assert_eq!(Date::parse("2024-01-02 16:00:00").unwrap(), plain);
        assert_eq!(Date::parse("2024-01-02T16:00:00").unwrap(), plain);
        assert_eq!(Date::parse("  2024-01-02 ").unwrap(), plain);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            Date::parse("02/01/2024"),
            Err(DateError::ParseError(_))
        ));
        assert!(Date::parse("").is_err());
    }

    #[test]
    fn test_add_days_crosses_month_and_leap_day() {
        let date = Date::from_ymd(2024, 2, 27).unwrap();
        assert_eq!(date.add_days(2), Date::from_ymd(2024, 2, 29).unwrap());
        assert_eq!(date.add_days(3), Date::from_ymd(2024, 3, 1).unwrap());
        assert_eq!(date.add_days(-27), Date::from_ymd(2024, 1, 31).unwrap());
    }

    #[test]
    fn test_sub_is_signed() {
        let start = Date::from_ymd(2024, 1, 1).unwrap();
        let end = Date::from_ymd(2024, 1, 31).unwrap();
        assert_eq!(end - start, 30);
        assert_eq!(start - end, -30);
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        let date = Date::from_ymd(2024, 12, 5).unwrap();
        let text = date.to_string();
        assert_eq!(text, "2024-12-05");
        assert_eq!(text.parse::<Date>().unwrap(), date);
    }

    #[test]
    fn test_ordering_follows_calendar() {
        let a = Date::from_ymd(2023, 12, 31).unwrap();
        let b = Date::from_ymd(2024, 1, 1).unwrap();
        assert!(a < b);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_is_transparent_iso_string() {
        let date = Date::from_ymd(2024, 6, 15).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2024-06-15\"");
        let back: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(back, date);
    }
}
