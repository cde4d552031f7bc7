//! Date type for bond pricing calculations.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

use crate::error::{TesouroError, TesouroResult};

/// Day of month on which the IPCA reference value is republished.
///
/// The inflation index is published mid-month; the accumulated reference
/// value (VNA) is anchored to the 15th of each month by market convention.
pub const PUBLICATION_DAY: u32 = 15;

/// A calendar date for bond pricing calculations.
///
/// This is a newtype wrapper around `chrono::NaiveDate` providing the
/// date operations the pricing engine needs, including the mid-month
/// index-publication helpers used by the inflation-linked family.
///
/// # Example
///
/// ```rust
/// use tesouro_core::types::Date;
///
/// let date = Date::from_ymd(2025, 6, 20).unwrap();
/// let anchor = date.last_publication_date().unwrap();
/// assert_eq!(anchor, Date::from_ymd(2025, 6, 15).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `TesouroError::InvalidDate` if the date is invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> TesouroResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| TesouroError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `TesouroError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> TesouroResult<Self> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|_| TesouroError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Returns today's date.
    #[must_use]
    pub fn today() -> Self {
        Date(chrono::Local::now().date_naive())
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Adds a number of days to the date.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Adds a number of months to the date.
    ///
    /// If the resulting day would be invalid (e.g., Jan 31 + 1 month),
    /// it rolls back to the last valid day of the month.
    ///
    /// # Errors
    ///
    /// Returns `TesouroError::InvalidDate` if the result is out of range.
    pub fn add_months(&self, months: i32) -> TesouroResult<Self> {
        let total_months = self.year() * 12 + self.month() as i32 - 1 + months;
        let new_year = total_months.div_euclid(12);
        let new_month = (total_months.rem_euclid(12) + 1) as u32;

        // Clamp day to valid range for new month
        let max_day = days_in_month(new_year, new_month);
        let new_day = self.day().min(max_day);

        Self::from_ymd(new_year, new_month, new_day)
    }

    /// Calculates the number of calendar days between two dates.
    ///
    /// Positive if `other` is after `self`, negative otherwise.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }

    /// Returns the most recent index-publication date (the 15th) on or
    /// before this date.
    ///
    /// If this date is before the 15th of its month, the anchor is the 15th
    /// of the previous month (rolling into December of the previous year
    /// when needed).
    ///
    /// # Errors
    ///
    /// Returns `TesouroError::InvalidDate` if the result is out of range.
    pub fn last_publication_date(&self) -> TesouroResult<Self> {
        let (mut year, mut month) = (self.year(), self.month());
        if self.day() < PUBLICATION_DAY {
            if month == 1 {
                month = 12;
                year -= 1;
            } else {
                month -= 1;
            }
        }
        Self::from_ymd(year, month, PUBLICATION_DAY)
    }

    /// Returns the index-publication window bracketing this date.
    ///
    /// The window is `(prior 15th, next 15th)`: on or after the 15th the
    /// window starts in the current month and ends in the following month;
    /// before the 15th it starts in the previous month and ends in the
    /// current one. A date exactly on the 15th selects the
    /// current-month/next-month pair.
    ///
    /// # Errors
    ///
    /// Returns `TesouroError::InvalidDate` if either bound is out of range.
    pub fn publication_window(&self) -> TesouroResult<(Self, Self)> {
        let prior = if self.day() >= PUBLICATION_DAY {
            Self::from_ymd(self.year(), self.month(), PUBLICATION_DAY)?
        } else {
            self.last_publication_date()?
        };
        let next = prior.add_months(1)?;
        Ok((prior, next))
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl Add<i64> for Date {
    type Output = Self;

    /// Adds days to a date.
    fn add(self, days: i64) -> Self::Output {
        self.add_days(days)
    }
}

impl Sub<i64> for Date {
    type Output = Self;

    /// Subtracts days from a date.
    fn sub(self, days: i64) -> Self::Output {
        self.add_days(-days)
    }
}

impl Sub<Date> for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: Date) -> Self::Output {
        other.days_between(&self)
    }
}

/// Helper function to get days in a month for a given year.
fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => panic!("Invalid month: {month}"),
    }
}

/// Helper function to check if a year is a leap year.
fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_creation() {
        let date = Date::from_ymd(2025, 6, 15).unwrap();
        assert_eq!(date.year(), 2025);
        assert_eq!(date.month(), 6);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn test_invalid_date() {
        assert!(Date::from_ymd(2025, 2, 30).is_err());
        assert!(Date::from_ymd(2025, 13, 1).is_err());
    }

    #[test]
    fn test_parse() {
        let date = Date::parse("2025-06-15").unwrap();
        assert_eq!(date.year(), 2025);
        assert_eq!(date.month(), 6);
        assert_eq!(date.day(), 15);
        assert!(Date::parse("15/06/2025").is_err());
    }

    #[test]
    fn test_add_months_clamps_day() {
        let date = Date::from_ymd(2025, 1, 31).unwrap();
        let result = date.add_months(1).unwrap();
        assert_eq!(result.month(), 2);
        assert_eq!(result.day(), 28); // Rolled back to last valid day
    }

    #[test]
    fn test_add_months_across_year() {
        let date = Date::from_ymd(2025, 12, 15).unwrap();
        let result = date.add_months(1).unwrap();
        assert_eq!(result.year(), 2026);
        assert_eq!(result.month(), 1);
        assert_eq!(result.day(), 15);
    }

    #[test]
    fn test_days_between() {
        let d1 = Date::from_ymd(2025, 1, 1).unwrap();
        let d2 = Date::from_ymd(2025, 1, 31).unwrap();
        assert_eq!(d1.days_between(&d2), 30);
        assert_eq!(d2.days_between(&d1), -30);
    }

    #[test]
    fn test_last_publication_date_after_the_15th() {
        let date = Date::from_ymd(2025, 6, 20).unwrap();
        assert_eq!(
            date.last_publication_date().unwrap(),
            Date::from_ymd(2025, 6, 15).unwrap()
        );
    }

    #[test]
    fn test_last_publication_date_before_the_15th() {
        let date = Date::from_ymd(2025, 6, 10).unwrap();
        assert_eq!(
            date.last_publication_date().unwrap(),
            Date::from_ymd(2025, 5, 15).unwrap()
        );
    }

    #[test]
    fn test_last_publication_date_january_rollover() {
        let date = Date::from_ymd(2025, 1, 3).unwrap();
        assert_eq!(
            date.last_publication_date().unwrap(),
            Date::from_ymd(2024, 12, 15).unwrap()
        );
    }

    #[test]
    fn test_publication_window_on_the_15th() {
        // Exactly on the 15th selects the current/next pair
        let date = Date::from_ymd(2025, 6, 15).unwrap();
        let (prior, next) = date.publication_window().unwrap();
        assert_eq!(prior, Date::from_ymd(2025, 6, 15).unwrap());
        assert_eq!(next, Date::from_ymd(2025, 7, 15).unwrap());
    }

    #[test]
    fn test_publication_window_before_the_15th() {
        let date = Date::from_ymd(2025, 6, 10).unwrap();
        let (prior, next) = date.publication_window().unwrap();
        assert_eq!(prior, Date::from_ymd(2025, 5, 15).unwrap());
        assert_eq!(next, Date::from_ymd(2025, 6, 15).unwrap());
    }

    #[test]
    fn test_publication_window_december() {
        let date = Date::from_ymd(2025, 12, 20).unwrap();
        let (prior, next) = date.publication_window().unwrap();
        assert_eq!(prior, Date::from_ymd(2025, 12, 15).unwrap());
        assert_eq!(next, Date::from_ymd(2026, 1, 15).unwrap());
    }

    #[test]
    fn test_date_arithmetic_operators() {
        let d1 = Date::from_ymd(2025, 1, 1).unwrap();

        let d2 = d1 + 10;
        assert_eq!(d2.day(), 11);

        let d3 = d2 - 5;
        assert_eq!(d3.day(), 6);

        assert_eq!(d2 - d1, 10);
    }

    #[test]
    fn test_display() {
        let date = Date::from_ymd(2025, 6, 15).unwrap();
        assert_eq!(format!("{}", date), "2025-06-15");
    }

    #[test]
    fn test_serde() {
        let date = Date::from_ymd(2025, 6, 15).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2025-06-15\"");
        let parsed: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
    }
}
