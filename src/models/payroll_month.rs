//! Payroll month model.
//!
//! This module contains the [`PayrollMonth`] type, a validated `YYYY-MM`
//! value with calendar-correct first and last days.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A calendar month that payroll is processed for.
///
/// Serializes as `YYYY-MM`. The first and last days are computed once at
/// construction, so February and 30-day months have their true bounds.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayrollMonth;
/// use chrono::NaiveDate;
///
/// let month: PayrollMonth = "2024-02".parse().unwrap();
/// assert_eq!(month.first_day(), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
/// assert_eq!(month.last_day(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// assert!(month.contains(NaiveDate::from_ymd_opt(2024, 2, 15).unwrap()));
/// assert!(!month.contains(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PayrollMonth {
    first_day: NaiveDate,
    last_day: NaiveDate,
}

impl PayrollMonth {
    /// Creates a payroll month from a year and a 1-based month number.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMonth` if the month is outside 1..=12 or the year is
    /// outside 1..=9999.
    pub fn new(year: i32, month: u32) -> EngineResult<Self> {
        let invalid = || EngineError::InvalidMonth {
            value: format!("{:04}-{:02}", year, month),
        };

        if !(1..=9999).contains(&year) {
            return Err(invalid());
        }

        let first_day = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        let (next_year, next_month) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };
        let last_day = NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .and_then(|d| d.pred_opt())
            .ok_or_else(invalid)?;

        Ok(Self {
            first_day,
            last_day,
        })
    }

    /// Returns the month containing the given date.
    pub fn from_date(date: NaiveDate) -> EngineResult<Self> {
        Self::new(date.year(), date.month())
    }

    /// Returns the calendar year.
    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    /// Returns the 1-based month number.
    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    /// Returns the first day of the month.
    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// Returns the last day of the month.
    pub fn last_day(&self) -> NaiveDate {
        self.last_day
    }

    /// Checks if a date falls within the month (inclusive of both ends).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.first_day && date <= self.last_day
    }
}

impl fmt::Display for PayrollMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for PayrollMonth {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidMonth {
            value: s.to_string(),
        };

        let (year_str, month_str) = s.split_once('-').ok_or_else(invalid)?;
        if year_str.len() != 4 || month_str.len() != 2 {
            return Err(invalid());
        }
        if !year_str.chars().chain(month_str.chars()).all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let year: i32 = year_str.parse().map_err(|_| invalid())?;
        let month: u32 = month_str.parse().map_err(|_| invalid())?;

        Self::new(year, month).map_err(|_| invalid())
    }
}

impl TryFrom<String> for PayrollMonth {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PayrollMonth> for String {
    fn from(month: PayrollMonth) -> Self {
        month.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        let month: PayrollMonth = "2025-03".parse().unwrap();
        assert_eq!(month.year(), 2025);
        assert_eq!(month.month(), 3);
        assert_eq!(month.to_string(), "2025-03");
    }

    #[test]
    fn test_thirty_day_month_bounds() {
        let month: PayrollMonth = "2025-04".parse().unwrap();
        assert_eq!(month.first_day(), make_date("2025-04-01"));
        assert_eq!(month.last_day(), make_date("2025-04-30"));
    }

    #[test]
    fn test_february_non_leap_year() {
        let month: PayrollMonth = "2025-02".parse().unwrap();
        assert_eq!(month.last_day(), make_date("2025-02-28"));
    }

    #[test]
    fn test_february_leap_year() {
        let month: PayrollMonth = "2024-02".parse().unwrap();
        assert_eq!(month.last_day(), make_date("2024-02-29"));
    }

    #[test]
    fn test_december_rolls_into_next_year() {
        let month: PayrollMonth = "2025-12".parse().unwrap();
        assert_eq!(month.last_day(), make_date("2025-12-31"));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let month: PayrollMonth = "2025-01".parse().unwrap();
        assert!(month.contains(make_date("2025-01-01")));
        assert!(month.contains(make_date("2025-01-31")));
        assert!(!month.contains(make_date("2024-12-31")));
        assert!(!month.contains(make_date("2025-02-01")));
    }

    #[test]
    fn test_from_date() {
        let month = PayrollMonth::from_date(make_date("2025-07-19")).unwrap();
        assert_eq!(month.to_string(), "2025-07");
    }

    #[test]
    fn test_rejects_malformed_text() {
        for value in ["2025-13", "2025-00", "2025-3", "25-03", "2025/03", "abcd-ef", "", "2025-03-01"] {
            match value.parse::<PayrollMonth>() {
                Err(EngineError::InvalidMonth { value: v }) => assert_eq!(v, value),
                other => panic!("Expected InvalidMonth for {:?}, got {:?}", value, other),
            }
        }
    }

    #[test]
    fn test_serde_uses_text_form() {
        let month: PayrollMonth = "2025-03".parse().unwrap();
        assert_eq!(serde_json::to_string(&month).unwrap(), "\"2025-03\"");

        let parsed: PayrollMonth = serde_json::from_str("\"2025-03\"").unwrap();
        assert_eq!(parsed, month);

        let bad: Result<PayrollMonth, _> = serde_json::from_str("\"2025-31\"");
        assert!(bad.is_err());
    }

    #[test]
    fn test_ordering_follows_calendar() {
        let earlier: PayrollMonth = "2024-12".parse().unwrap();
        let later: PayrollMonth = "2025-01".parse().unwrap();
        assert!(earlier < later);
    }
}
