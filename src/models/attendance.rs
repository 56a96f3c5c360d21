//! Attendance model and related types.
//!
//! This module defines the AttendanceRecord struct for a single day of
//! attendance, and the hours-worked derivation from check-in/check-out times.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::calculate_hours_worked;
use crate::error::EngineResult;

/// The attendance outcome recorded for a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttendanceStatus {
    /// Attended for the full day.
    Present,
    /// Did not attend.
    Absent,
    /// Attended but arrived late.
    Late,
    /// Attended for half of the day.
    HalfDay,
}

/// Represents one employee's attendance on one calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The calendar date of the record.
    pub date: NaiveDate,
    /// The attendance outcome.
    pub status: AttendanceStatus,
    /// Hours worked, when recorded explicitly.
    #[serde(default)]
    pub hours_worked: Option<Decimal>,
    /// Check-in time of day.
    #[serde(default)]
    pub check_in: Option<NaiveTime>,
    /// Check-out time of day.
    #[serde(default)]
    pub check_out: Option<NaiveTime>,
}

impl AttendanceRecord {
    /// Returns the hours worked for the record.
    ///
    /// An explicit `hours_worked` value wins. Otherwise the hours are derived
    /// from `check_in` and `check_out` when both are present. A record with
    /// neither yields `None`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAttendance` if the check-out time is before the check-in time.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{AttendanceRecord, AttendanceStatus};
    /// use chrono::{NaiveDate, NaiveTime};
    /// use rust_decimal::Decimal;
    ///
    /// let record = AttendanceRecord {
    ///     date: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
    ///     status: AttendanceStatus::Present,
    ///     hours_worked: None,
    ///     check_in: NaiveTime::from_hms_opt(8, 30, 0),
    ///     check_out: NaiveTime::from_hms_opt(18, 0, 0),
    /// };
    /// assert_eq!(record.worked_hours().unwrap(), Some(Decimal::new(950, 2)));
    /// ```
    pub fn worked_hours(&self) -> EngineResult<Option<Decimal>> {
        if let Some(hours) = self.hours_worked {
            return Ok(Some(hours));
        }

        match (self.check_in, self.check_out) {
            (Some(check_in), Some(check_out)) => {
                calculate_hours_worked(self.date, check_in, check_out).map(Some)
            }
            _ => Ok(None),
        }
    }
}
