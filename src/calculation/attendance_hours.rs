//! Attendance hour calculation.
//!
//! Derives hours worked from the check-in and check-out times of a day's
//! attendance record.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

use super::rounding::round_half_up;

/// Seconds in one hour.
const SECONDS_PER_HOUR: i64 = 3600;

/// Calculates the hours between check-in and check-out on the same day.
///
/// The result is rounded half-up to two decimal places.
///
/// # Errors
///
/// Returns `InvalidAttendance` if `check_out` is earlier than `check_in`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_hours_worked;
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let date = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
/// let hours = calculate_hours_worked(
///     date,
///     NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(17, 45, 0).unwrap(),
/// )
/// .unwrap();
/// assert_eq!(hours, Decimal::new(875, 2));
/// ```
pub fn calculate_hours_worked(
    date: NaiveDate,
    check_in: NaiveTime,
    check_out: NaiveTime,
) -> EngineResult<Decimal> {
    if check_out < check_in {
        return Err(EngineError::InvalidAttendance {
            date,
            message: format!(
                "check-out {} is before check-in {}",
                check_out.format("%H:%M:%S"),
                check_in.format("%H:%M:%S")
            ),
        });
    }

    let seconds = (check_out - check_in).num_seconds();
    let hours = Decimal::new(seconds, 0) / Decimal::new(SECONDS_PER_HOUR, 0);

    Ok(round_half_up(hours, 2))
}
