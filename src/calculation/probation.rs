//! Probation period date arithmetic.
//!
//! A probation period runs a whole number of calendar months from the join
//! date. Month ends are clamped, so a 31 August join with six months of
//! probation ends on the last day of February.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::Employee;

/// Default probation length in months.
pub const DEFAULT_PROBATION_MONTHS: u32 = 6;

/// The probation position of an employee on a given date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbationStatus {
    /// The employee the status belongs to.
    pub employee_id: String,
    /// The date probation ends.
    pub end_date: NaiveDate,
    /// Whether the end date has been reached.
    pub is_complete: bool,
    /// Days until the end date; zero once complete.
    pub days_remaining: i64,
}

/// Returns the date a probation period of `months` ends.
///
/// # Errors
///
/// Returns `InvalidInput` if the end date falls outside the supported calendar.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::probation_end_date;
/// use chrono::NaiveDate;
///
/// let joined = NaiveDate::from_ymd_opt(2024, 8, 31).unwrap();
/// assert_eq!(
///     probation_end_date(joined, 6).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()
/// );
/// ```
pub fn probation_end_date(join_date: NaiveDate, months: u32) -> EngineResult<NaiveDate> {
    join_date
        .checked_add_months(Months::new(months))
        .ok_or_else(|| EngineError::InvalidInput {
            field: "probation_months".to_string(),
            message: format!("{} months after {} is out of range", months, join_date),
        })
}

/// Evaluates an employee's probation on the given date.
///
/// The employee's own `probation_months` wins over `default_months`.
pub fn evaluate_probation(
    employee: &Employee,
    default_months: u32,
    on: NaiveDate,
) -> EngineResult<ProbationStatus> {
    let months = employee.probation_months.unwrap_or(default_months);
    let end_date = probation_end_date(employee.join_date, months)?;
    let is_complete = on >= end_date;
    let days_remaining = if is_complete {
        0
    } else {
        (end_date - on).num_days()
    };

    Ok(ProbationStatus {
        employee_id: employee.id.clone(),
        end_date,
        is_complete,
        days_remaining,
    })
}

/// Returns the probation status of every employee whose probation ends
/// within `within_days` of `on` (inclusive) and is not yet complete.
///
/// Results are ordered by end date, earliest first.
pub fn probations_ending_within(
    employees: &[Employee],
    default_months: u32,
    on: NaiveDate,
    within_days: i64,
) -> EngineResult<Vec<ProbationStatus>> {
    let mut ending = Vec::new();
    for employee in employees {
        let status = evaluate_probation(employee, default_months, on)?;
        if !status.is_complete && status.days_remaining <= within_days {
            ending.push(status);
        }
    }
    ending.sort_by(|a, b| a.end_date.cmp(&b.end_date));
    Ok(ending)
}
