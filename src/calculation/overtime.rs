//! Monthly overtime calculation.
//!
//! Each attendance record contributes the hours it exceeds the daily
//! threshold. The monthly total is priced at a flat hourly overtime rate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, AttendanceStatus, AuditStep, AuditWarning};

/// Default daily overtime threshold in hours.
pub const DEFAULT_DAILY_OVERTIME_THRESHOLD: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Default overtime pay per hour (200 per 30 minutes).
pub const DEFAULT_OVERTIME_RATE_PER_HOUR: Decimal = Decimal::from_parts(400, 0, 0, false, 0);

/// Warning code raised when an absent day carries overtime hours.
pub const OVERTIME_ON_ABSENT_DAY: &str = "OVERTIME_ON_ABSENT_DAY";

/// The result of calculating overtime for a month of attendance.
///
/// `overtime_pay` is not rounded; rounding happens once on the final record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeResult {
    /// Total overtime hours across all records.
    pub overtime_hours: Decimal,
    /// Overtime hours multiplied by the hourly rate.
    pub overtime_pay: Decimal,
    /// Number of records that contributed overtime.
    pub days_with_overtime: u32,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
    /// Warnings about records that were counted but look suspicious.
    pub warnings: Vec<AuditWarning>,
}

/// Returns the hours worked beyond the threshold, or zero.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{daily_overtime_hours, DEFAULT_DAILY_OVERTIME_THRESHOLD};
/// use rust_decimal::Decimal;
///
/// assert_eq!(daily_overtime_hours(Decimal::new(10, 0), DEFAULT_DAILY_OVERTIME_THRESHOLD), Decimal::new(2, 0));
/// assert_eq!(daily_overtime_hours(Decimal::new(8, 0), DEFAULT_DAILY_OVERTIME_THRESHOLD), Decimal::ZERO);
/// ```
pub fn daily_overtime_hours(worked_hours: Decimal, threshold: Decimal) -> Decimal {
    if worked_hours > threshold {
        worked_hours - threshold
    } else {
        Decimal::ZERO
    }
}

/// Calculates overtime hours and pay for a month of attendance records.
///
/// Overtime is taken from the numeric hours of each record regardless of its
/// attendance status. A record marked absent that still carries overtime is
/// counted and reported as a warning.
///
/// # Arguments
///
/// * `records` - The attendance records for one employee and one month
/// * `threshold` - Hours per day after which overtime starts
/// * `rate_per_hour` - Overtime pay per hour
/// * `step_number` - The step number for audit trail sequencing
///
/// # Errors
///
/// Returns `InvalidInput` if a record has negative hours or the totals
/// overflow, or `InvalidAttendance` if its hours cannot be derived from its
/// times.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{calculate_overtime, DEFAULT_DAILY_OVERTIME_THRESHOLD, DEFAULT_OVERTIME_RATE_PER_HOUR};
/// use payroll_engine::models::{AttendanceRecord, AttendanceStatus};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let records = vec![AttendanceRecord {
///     date: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
///     status: AttendanceStatus::Present,
///     hours_worked: Some(Decimal::new(10, 0)),
///     check_in: None,
///     check_out: None,
/// }];
///
/// let result = calculate_overtime(
///     &records,
///     DEFAULT_DAILY_OVERTIME_THRESHOLD,
///     DEFAULT_OVERTIME_RATE_PER_HOUR,
///     1,
/// )
/// .unwrap();
/// assert_eq!(result.overtime_hours, Decimal::new(2, 0));
/// assert_eq!(result.overtime_pay, Decimal::new(800, 0));
/// ```
pub fn calculate_overtime(
    records: &[AttendanceRecord],
    threshold: Decimal,
    rate_per_hour: Decimal,
    step_number: u32,
) -> EngineResult<OvertimeResult> {
    let mut overtime_hours = Decimal::ZERO;
    let mut days_with_overtime: u32 = 0;
    let mut warnings = Vec::new();

    for record in records {
        let Some(worked_hours) = record.worked_hours()? else {
            continue;
        };

        if worked_hours < Decimal::ZERO {
            return Err(EngineError::InvalidInput {
                field: "hours_worked".to_string(),
                message: format!(
                    "must not be negative, got {} on {}",
                    worked_hours, record.date
                ),
            });
        }

        let record_overtime = daily_overtime_hours(worked_hours, threshold);
        if record_overtime.is_zero() {
            continue;
        }

        overtime_hours = overtime_hours
            .checked_add(record_overtime)
            .ok_or_else(|| EngineError::out_of_range("hours_worked"))?;
        days_with_overtime += 1;

        if record.status == AttendanceStatus::Absent {
            warnings.push(AuditWarning {
                code: OVERTIME_ON_ABSENT_DAY.to_string(),
                message: format!(
                    "{} is marked absent but records {} hours; {} overtime hours were counted",
                    record.date,
                    worked_hours.normalize(),
                    record_overtime.normalize()
                ),
                severity: "medium".to_string(),
            });
        }
    }

    let overtime_pay = overtime_hours
        .checked_mul(rate_per_hour)
        .ok_or_else(|| EngineError::out_of_range("overtime_pay"))?;

    let reasoning = if overtime_hours > Decimal::ZERO {
        format!(
            "{} of {} records exceed the {} hour daily threshold, {} overtime hours at {} per hour",
            days_with_overtime,
            records.len(),
            threshold.normalize(),
            overtime_hours.normalize(),
            rate_per_hour.normalize()
        )
    } else {
        format!(
            "No record among {} exceeds the {} hour daily threshold, no overtime",
            records.len(),
            threshold.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "monthly_overtime".to_string(),
        rule_name: "Monthly Overtime".to_string(),
        input: serde_json::json!({
            "records": records.len(),
            "threshold": threshold.normalize().to_string(),
            "rate_per_hour": rate_per_hour.normalize().to_string()
        }),
        output: serde_json::json!({
            "overtime_hours": overtime_hours.normalize().to_string(),
            "overtime_pay": overtime_pay.normalize().to_string(),
            "days_with_overtime": days_with_overtime
        }),
        reasoning,
    };

    Ok(OvertimeResult {
        overtime_hours,
        overtime_pay,
        days_with_overtime,
        audit_step,
        warnings,
    })
}
