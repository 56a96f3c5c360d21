//! Request types for the payroll engine API.
//!
//! This module defines the JSON request bodies and query strings accepted by
//! the payroll and probation endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, PayrollMonth};

/// Default look-ahead window for the probation ending report.
pub const DEFAULT_PROBATION_WINDOW_DAYS: i64 = 30;

/// Request body for `POST /payroll/calculate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateRequest {
    /// The month being calculated, as `YYYY-MM`.
    pub month: PayrollMonth,
    /// Monthly base salary.
    pub base_salary: Decimal,
    /// Monthly allowances; zero when omitted.
    #[serde(default)]
    pub allowances: Option<Decimal>,
    /// The employee's attendance for the month.
    #[serde(default)]
    pub attendance: Vec<AttendanceRecord>,
}

impl CalculateRequest {
    /// Returns the attendance after checking every record falls in the month.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAttendance` for the first record dated outside the month.
    pub fn attendance_in_month(&self) -> EngineResult<&[AttendanceRecord]> {
        if let Some(record) = self
            .attendance
            .iter()
            .find(|record| !self.month.contains(record.date))
        {
            return Err(EngineError::InvalidAttendance {
                date: record.date,
                message: format!("outside payroll month {}", self.month),
            });
        }
        Ok(&self.attendance)
    }
}

/// Request body for `POST /payroll/process`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessRequest {
    /// The month to process, as `YYYY-MM`.
    pub month: PayrollMonth,
    /// Who triggered the run.
    pub processed_by: String,
}

impl ProcessRequest {
    /// Checks that the request names who is processing the run.
    pub fn validate(&self) -> EngineResult<()> {
        if self.processed_by.trim().is_empty() {
            return Err(EngineError::InvalidInput {
                field: "processed_by".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Query string for `GET /employees/:id/probation`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProbationQuery {
    /// Date to evaluate on; today when omitted.
    #[serde(default)]
    pub on: Option<NaiveDate>,
}

/// Query string for `GET /probation/ending`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProbationEndingQuery {
    /// Look-ahead window in days.
    #[serde(default)]
    pub within_days: Option<i64>,
    /// Date to evaluate on; today when omitted.
    #[serde(default)]
    pub on: Option<NaiveDate>,
}

impl ProbationEndingQuery {
    /// Returns the window in days, rejecting negative values.
    pub fn window_days(&self) -> EngineResult<i64> {
        let days = self.within_days.unwrap_or(DEFAULT_PROBATION_WINDOW_DAYS);
        if days < 0 {
            return Err(EngineError::InvalidInput {
                field: "within_days".to_string(),
                message: format!("must not be negative, got {}", days),
            });
        }
        Ok(days)
    }
}
