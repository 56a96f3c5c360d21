//! Payroll record models.
//!
//! This module contains the [`PayrollRecord`] produced by the calculator, the
//! [`PayrollCalculation`] pairing it with an audit trace, and the persisted
//! [`PayrollEntry`] written by a monthly payroll run.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AuditTrace, Employee, PayrollMonth};

/// The payroll line item for one employee and one month.
///
/// All monetary fields are rounded to two decimal places. The record always
/// satisfies:
///
/// - `gross_salary = base_salary + overtime_pay + allowances`
/// - `total_deductions = epf_employee`
/// - `net_salary = gross_salary - total_deductions`
///
/// `epf_employer` and `etf` are employer contributions and are not deducted.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{PayrollMonth, PayrollRecord};
/// use rust_decimal::Decimal;
///
/// let record = PayrollRecord::zero("2025-03".parse::<PayrollMonth>().unwrap());
/// assert_eq!(record.net_salary, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRecord {
    /// The month this record covers.
    pub month: PayrollMonth,
    /// Monthly base salary.
    pub base_salary: Decimal,
    /// Monthly allowances.
    pub allowances: Decimal,
    /// Total overtime hours in the month.
    pub overtime_hours: Decimal,
    /// Pay for the overtime hours.
    pub overtime_pay: Decimal,
    /// Base salary plus overtime pay plus allowances.
    pub gross_salary: Decimal,
    /// Employee EPF contribution (deducted).
    pub epf_employee: Decimal,
    /// Employer EPF contribution (informational).
    pub epf_employer: Decimal,
    /// Employer ETF contribution (informational).
    pub etf: Decimal,
    /// Sum of all deductions from gross salary.
    pub total_deductions: Decimal,
    /// Gross salary less deductions.
    pub net_salary: Decimal,
}

impl PayrollRecord {
    /// Returns a record for the month with every amount set to zero.
    pub fn zero(month: PayrollMonth) -> Self {
        Self {
            month,
            base_salary: Decimal::ZERO,
            allowances: Decimal::ZERO,
            overtime_hours: Decimal::ZERO,
            overtime_pay: Decimal::ZERO,
            gross_salary: Decimal::ZERO,
            epf_employee: Decimal::ZERO,
            epf_employer: Decimal::ZERO,
            etf: Decimal::ZERO,
            total_deductions: Decimal::ZERO,
            net_salary: Decimal::ZERO,
        }
    }
}

/// A payroll record together with the audit trace that explains it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollCalculation {
    /// The computed payroll record.
    pub record: PayrollRecord,
    /// The steps taken to compute it.
    pub audit_trace: AuditTrace,
}

/// Processing state of a persisted payroll entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayrollStatus {
    /// Computed and written by a payroll run.
    Processed,
}

/// A payroll record as persisted by a monthly payroll run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollEntry {
    /// Unique identifier for the entry.
    pub id: Uuid,
    /// The employee the entry belongs to.
    pub employee_id: String,
    /// The employee's name at processing time.
    pub employee_name: String,
    /// The employee's number at processing time.
    pub employee_number: String,
    /// The computed payroll record.
    pub record: PayrollRecord,
    /// The processing state.
    pub status: PayrollStatus,
    /// Who triggered the payroll run.
    pub processed_by: String,
    /// When the entry was created.
    pub created_at: DateTime<Utc>,
    /// When the entry was last updated.
    pub updated_at: DateTime<Utc>,
}

impl PayrollEntry {
    /// Creates a processed entry for an employee.
    pub fn processed(
        employee: &Employee,
        record: PayrollRecord,
        processed_by: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            employee_id: employee.id.clone(),
            employee_name: employee.name.clone(),
            employee_number: employee.employee_number.clone(),
            record,
            status: PayrollStatus::Processed,
            processed_by: processed_by.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns the month this entry covers.
    pub fn month(&self) -> PayrollMonth {
        self.record.month
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EmployeeStatus;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_month() -> PayrollMonth {
        "2025-03".parse().unwrap()
    }

    fn sample_record() -> PayrollRecord {
        PayrollRecord {
            month: sample_month(),
            base_salary: dec("50000.00"),
            allowances: dec("5000.00"),
            overtime_hours: dec("4"),
            overtime_pay: dec("1600.00"),
            gross_salary: dec("56600.00"),
            epf_employee: dec("4000.00"),
            epf_employer: dec("6000.00"),
            etf: dec("1500.00"),
            total_deductions: dec("4000.00"),
            net_salary: dec("52600.00"),
        }
    }

    #[test]
    fn test_record_serializes_decimals_as_strings() {
        let json = serde_json::to_string(&sample_record()).unwrap();
        assert!(json.contains("\"month\":\"2025-03\""));
        assert!(json.contains("\"net_salary\":\"52600.00\""));
        assert!(json.contains("\"epf_employee\":\"4000.00\""));
    }

    #[test]
    fn test_zero_record() {
        let record = PayrollRecord::zero(sample_month());
        assert_eq!(record.month, sample_month());
        assert_eq!(record.gross_salary, Decimal::ZERO);
        assert_eq!(record.total_deductions, Decimal::ZERO);
    }

    #[test]
    fn test_processed_entry_copies_employee_fields() {
        let employee = Employee {
            id: "emp_001".to_string(),
            employee_number: "EMP-0001".to_string(),
            name: "Nimal Perera".to_string(),
            status: EmployeeStatus::Active,
            base_salary: dec("50000"),
            allowances: dec("5000"),
            join_date: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
            probation_months: None,
        };
        let now = Utc::now();

        let entry = PayrollEntry::processed(&employee, sample_record(), "admin", now);

        assert_eq!(entry.employee_id, "emp_001");
        assert_eq!(entry.employee_name, "Nimal Perera");
        assert_eq!(entry.employee_number, "EMP-0001");
        assert_eq!(entry.status, PayrollStatus::Processed);
        assert_eq!(entry.processed_by, "admin");
        assert_eq!(entry.created_at, now);
        assert_eq!(entry.updated_at, now);
        assert_eq!(entry.month(), sample_month());
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&PayrollStatus::Processed).unwrap(),
            "\"processed\""
        );
    }
}
