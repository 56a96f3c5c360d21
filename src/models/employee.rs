//! Employee model and related types.
//!
//! This module defines the Employee struct and EmployeeStatus enum
//! for representing staff on the payroll.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents the employment status of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    /// Currently employed and included in monthly payroll runs.
    Active,
    /// No longer employed or suspended.
    Inactive,
    /// Within the probation period following the join date.
    Probation,
}

/// Represents an employee on the payroll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The human-facing employee number (e.g., "EMP-0042").
    pub employee_number: String,
    /// The employee's display name.
    pub name: String,
    /// The current employment status.
    pub status: EmployeeStatus,
    /// The monthly base salary.
    pub base_salary: Decimal,
    /// Fixed monthly allowances paid on top of the base salary.
    #[serde(default)]
    pub allowances: Decimal,
    /// The date the employee joined.
    pub join_date: NaiveDate,
    /// Probation length in months. Falls back to the configured default when absent.
    #[serde(default)]
    pub probation_months: Option<u32>,
}

impl Employee {
    /// Returns true if the employee is picked up by a monthly payroll run.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{Employee, EmployeeStatus};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: "emp_001".to_string(),
    ///     employee_number: "EMP-0001".to_string(),
    ///     name: "Nimal Perera".to_string(),
    ///     status: EmployeeStatus::Active,
    ///     base_salary: Decimal::new(50000, 0),
    ///     allowances: Decimal::ZERO,
    ///     join_date: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
    ///     probation_months: None,
    /// };
    /// assert!(employee.is_payable());
    /// ```
    pub fn is_payable(&self) -> bool {
        self.status == EmployeeStatus::Active
    }
}
