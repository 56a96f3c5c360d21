//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod audit;
mod employee;
mod payroll;
mod payroll_month;

pub use attendance::{AttendanceRecord, AttendanceStatus};
pub use audit::{AuditStep, AuditTrace, AuditWarning};
pub use employee::{Employee, EmployeeStatus};
pub use payroll::{PayrollCalculation, PayrollEntry, PayrollRecord, PayrollStatus};
pub use payroll_month::PayrollMonth;
