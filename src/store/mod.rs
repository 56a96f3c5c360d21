//! Persistence interfaces for the payroll engine.
//!
//! The [`PayrollRepository`] trait is the seam between payroll processing and
//! whatever stores employees, attendance and payroll entries. An
//! [`InMemoryRepository`] is provided for development and tests.

mod in_memory;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::EngineResult;
use crate::models::{AttendanceRecord, Employee, EmployeeStatus, PayrollEntry, PayrollMonth};

pub use in_memory::InMemoryRepository;

/// Storage operations needed by payroll processing.
///
/// Implementations report infrastructure failures as `EngineError::Storage`.
#[async_trait]
pub trait PayrollRepository: Send + Sync {
    /// Fetches an employee by id.
    async fn get_employee(&self, id: &str) -> EngineResult<Option<Employee>>;

    /// Lists employees with the given status, ordered by employee number.
    async fn list_employees_by_status(&self, status: EmployeeStatus)
    -> EngineResult<Vec<Employee>>;

    /// Lists an employee's attendance between two dates (inclusive), ordered by date.
    async fn list_attendance(
        &self,
        employee_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> EngineResult<Vec<AttendanceRecord>>;

    /// Returns true if any payroll entry exists for the month.
    async fn has_payroll_for_month(&self, month: PayrollMonth) -> EngineResult<bool>;

    /// Lists the payroll entries for a month, ordered by employee number.
    async fn list_payroll(&self, month: PayrollMonth) -> EngineResult<Vec<PayrollEntry>>;

    /// Writes a batch of payroll entries atomically.
    ///
    /// Either every entry is written or none is. Fails with
    /// `PayrollAlreadyProcessed` if an entry for the same employee and month
    /// already exists.
    async fn save_payroll_batch(&self, entries: Vec<PayrollEntry>) -> EngineResult<()>;
}
