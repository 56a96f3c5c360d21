//! Monthly payroll runs.
//!
//! The [`PayrollProcessor`] orchestrates a payroll run over a
//! [`PayrollRepository`]: it refuses to process a month twice, selects the
//! active employees, computes each record from that employee's attendance in
//! the month, and writes the whole run as one batch.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::{debug, info, warn};

use crate::calculation::{
    PayrollCalculator, ProbationStatus, evaluate_probation, probations_ending_within,
};
use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeeStatus, PayrollCalculation, PayrollEntry, PayrollMonth};
use crate::store::PayrollRepository;

/// Runs payroll and related employee queries against a repository.
#[derive(Clone)]
pub struct PayrollProcessor {
    repository: Arc<dyn PayrollRepository>,
    calculator: PayrollCalculator,
}

impl PayrollProcessor {
    /// Creates a processor over the given repository and calculator.
    pub fn new(repository: Arc<dyn PayrollRepository>, calculator: PayrollCalculator) -> Self {
        Self {
            repository,
            calculator,
        }
    }

    /// Returns the calculator used for payroll records.
    pub fn calculator(&self) -> &PayrollCalculator {
        &self.calculator
    }

    /// Processes payroll for every active employee for the month.
    ///
    /// # Errors
    ///
    /// - `PayrollAlreadyProcessed` if the month already has payroll entries
    /// - `InvalidInput` / `InvalidAttendance` if any employee's data is invalid;
    ///   nothing is written in that case
    /// - `Storage` if the repository fails
    pub async fn process_month(
        &self,
        month: PayrollMonth,
        processed_by: &str,
    ) -> EngineResult<Vec<PayrollEntry>> {
        if self.repository.has_payroll_for_month(month).await? {
            warn!(month = %month, "Payroll already processed");
            return Err(EngineError::PayrollAlreadyProcessed {
                month: month.to_string(),
            });
        }

        let employees = self
            .repository
            .list_employees_by_status(EmployeeStatus::Active)
            .await?;
        info!(
            month = %month,
            employees = employees.len(),
            processed_by = %processed_by,
            "Processing payroll"
        );

        let now = Utc::now();
        let mut entries = Vec::with_capacity(employees.len());
        for employee in &employees {
            let records = self
                .repository
                .list_attendance(&employee.id, month.first_day(), month.last_day())
                .await?;

            let calculation = self
                .calculator
                .compute_for_employee(employee, month, &records)
                .inspect_err(|err| {
                    warn!(employee_id = %employee.id, error = %err, "Payroll calculation failed");
                })?;

            for warning in &calculation.audit_trace.warnings {
                warn!(
                    employee_id = %employee.id,
                    code = %warning.code,
                    "{}",
                    warning.message
                );
            }
            debug!(
                employee_id = %employee.id,
                attendance_records = records.len(),
                net_salary = %calculation.record.net_salary,
                "Computed payroll record"
            );

            entries.push(PayrollEntry::processed(
                employee,
                calculation.record,
                processed_by,
                now,
            ));
        }

        self.repository.save_payroll_batch(entries.clone()).await?;
        info!(month = %month, entries = entries.len(), "Payroll processed");

        Ok(entries)
    }

    /// Computes one employee's payroll for the month without persisting it.
    pub async fn preview_employee(
        &self,
        employee_id: &str,
        month: PayrollMonth,
    ) -> EngineResult<PayrollCalculation> {
        let employee = self
            .repository
            .get_employee(employee_id)
            .await?
            .ok_or_else(|| EngineError::EmployeeNotFound {
                id: employee_id.to_string(),
            })?;

        let records = self
            .repository
            .list_attendance(&employee.id, month.first_day(), month.last_day())
            .await?;

        self.calculator
            .compute_for_employee(&employee, month, &records)
    }

    /// Lists the processed payroll entries for the month.
    pub async fn list_month(&self, month: PayrollMonth) -> EngineResult<Vec<PayrollEntry>> {
        self.repository.list_payroll(month).await
    }

    /// Evaluates one employee's probation on the given date.
    pub async fn probation_status(
        &self,
        employee_id: &str,
        on: NaiveDate,
    ) -> EngineResult<ProbationStatus> {
        let employee = self
            .repository
            .get_employee(employee_id)
            .await?
            .ok_or_else(|| EngineError::EmployeeNotFound {
                id: employee_id.to_string(),
            })?;

        evaluate_probation(
            &employee,
            self.calculator.config().probation.default_months,
            on,
        )
    }

    /// Lists employees on probation whose probation ends within `within_days`.
    pub async fn probations_ending(
        &self,
        on: NaiveDate,
        within_days: i64,
    ) -> EngineResult<Vec<ProbationStatus>> {
        let employees = self
            .repository
            .list_employees_by_status(EmployeeStatus::Probation)
            .await?;

        probations_ending_within(
            &employees,
            self.calculator.config().probation.default_months,
            on,
            within_days,
        )
    }
}
