//! Monthly payroll calculation.
//!
//! The [`PayrollCalculator`] turns a base salary, allowances and one month of
//! attendance into a [`PayrollRecord`]. It is a pure function of its inputs and
//! configuration: no I/O, no clock, no shared state.

use rust_decimal::Decimal;

use crate::config::PayrollConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendanceRecord, AuditStep, AuditTrace, Employee, PayrollCalculation, PayrollMonth,
    PayrollRecord,
};

use super::overtime::calculate_overtime;
use super::rounding::round_currency;
use super::statutory::calculate_statutory_contributions;

/// Computes payroll records from salary and attendance.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::PayrollCalculator;
/// use payroll_engine::models::{AttendanceRecord, AttendanceStatus, PayrollMonth};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let calculator = PayrollCalculator::default();
/// let month: PayrollMonth = "2025-03".parse().unwrap();
/// let records = vec![AttendanceRecord {
///     date: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
///     status: AttendanceStatus::Present,
///     hours_worked: Some(Decimal::new(12, 0)),
///     check_in: None,
///     check_out: None,
/// }];
///
/// let record = calculator
///     .compute(month, Decimal::new(50000, 0), Some(Decimal::new(5000, 0)), &records)
///     .unwrap();
///
/// assert_eq!(record.overtime_pay, Decimal::from_str("1600.00").unwrap());
/// assert_eq!(record.gross_salary, Decimal::from_str("56600.00").unwrap());
/// assert_eq!(record.net_salary, Decimal::from_str("52600.00").unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PayrollCalculator {
    config: PayrollConfig,
}

impl PayrollCalculator {
    /// Creates a calculator with the given configuration.
    pub fn new(config: PayrollConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration used by this calculator.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Computes the payroll record for one employee and month.
    ///
    /// `allowances` defaults to zero when absent. `records` must already be
    /// restricted to the employee and month.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the base salary, allowances or any record's
    /// hours are negative or an amount overflows, and `InvalidAttendance` if a
    /// record's hours cannot be derived from its check-in and check-out times.
    pub fn compute(
        &self,
        month: PayrollMonth,
        base_salary: Decimal,
        allowances: Option<Decimal>,
        records: &[AttendanceRecord],
    ) -> EngineResult<PayrollRecord> {
        self.compute_with_audit(month, base_salary, allowances, records)
            .map(|calculation| calculation.record)
    }

    /// Computes the payroll record together with its audit trace.
    pub fn compute_with_audit(
        &self,
        month: PayrollMonth,
        base_salary: Decimal,
        allowances: Option<Decimal>,
        records: &[AttendanceRecord],
    ) -> EngineResult<PayrollCalculation> {
        let allowances = allowances.unwrap_or(Decimal::ZERO);
        ensure_non_negative("base_salary", base_salary)?;
        ensure_non_negative("allowances", allowances)?;

        let mut trace = AuditTrace::default();
        let mut step_number: u32 = 1;

        let overtime = calculate_overtime(
            records,
            self.config.overtime.daily_threshold_hours,
            self.config.overtime.rate_per_hour,
            step_number,
        )?;
        trace.steps.push(overtime.audit_step);
        trace.warnings.extend(overtime.warnings);
        step_number += 1;

        let contributions =
            calculate_statutory_contributions(base_salary, &self.config.statutory, step_number)?;
        let total_deductions = contributions.employee_deductions();
        trace.steps.push(contributions.audit_step.clone());
        step_number += 1;

        let gross_salary = base_salary
            .checked_add(overtime.overtime_pay)
            .and_then(|sum| sum.checked_add(allowances))
            .map(round_currency)
            .ok_or_else(|| EngineError::out_of_range("gross_salary"))?;
        let total_deductions = round_currency(total_deductions);
        // Net is derived from the rounded gross and deductions.
        let net_salary = gross_salary - total_deductions;

        let record = PayrollRecord {
            month,
            base_salary: round_currency(base_salary),
            allowances: round_currency(allowances),
            overtime_hours: overtime.overtime_hours,
            overtime_pay: round_currency(overtime.overtime_pay),
            gross_salary,
            epf_employee: round_currency(contributions.epf_employee),
            epf_employer: round_currency(contributions.epf_employer),
            etf: round_currency(contributions.etf),
            total_deductions,
            net_salary,
        };

        trace.steps.push(AuditStep {
            step_number,
            rule_id: "gross_and_net_salary".to_string(),
            rule_name: "Gross and Net Salary".to_string(),
            input: serde_json::json!({
                "base_salary": base_salary.normalize().to_string(),
                "overtime_pay": overtime.overtime_pay.normalize().to_string(),
                "allowances": allowances.normalize().to_string(),
                "total_deductions": total_deductions.normalize().to_string()
            }),
            output: serde_json::json!({
                "gross_salary": record.gross_salary.to_string(),
                "net_salary": record.net_salary.to_string()
            }),
            reasoning: format!(
                "Gross {} = base {} + overtime {} + allowances {}; net {} after employee EPF {}",
                record.gross_salary,
                record.base_salary,
                record.overtime_pay,
                record.allowances,
                record.net_salary,
                record.total_deductions
            ),
        });

        Ok(PayrollCalculation {
            record,
            audit_trace: trace,
        })
    }

    /// Computes the payroll for an employee using their salary and allowances.
    pub fn compute_for_employee(
        &self,
        employee: &Employee,
        month: PayrollMonth,
        records: &[AttendanceRecord],
    ) -> EngineResult<PayrollCalculation> {
        self.compute_with_audit(
            month,
            employee.base_salary,
            Some(employee.allowances),
            records,
        )
    }
}

fn ensure_non_negative(field: &str, value: Decimal) -> EngineResult<()> {
    if value < Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field: field.to_string(),
            message: format!("must not be negative, got {}", value),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{OvertimeConfig, StatutoryRates};
    use crate::models::{AttendanceStatus, EmployeeStatus};
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn month() -> PayrollMonth {
        "2025-03".parse().unwrap()
    }

    fn record(day: u32, hours: &str) -> AttendanceRecord {
        AttendanceRecord {
            date: NaiveDate::from_ymd_opt(2025, 3, day).unwrap(),
            status: AttendanceStatus::Present,
            hours_worked: Some(dec(hours)),
            check_in: None,
            check_out: None,
        }
    }

    #[test]
    fn test_reference_scenario() {
        // 4 hours of overtime spread over two days
        let records = vec![record(3, "10"), record(4, "10"), record(5, "8")];

        let result = PayrollCalculator::default()
            .compute(month(), dec("50000"), Some(dec("5000")), &records)
            .unwrap();

        assert_eq!(result.month, month());
        assert_eq!(result.overtime_hours, dec("4"));
        assert_eq!(result.overtime_pay, dec("1600.00"));
        assert_eq!(result.gross_salary, dec("56600.00"));
        assert_eq!(result.epf_employee, dec("4000.00"));
        assert_eq!(result.epf_employer, dec("6000.00"));
        assert_eq!(result.etf, dec("1500.00"));
        assert_eq!(result.total_deductions, dec("4000.00"));
        assert_eq!(result.net_salary, dec("52600.00"));
    }

    #[test]
    fn test_zero_salary_no_attendance() {
        let result = PayrollCalculator::default()
            .compute(month(), Decimal::ZERO, None, &[])
            .unwrap();

        assert_eq!(result, PayrollRecord::zero(month()));
        assert_eq!(result.net_salary.to_string(), "0.00");
    }

    #[test]
    fn test_allowances_default_to_zero() {
        let result = PayrollCalculator::default()
            .compute(month(), dec("30000"), None, &[])
            .unwrap();

        assert_eq!(result.allowances, Decimal::ZERO);
        assert_eq!(result.gross_salary, dec("30000.00"));
        assert_eq!(result.net_salary, dec("27600.00"));
    }

    #[test]
    fn test_negative_base_salary_is_rejected() {
        let result = PayrollCalculator::default().compute(month(), dec("-1"), None, &[]);

        match result {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "base_salary"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_allowances_are_rejected() {
        let result =
            PayrollCalculator::default().compute(month(), dec("1000"), Some(dec("-5")), &[]);

        match result {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "allowances"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_gross_overflow_is_invalid_input() {
        let result =
            PayrollCalculator::default().compute(month(), Decimal::MAX, Some(Decimal::MAX), &[]);

        match result {
            Err(EngineError::InvalidInput { field, message }) => {
                assert_eq!(field, "gross_salary");
                assert_eq!(message, "out of range");
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_overtime_overflow_is_invalid_input() {
        let records = vec![record(3, "70000000000000000000000000000")];

        let result = PayrollCalculator::default().compute(month(), dec("50000"), None, &records);

        match result {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "overtime_pay"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_deductions_ignore_overtime_and_allowances() {
        let records = vec![record(3, "16")];

        let result = PayrollCalculator::default()
            .compute(month(), dec("40000"), Some(dec("10000")), &records)
            .unwrap();

        assert_eq!(result.overtime_pay, dec("3200.00"));
        assert_eq!(result.epf_employee, dec("3200.00"));
        assert_eq!(result.gross_salary, dec("53200.00"));
        assert_eq!(result.net_salary, dec("50000.00"));
    }

    #[test]
    fn test_rounding_happens_only_on_output() {
        // 20 minutes of overtime = 0.3333... hours; the pay is rounded once.
        let mut derived = record(3, "0");
        derived.hours_worked = None;
        derived.check_in = chrono::NaiveTime::from_hms_opt(8, 0, 0);
        derived.check_out = chrono::NaiveTime::from_hms_opt(16, 20, 0);

        let result = PayrollCalculator::default()
            .compute(month(), dec("33333.33"), None, &[derived])
            .unwrap();

        // Derived hours are 8.33, so 0.33 overtime hours at 400.
        assert_eq!(result.overtime_hours, dec("0.33"));
        assert_eq!(result.overtime_pay, dec("132.00"));
        assert_eq!(result.epf_employee, dec("2666.67"));
        assert_eq!(result.etf, dec("1000.00"));
        assert_eq!(result.gross_salary, dec("33465.33"));
        assert_eq!(result.net_salary, dec("30798.66"));
    }

    #[test]
    fn test_custom_configuration() {
        let config = PayrollConfig {
            overtime: OvertimeConfig {
                daily_threshold_hours: dec("9"),
                rate_per_hour: dec("500"),
            },
            statutory: StatutoryRates {
                epf_employee_rate: dec("0.10"),
                epf_employer_rate: dec("0.12"),
                etf_rate: dec("0.03"),
            },
            ..PayrollConfig::default()
        };

        let result = PayrollCalculator::new(config)
            .compute(month(), dec("20000"), None, &[record(3, "11")])
            .unwrap();

        assert_eq!(result.overtime_hours, dec("2"));
        assert_eq!(result.overtime_pay, dec("1000.00"));
        assert_eq!(result.epf_employee, dec("2000.00"));
        assert_eq!(result.net_salary, dec("19000.00"));
    }

    #[test]
    fn test_audit_trace_has_three_ordered_steps() {
        let calculation = PayrollCalculator::default()
            .compute_with_audit(month(), dec("50000"), None, &[record(3, "10")])
            .unwrap();

        let steps = &calculation.audit_trace.steps;
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0].rule_id, "monthly_overtime");
        assert_eq!(steps[1].rule_id, "statutory_contributions");
        assert_eq!(steps[2].rule_id, "gross_and_net_salary");
        assert_eq!(
            steps.iter().map(|s| s.step_number).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(
            steps[2].output["net_salary"].as_str().unwrap(),
            calculation.record.net_salary.to_string()
        );
    }

    #[test]
    fn test_absent_overtime_warning_reaches_trace() {
        let mut absent = record(3, "10");
        absent.status = AttendanceStatus::Absent;

        let calculation = PayrollCalculator::default()
            .compute_with_audit(month(), dec("50000"), None, &[absent])
            .unwrap();

        assert_eq!(calculation.record.overtime_hours, dec("2"));
        assert_eq!(calculation.audit_trace.warnings.len(), 1);
    }

    #[test]
    fn test_compute_for_employee_uses_employee_salary() {
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

        let calculation = PayrollCalculator::default()
            .compute_for_employee(&employee, month(), &[record(3, "12")])
            .unwrap();

        assert_eq!(calculation.record.net_salary, dec("52600.00"));
    }

    #[test]
    fn test_identical_inputs_give_identical_output() {
        let calculator = PayrollCalculator::default();
        let records = vec![record(3, "9.75"), record(4, "11.2")];

        let first = calculator
            .compute_with_audit(month(), dec("61234.57"), Some(dec("1234.5")), &records)
            .unwrap();
        let second = calculator
            .compute_with_audit(month(), dec("61234.57"), Some(dec("1234.5")), &records)
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_vec(&first).unwrap(),
            serde_json::to_vec(&second).unwrap()
        );
    }
}
