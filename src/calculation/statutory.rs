//! Statutory contribution calculation.
//!
//! EPF (Employees' Provident Fund) is split into an employee share deducted
//! from pay and an employer share. ETF (Employees' Trust Fund) is paid by the
//! employer only. All three are percentages of the base salary; overtime and
//! allowances are not contributory.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::StatutoryRates;
use crate::error::{EngineError, EngineResult};
use crate::models::AuditStep;

/// Employee EPF rate (8%).
pub const EPF_EMPLOYEE_RATE: Decimal = Decimal::from_parts(8, 0, 0, false, 2);

/// Employer EPF rate (12%).
pub const EPF_EMPLOYER_RATE: Decimal = Decimal::from_parts(12, 0, 0, false, 2);

/// Employer ETF rate (3%).
pub const ETF_RATE: Decimal = Decimal::from_parts(3, 0, 0, false, 2);

/// Statutory contributions for one month's base salary.
///
/// Amounts are not rounded; rounding happens once on the final record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatutoryContributions {
    /// Employee EPF share, deducted from pay.
    pub epf_employee: Decimal,
    /// Employer EPF share.
    pub epf_employer: Decimal,
    /// Employer ETF contribution.
    pub etf: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

impl StatutoryContributions {
    /// Returns the amount deducted from the employee's pay.
    pub fn employee_deductions(&self) -> Decimal {
        self.epf_employee
    }

    /// Returns the contributions paid by the employer on top of salary.
    pub fn employer_cost(&self) -> EngineResult<Decimal> {
        self.epf_employer
            .checked_add(self.etf)
            .ok_or_else(|| EngineError::out_of_range("employer_cost"))
    }
}

/// Calculates EPF and ETF contributions from the base salary.
///
/// # Errors
///
/// Returns `InvalidInput` if a contribution overflows.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_statutory_contributions;
/// use payroll_engine::config::StatutoryRates;
/// use rust_decimal::Decimal;
///
/// let result =
///     calculate_statutory_contributions(Decimal::new(50000, 0), &StatutoryRates::default(), 1)
///         .unwrap();
/// assert_eq!(result.epf_employee, Decimal::new(4000, 0));
/// assert_eq!(result.epf_employer, Decimal::new(6000, 0));
/// assert_eq!(result.etf, Decimal::new(1500, 0));
/// ```
pub fn calculate_statutory_contributions(
    base_salary: Decimal,
    rates: &StatutoryRates,
    step_number: u32,
) -> EngineResult<StatutoryContributions> {
    let contribution = |rate: Decimal| {
        base_salary
            .checked_mul(rate)
            .ok_or_else(|| EngineError::out_of_range("base_salary"))
    };
    let epf_employee = contribution(rates.epf_employee_rate)?;
    let epf_employer = contribution(rates.epf_employer_rate)?;
    let etf = contribution(rates.etf_rate)?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "statutory_contributions".to_string(),
        rule_name: "EPF and ETF Contributions".to_string(),
        input: serde_json::json!({
            "base_salary": base_salary.normalize().to_string(),
            "epf_employee_rate": rates.epf_employee_rate.normalize().to_string(),
            "epf_employer_rate": rates.epf_employer_rate.normalize().to_string(),
            "etf_rate": rates.etf_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "epf_employee": epf_employee.normalize().to_string(),
            "epf_employer": epf_employer.normalize().to_string(),
            "etf": etf.normalize().to_string()
        }),
        reasoning: format!(
            "Contributions on base salary {}: employee EPF {} is deducted, employer EPF {} and ETF {} are not",
            base_salary.normalize(),
            epf_employee.normalize(),
            epf_employer.normalize(),
            etf.normalize()
        ),
    };

    Ok(StatutoryContributions {
        epf_employee,
        epf_employer,
        etf,
        audit_step,
    })
}
