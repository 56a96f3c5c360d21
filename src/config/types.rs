//! Configuration types for payroll calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::calculation::{
    DEFAULT_DAILY_OVERTIME_THRESHOLD, DEFAULT_OVERTIME_RATE_PER_HOUR, DEFAULT_PROBATION_MONTHS,
    EPF_EMPLOYEE_RATE, EPF_EMPLOYER_RATE, ETF_RATE,
};

/// Overtime configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OvertimeConfig {
    /// Hours per day after which overtime starts.
    pub daily_threshold_hours: Decimal,
    /// Pay per overtime hour.
    pub rate_per_hour: Decimal,
}

impl Default for OvertimeConfig {
    fn default() -> Self {
        Self {
            daily_threshold_hours: DEFAULT_DAILY_OVERTIME_THRESHOLD,
            rate_per_hour: DEFAULT_OVERTIME_RATE_PER_HOUR,
        }
    }
}

/// Statutory contribution rates, applied to the base salary.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatutoryRates {
    /// Employee EPF rate (deducted from pay).
    pub epf_employee_rate: Decimal,
    /// Employer EPF rate.
    pub epf_employer_rate: Decimal,
    /// Employer ETF rate.
    pub etf_rate: Decimal,
}

impl Default for StatutoryRates {
    fn default() -> Self {
        Self {
            epf_employee_rate: EPF_EMPLOYEE_RATE,
            epf_employer_rate: EPF_EMPLOYER_RATE,
            etf_rate: ETF_RATE,
        }
    }
}

/// Probation configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProbationConfig {
    /// Probation length used when an employee has none of their own.
    pub default_months: u32,
}

impl Default for ProbationConfig {
    fn default() -> Self {
        Self {
            default_months: DEFAULT_PROBATION_MONTHS,
        }
    }
}

/// The complete payroll configuration.
///
/// Every section is optional in the YAML file; missing sections take the
/// built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PayrollConfig {
    /// Overtime threshold and rate.
    #[serde(default)]
    pub overtime: OvertimeConfig,
    /// EPF and ETF rates.
    #[serde(default)]
    pub statutory: StatutoryRates,
    /// Probation defaults.
    #[serde(default)]
    pub probation: ProbationConfig,
}
