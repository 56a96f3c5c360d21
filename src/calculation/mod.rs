//! Calculation logic for the payroll engine.
//!
//! This module contains the calculation functions for monthly payroll:
//! overtime from attendance, EPF and ETF contributions, currency rounding,
//! attendance hours from check-in/check-out times, probation dates, and the
//! [`PayrollCalculator`] that combines them into a payroll record.

mod attendance_hours;
mod overtime;
mod payroll;
mod probation;
mod rounding;
mod statutory;

pub use attendance_hours::calculate_hours_worked;
pub use overtime::{
    DEFAULT_DAILY_OVERTIME_THRESHOLD, DEFAULT_OVERTIME_RATE_PER_HOUR, OVERTIME_ON_ABSENT_DAY,
    OvertimeResult, calculate_overtime, daily_overtime_hours,
};
pub use payroll::PayrollCalculator;
pub use probation::{
    DEFAULT_PROBATION_MONTHS, ProbationStatus, evaluate_probation, probation_end_date,
    probations_ending_within,
};
pub use rounding::{CURRENCY_DECIMAL_PLACES, round_currency, round_half_up};
pub use statutory::{
    EPF_EMPLOYEE_RATE, EPF_EMPLOYER_RATE, ETF_RATE, StatutoryContributions,
    calculate_statutory_contributions,
};
