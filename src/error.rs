//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payroll processing.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the payroll engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::InvalidInput {
///     field: "base_salary".to_string(),
///     message: "must not be negative".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid input 'base_salary': must not be negative");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A calculation input was outside its valid range.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The input field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// An attendance record contained inconsistent data.
    #[error("Invalid attendance on {date}: {message}")]
    InvalidAttendance {
        /// The date of the attendance record.
        date: NaiveDate,
        /// A description of what made the record invalid.
        message: String,
    },

    /// A payroll month was not in `YYYY-MM` form.
    #[error("Invalid payroll month: {value}")]
    InvalidMonth {
        /// The text that failed to parse.
        value: String,
    },

    /// No employee exists with the given identifier.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The identifier that was looked up.
        id: String,
    },

    /// Payroll has already been processed for the month.
    #[error("Payroll already processed for {month}")]
    PayrollAlreadyProcessed {
        /// The month, formatted as `YYYY-MM`.
        month: String,
    },

    /// The backing store failed. Callers may retry.
    #[error("Storage error: {message}")]
    Storage {
        /// A description of the storage failure.
        message: String,
    },
}

impl EngineError {
    /// Returns true if the failure is transient and the operation may be retried.
    pub fn is_retryable(&self) -> bool {
        matches!(self, EngineError::Storage { .. })
    }

    /// Returns the `InvalidInput` error for a value whose arithmetic overflows.
    pub fn out_of_range(field: &str) -> Self {
        EngineError::InvalidInput {
            field: field.to_string(),
            message: "out of range".to_string(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
