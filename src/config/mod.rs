//! Configuration loading and management for the payroll engine.
//!
//! This module provides functionality to load overtime, statutory
//! contribution and probation settings from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load_or_default("./config/payroll.yaml").unwrap();
//! println!("EPF (employee): {}", loader.config().statutory.epf_employee_rate);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{OvertimeConfig, PayrollConfig, ProbationConfig, StatutoryRates};
