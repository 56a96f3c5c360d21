//! Monthly payroll engine.
//!
//! This crate computes monthly payroll records from an employee's base salary,
//! allowances and attendance: overtime over the daily threshold, EPF and ETF
//! contributions, gross and net salary. It also runs payroll for a whole month
//! against a repository and serves both through an HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod processing;
pub mod store;
