//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::error::{EngineError, EngineResult};

use super::types::PayrollConfig;

/// Loads and provides access to payroll configuration.
///
/// The configuration file has the following shape:
/// ```text
/// overtime:
///   daily_threshold_hours: "8"
///   rate_per_hour: "400"
/// statutory:
///   epf_employee_rate: "0.08"
///   epf_employer_rate: "0.12"
///   etf_rate: "0.03"
/// probation:
///   default_months: 6
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payroll.yaml").unwrap();
/// println!("Overtime rate: {}", loader.config().overtime.rate_per_hour);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or invalid values (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let config = Self::load_yaml::<PayrollConfig>(path)?;
        Self::validate(path, &config)?;

        info!(path = %path.display(), "Loaded payroll configuration");
        Ok(Self { config })
    }

    /// Loads configuration from the file, falling back to the built-in
    /// defaults when the file does not exist.
    ///
    /// A file that exists but fails to parse is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        match Self::load(path.as_ref()) {
            Err(EngineError::ConfigNotFound { path }) => {
                warn!(path = %path, "Configuration file not found, using defaults");
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: PayrollConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Rejects negative rates and thresholds.
    fn validate(path: &Path, config: &PayrollConfig) -> EngineResult<()> {
        let checks = [
            ("overtime.daily_threshold_hours", config.overtime.daily_threshold_hours),
            ("overtime.rate_per_hour", config.overtime.rate_per_hour),
            ("statutory.epf_employee_rate", config.statutory.epf_employee_rate),
            ("statutory.epf_employer_rate", config.statutory.epf_employer_rate),
            ("statutory.etf_rate", config.statutory.etf_rate),
        ];

        match checks.into_iter().find(|(_, value)| value.is_sign_negative()) {
            Some((field, value)) => Err(EngineError::ConfigParseError {
                path: path.display().to_string(),
                message: format!("{} must not be negative, got {}", field, value),
            }),
            None => Ok(()),
        }
    }

    /// Returns the underlying payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }
}
