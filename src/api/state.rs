//! Application state for the payroll engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calculation::PayrollCalculator;
use crate::processing::PayrollProcessor;

/// Shared application state.
///
/// Holds the payroll processor, which in turn owns the repository and the
/// configured calculator.
#[derive(Clone)]
pub struct AppState {
    processor: Arc<PayrollProcessor>,
}

impl AppState {
    /// Creates a new application state around the given processor.
    pub fn new(processor: PayrollProcessor) -> Self {
        Self {
            processor: Arc::new(processor),
        }
    }

    /// Returns the payroll processor.
    pub fn processor(&self) -> &PayrollProcessor {
        &self.processor
    }

    /// Returns the configured payroll calculator.
    pub fn calculator(&self) -> &PayrollCalculator {
        self.processor.calculator()
    }
}
