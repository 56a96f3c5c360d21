//! HTTP API module for the payroll engine.
//!
//! This module provides the REST API endpoints for calculating payroll,
//! running monthly payroll and querying probation periods.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    CalculateRequest, DEFAULT_PROBATION_WINDOW_DAYS, ProbationEndingQuery, ProbationQuery,
    ProcessRequest,
};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
