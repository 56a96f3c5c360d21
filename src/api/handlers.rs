//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::PayrollMonth;

use super::request::{CalculateRequest, ProbationEndingQuery, ProbationQuery, ProcessRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payroll/calculate", post(calculate_handler))
        .route("/payroll/process", post(process_handler))
        .route("/payroll/:month", get(list_month_handler))
        .route("/employees/:id/payroll/:month", get(employee_payroll_handler))
        .route("/employees/:id/probation", get(probation_handler))
        .route("/probation/ending", get(probation_ending_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        retryable = err.is_retryable(),
        "Request failed"
    );
    ApiErrorResponse::from(err).into_response()
}

fn json_rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Body text carries serde's description of the bad field.
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::validation_error(body_text)
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error).into_response()
}

fn query_rejection_response(correlation_id: Uuid, rejection: QueryRejection) -> Response {
    let body_text = rejection.body_text();
    warn!(
        correlation_id = %correlation_id,
        error = %body_text,
        "Query string error"
    );
    ApiErrorResponse::bad_request(ApiError::validation_error(body_text)).into_response()
}

/// Handler for POST /payroll/calculate.
///
/// Computes a payroll record from the request body without persisting it.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let records = match request.attendance_in_month() {
        Ok(records) => records,
        Err(err) => return error_response(correlation_id, err),
    };

    let start_time = Instant::now();
    match state.calculator().compute_with_audit(
        request.month,
        request.base_salary,
        request.allowances,
        records,
    ) {
        Ok(calculation) => {
            info!(
                correlation_id = %correlation_id,
                month = %request.month,
                attendance_records = records.len(),
                net_salary = %calculation.record.net_salary,
                duration_us = start_time.elapsed().as_micros(),
                "Calculation completed successfully"
            );
            json_response(StatusCode::OK, &calculation)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /payroll/process.
///
/// Runs payroll for every active employee and returns the written entries.
async fn process_handler(
    State(state): State<AppState>,
    payload: Result<Json<ProcessRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll run request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };
    if let Err(err) = request.validate() {
        return error_response(correlation_id, err);
    }

    match state
        .processor()
        .process_month(request.month, &request.processed_by)
        .await
    {
        Ok(entries) => {
            info!(
                correlation_id = %correlation_id,
                month = %request.month,
                entries = entries.len(),
                "Payroll run completed"
            );
            json_response(StatusCode::CREATED, &entries)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /payroll/:month.
async fn list_month_handler(
    State(state): State<AppState>,
    Path(month): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, month = %month, "Listing payroll");

    let month: PayrollMonth = match month.parse() {
        Ok(month) => month,
        Err(err) => return error_response(correlation_id, err),
    };

    match state.processor().list_month(month).await {
        Ok(entries) => json_response(StatusCode::OK, &entries),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /employees/:id/payroll/:month.
///
/// Previews one employee's payroll from stored attendance.
async fn employee_payroll_handler(
    State(state): State<AppState>,
    Path((employee_id, month)): Path<(String, String)>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        month = %month,
        "Previewing employee payroll"
    );

    let month: PayrollMonth = match month.parse() {
        Ok(month) => month,
        Err(err) => return error_response(correlation_id, err),
    };

    match state.processor().preview_employee(&employee_id, month).await {
        Ok(calculation) => json_response(StatusCode::OK, &calculation),
        Err(err) => error_response(correlation_id, err),
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Handler for GET /employees/:id/probation.
async fn probation_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    query: Result<Query<ProbationQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        "Evaluating probation"
    );

    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => return query_rejection_response(correlation_id, rejection),
    };
    let on = query.on.unwrap_or_else(today);

    match state.processor().probation_status(&employee_id, on).await {
        Ok(status) => json_response(StatusCode::OK, &status),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /probation/ending.
async fn probation_ending_handler(
    State(state): State<AppState>,
    query: Result<Query<ProbationEndingQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Listing probations ending soon");

    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => return query_rejection_response(correlation_id, rejection),
    };
    let within_days = match query.window_days() {
        Ok(days) => days,
        Err(err) => return error_response(correlation_id, err),
    };
    let on = query.on.unwrap_or_else(today);

    match state.processor().probations_ending(on, within_days).await {
        Ok(ending) => json_response(StatusCode::OK, &ending),
        Err(err) => error_response(correlation_id, err),
    }
}
