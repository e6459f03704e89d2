//! HTTP request handlers for the Housing Operations Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    aggregate_occupancy, bucket_by_hour, compute_department_shares, compute_occupancy_with,
    compute_salary_from_form, round_for_display,
};
use crate::error::EngineError;
use crate::models::{AuditStep, AuditTrace, AuditWarning, OccupancyRatio, OccupancyScope};

use super::request::{
    DepartmentSharesRequest, HourlyAttendanceRequest, OccupancyRequest, OccupancyRollupRequest,
    SalaryRequest,
};
use super::response::{
    ApiError, ApiErrorResponse, DepartmentShareView, DepartmentSharesResponse,
    HourlyAttendanceResponse, OccupancyResponse, SalaryDisplay, SalaryResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/salary", post(salary_handler))
        .route("/occupancy", post(occupancy_handler))
        .route("/occupancy/rollup", post(occupancy_rollup_handler))
        .route("/departments/shares", post(department_shares_handler))
        .route("/attendance/hourly", post(hourly_attendance_handler))
        .with_state(state)
}

/// Handler for POST /salary.
///
/// Reads the salary form permissively and returns exact and rounded totals.
async fn salary_handler(
    State(state): State<AppState>,
    payload: Result<Json<SalaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing salary request");

    let request = match parse_payload(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let start_time = Instant::now();
    let result = compute_salary_from_form(&request.components, 1);
    log_warnings(correlation_id, &result.warnings);

    let places = state.config().display().currency_decimal_places;
    let display = SalaryDisplay {
        total_allowances: round_for_display(result.breakdown.total_allowances, places),
        total_deductions: round_for_display(result.breakdown.total_deductions, places),
        net_salary: round_for_display(result.breakdown.net_salary, places),
    };

    let audit_trace = audit_trace(vec![result.audit_step], result.warnings, start_time);
    info!(
        correlation_id = %correlation_id,
        employee_id = request.employee_id.as_deref().unwrap_or("-"),
        net_salary = %result.breakdown.net_salary,
        duration_us = audit_trace.duration_us,
        "Salary calculation completed"
    );

    json_response(
        StatusCode::OK,
        SalaryResponse {
            calculation_id: correlation_id,
            timestamp: Utc::now(),
            currency: state.config().metadata().currency.clone(),
            components: result.components,
            breakdown: result.breakdown,
            display,
            audit_trace,
        },
    )
}

/// Handler for POST /occupancy.
async fn occupancy_handler(
    State(state): State<AppState>,
    payload: Result<Json<OccupancyRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing occupancy request");

    let request = match parse_payload(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    occupancy_response(
        correlation_id,
        &state,
        OccupancyRatio::from(&request),
        request.scope,
    )
}

/// Handler for POST /occupancy/rollup.
///
/// Sums child ratios into their parent before computing occupancy.
async fn occupancy_rollup_handler(
    State(state): State<AppState>,
    payload: Result<Json<OccupancyRollupRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing occupancy rollup request");

    let request = match parse_payload(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let ratio = match aggregate_occupancy(&request.children) {
        Ok(ratio) => ratio,
        Err(err) => return engine_error_response(correlation_id, err),
    };
    info!(
        correlation_id = %correlation_id,
        children = request.children.len(),
        occupied = ratio.occupied,
        total = ratio.total,
        "Rolled up child occupancy"
    );

    occupancy_response(correlation_id, &state, ratio, request.scope)
}

fn occupancy_response(
    correlation_id: Uuid,
    state: &AppState,
    ratio: OccupancyRatio,
    scope: OccupancyScope,
) -> Response {
    let start_time = Instant::now();
    let config = state.config();

    match compute_occupancy_with(ratio, scope, config.thresholds(), 1) {
        Ok(result) => {
            log_warnings(correlation_id, &result.warnings);
            let display_percentage = round_for_display(
                result.report.percentage,
                config.display().percentage_decimal_places,
            );
            let audit_trace = audit_trace(vec![result.audit_step], result.warnings, start_time);
            info!(
                correlation_id = %correlation_id,
                scope = %scope,
                percentage = %result.report.percentage,
                band = %result.report.band,
                duration_us = audit_trace.duration_us,
                "Occupancy calculation completed"
            );
            json_response(
                StatusCode::OK,
                OccupancyResponse {
                    calculation_id: correlation_id,
                    report: result.report,
                    display_percentage,
                    audit_trace,
                },
            )
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for POST /departments/shares.
///
/// Department names are resolved for the requested locale here, after the
/// shares are computed.
async fn department_shares_handler(
    State(state): State<AppState>,
    payload: Result<Json<DepartmentSharesRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing department shares request");

    let request = match parse_payload(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let start_time = Instant::now();
    let result = compute_department_shares(&request.departments, 1);
    let places = state.config().display().percentage_decimal_places;

    let shares = result
        .shares
        .iter()
        .map(|share| DepartmentShareView {
            id: share.id.clone(),
            display_name: share.name.resolve(request.locale).to_string(),
            count: share.count,
            percentage: share.percentage,
            display_percentage: round_for_display(share.percentage, places),
        })
        .collect();

    let audit_trace = audit_trace(vec![result.audit_step], Vec::new(), start_time);
    info!(
        correlation_id = %correlation_id,
        departments = request.departments.len(),
        total = result.total,
        duration_us = audit_trace.duration_us,
        "Department shares calculation completed"
    );

    json_response(
        StatusCode::OK,
        DepartmentSharesResponse {
            calculation_id: correlation_id,
            locale: request.locale,
            total: result.total,
            shares,
            audit_trace,
        },
    )
}

/// Handler for POST /attendance/hourly.
async fn hourly_attendance_handler(
    State(state): State<AppState>,
    payload: Result<Json<HourlyAttendanceRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing hourly attendance request");

    let request = match parse_payload(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let start_time = Instant::now();
    let display = state.config().display();

    match bucket_by_hour(
        &request.events,
        request.window(),
        request.range_policy,
        &display.hour_label_format,
        display.max_window_hours,
        1,
    ) {
        Ok(result) => {
            log_warnings(correlation_id, &result.warnings);
            let audit_trace = audit_trace(vec![result.audit_step], result.warnings, start_time);
            info!(
                correlation_id = %correlation_id,
                events = request.events.len(),
                buckets = result.buckets.len(),
                dropped_events = result.dropped_events,
                duration_us = audit_trace.duration_us,
                "Hourly attendance calculation completed"
            );
            json_response(
                StatusCode::OK,
                HourlyAttendanceResponse {
                    calculation_id: correlation_id,
                    buckets: result.buckets,
                    dropped_events: result.dropped_events,
                    audit_trace,
                },
            )
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Unwraps a JSON body, turning a rejection into a 400 response.
#[allow(clippy::result_large_err)]
fn parse_payload<T>(
    correlation_id: Uuid,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, Response> {
    let rejection = match payload {
        Ok(Json(request)) => return Ok(request),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            // serde_json reports an absent required field as "missing field `name`"
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
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

    Err(json_response(StatusCode::BAD_REQUEST, error))
}

fn engine_error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Calculation failed"
    );
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn log_warnings(correlation_id: Uuid, warnings: &[AuditWarning]) {
    for warning in warnings {
        warn!(
            correlation_id = %correlation_id,
            code = %warning.code,
            message = %warning.message,
            "Calculation warning"
        );
    }
}

fn audit_trace(steps: Vec<AuditStep>, warnings: Vec<AuditWarning>, started: Instant) -> AuditTrace {
    AuditTrace {
        steps,
        warnings,
        duration_us: started.elapsed().as_micros() as u64,
    }
}
