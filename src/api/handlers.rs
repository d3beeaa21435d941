//! HTTP request handlers for the Time-Bank Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{PunchLedger, resolve_expected_hours, summarize, summarize_team};
use crate::error::EngineResult;
use crate::models::{Employee, EmployeeSummary};

use super::request::{
    BalanceRequest, ClockRequest, ExpectedRequest, TeamBalanceRequest, holiday_calendar,
    parse_punches,
};
use super::response::{
    ApiError, ApiErrorResponse, BalanceResponse, ClockResponse, TeamBalanceResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/expected", post(expected_handler))
        .route("/balance", post(balance_handler))
        .route("/balance/team", post(team_balance_handler))
        .route("/clock", post(clock_handler))
        .with_state(state)
}

async fn health_handler() -> &'static str {
    "ok"
}

/// Handler for POST /expected.
///
/// Resolves one employee's expected hours for one day.
async fn expected_handler(
    State(state): State<AppState>,
    payload: Result<Json<ExpectedRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing expected hours request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let result = Employee::try_from(request.employee).and_then(|employee| {
        let holidays = holiday_calendar(request.holidays, state.config().holidays())?;
        Ok(resolve_expected_hours(
            &employee,
            request.date,
            state.config().policy(),
            &holidays,
        ))
    });

    match result {
        Ok(expected) => {
            info!(
                correlation_id = %correlation_id,
                date = %expected.date,
                rule = %expected.rule,
                expected = %expected.duration,
                "Expected hours resolved"
            );
            json_response(StatusCode::OK, &expected)
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Expected hours request rejected");
            error_response(err.into())
        }
    }
}

/// Handler for POST /balance.
///
/// Summarizes one employee's punches and returns the daily rows and total.
async fn balance_handler(
    State(state): State<AppState>,
    payload: Result<Json<BalanceRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing balance request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    match perform_balance(correlation_id, request, &state) {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %response.summary.employee_id,
                days = response.summary.days.len(),
                total_balance = %response.summary.total_balance,
                duration_us = start_time.elapsed().as_micros(),
                "Balance computed successfully"
            );
            json_response(StatusCode::OK, &response)
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Balance request rejected");
            error_response(err.into())
        }
    }
}

fn perform_balance(
    correlation_id: Uuid,
    request: BalanceRequest,
    state: &AppState,
) -> EngineResult<BalanceResponse> {
    let range = request.range()?;
    let employee = Employee::try_from(request.employee)?;
    let holidays = holiday_calendar(request.holidays, state.config().holidays())?;
    let punches = parse_punches(request.punches, Some(&employee.id))?;

    let summary = summarize(
        &employee,
        &punches,
        &range,
        state.config().policy(),
        &holidays,
    );

    Ok(BalanceResponse {
        request_id: correlation_id,
        generated_at: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        total_balance_hours: summary.total_balance.as_hours(),
        summary,
    })
}

/// Handler for POST /balance/team.
///
/// Summarizes every listed employee, ordered by name.
async fn team_balance_handler(
    State(state): State<AppState>,
    payload: Result<Json<TeamBalanceRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing team balance request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let result = perform_team_balance(request, &state);

    match result {
        Ok(employees) => {
            info!(
                correlation_id = %correlation_id,
                employees = employees.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Team balance computed successfully"
            );
            let response = TeamBalanceResponse {
                request_id: correlation_id,
                generated_at: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                employees,
            };
            json_response(StatusCode::OK, &response)
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Team balance request rejected");
            error_response(err.into())
        }
    }
}

fn perform_team_balance(
    request: TeamBalanceRequest,
    state: &AppState,
) -> EngineResult<Vec<EmployeeSummary>> {
    let range = request.range()?;
    let employees = request
        .employees
        .into_iter()
        .map(Employee::try_from)
        .collect::<EngineResult<Vec<_>>>()?;
    let holidays = holiday_calendar(request.holidays, state.config().holidays())?;
    let punches = parse_punches(request.punches, None)?;

    Ok(summarize_team(
        &employees,
        &punches,
        &range,
        state.config().policy(),
        &holidays,
    ))
}

/// Handler for POST /clock.
///
/// Toggles the employee's clock against the punches sent by the caller and
/// returns the updated list.
async fn clock_handler(payload: Result<Json<ClockRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing clock request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let result = PunchLedger::from_punches(request.punches).and_then(|mut ledger| {
        let event = ledger.clock(&request.employee_id, request.at)?;
        let status = ledger.status(&request.employee_id);
        Ok(ClockResponse {
            event,
            status,
            punches: ledger.into_punches(),
        })
    });

    match result {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %request.employee_id,
                punch_id = %response.event.punch_id(),
                "Clock toggled"
            );
            json_response(StatusCode::OK, &response)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                employee_id = %request.employee_id,
                error = %err,
                "Clock request rejected"
            );
            error_response(err.into())
        }
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(api_error: ApiErrorResponse) -> Response {
    json_response(api_error.status, &api_error.error)
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
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
    json_response(StatusCode::BAD_REQUEST, &error)
}
