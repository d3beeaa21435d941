//! Response types for the Time-Bank Engine API.
//!
//! This module defines the success bodies and the error response structures
//! and error handling for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::{ClockEvent, ClockStatus};
use crate::error::EngineError;
use crate::models::{EmployeeSummary, Punch, RangeSummary};

/// Body returned by `POST /balance`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceResponse {
    /// Correlation ID of the request, also written to the logs.
    pub request_id: Uuid,
    /// When the summary was produced.
    pub generated_at: DateTime<Utc>,
    /// Version of the engine that produced it.
    pub engine_version: String,
    /// The per-day summary and signed total.
    pub summary: RangeSummary,
    /// The signed total in decimal hours, rounded to two places.
    pub total_balance_hours: Decimal,
}

/// Body returned by `POST /balance/team`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamBalanceResponse {
    /// Correlation ID of the request.
    pub request_id: Uuid,
    /// When the report was produced.
    pub generated_at: DateTime<Utc>,
    /// Version of the engine that produced it.
    pub engine_version: String,
    /// One row per employee with punches in range, ordered by name.
    pub employees: Vec<EmployeeSummary>,
}

/// Body returned by `POST /clock`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockResponse {
    /// What the clock action did.
    pub event: ClockEvent,
    /// The employee's state after the action.
    pub status: ClockStatus,
    /// The updated punch list, to send back on the next call.
    pub punches: Vec<Punch>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidInput { field, .. } => {
                Self::bad_request(ApiError::with_details(
                    "INVALID_INPUT",
                    message,
                    format!("Field '{}' could not be parsed", field),
                ))
            }
            EngineError::InvalidPunch { .. } => Self::bad_request(ApiError::with_details(
                "INVALID_PUNCH",
                message,
                "The punch data contains invalid information",
            )),
            EngineError::InvalidEmployee { .. } => Self::bad_request(ApiError::with_details(
                "INVALID_EMPLOYEE",
                message,
                "The employee data contains invalid information",
            )),
            EngineError::InvalidDateRange { .. } => {
                Self::bad_request(ApiError::new("INVALID_DATE_RANGE", message))
            }
            EngineError::DuplicateHoliday { .. } => {
                Self::bad_request(ApiError::new("DUPLICATE_HOLIDAY", message))
            }
            EngineError::OpenPunchExists { .. } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::new("OPEN_PUNCH_EXISTS", message),
            },
            EngineError::PunchNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("PUNCH_NOT_FOUND", message),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_invalid_input_maps_to_400() {
        let engine_error = EngineError::InvalidInput {
            field: "entry".to_string(),
            value: "8h".to_string(),
            message: "expected HH:MM".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_INPUT");
        assert!(api_error.error.message.contains("8h"));
    }

    #[test]
    fn test_date_range_maps_to_400() {
        let engine_error = EngineError::InvalidDateRange {
            start: NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
            end: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_DATE_RANGE");
    }

    #[test]
    fn test_open_punch_maps_to_409() {
        let engine_error = EngineError::OpenPunchExists {
            employee_id: "emp_001".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::CONFLICT);
        assert_eq!(api_error.error.code, "OPEN_PUNCH_EXISTS");
    }

    #[test]
    fn test_config_error_maps_to_500() {
        let engine_error = EngineError::ConfigNotFound {
            path: "/missing/schedule.yaml".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
    }
}
