//! Response types for the Housing Operations Engine API.
//!
//! This module defines the success bodies of every endpoint, the error
//! response structure, and the mapping from [`EngineError`] to HTTP status.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{
    AuditTrace, HourBucket, Locale, OccupancyReport, SalaryBreakdown, SalaryComponents,
};

/// Totals rounded to the configured currency precision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryDisplay {
    /// Rounded total allowances.
    pub total_allowances: Decimal,
    /// Rounded total deductions.
    pub total_deductions: Decimal,
    /// Rounded net salary.
    pub net_salary: Decimal,
}

/// Response body for the `/salary` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// Currency the amounts are expressed in.
    pub currency: String,
    /// The components after reading the form.
    pub components: SalaryComponents,
    /// Exact totals.
    pub breakdown: SalaryBreakdown,
    /// Totals rounded for display.
    pub display: SalaryDisplay,
    /// Audit trace of the calculation.
    pub audit_trace: AuditTrace,
}

/// Response body for the `/occupancy` and `/occupancy/rollup` endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancyResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// The computed occupancy.
    pub report: OccupancyReport,
    /// The percentage rounded for display.
    pub display_percentage: Decimal,
    /// Audit trace of the calculation.
    pub audit_trace: AuditTrace,
}

/// A department share with its name resolved for one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentShareView {
    /// Department identifier.
    pub id: String,
    /// Department name in the requested locale.
    pub display_name: String,
    /// Number of employees.
    pub count: u64,
    /// Exact share of the total.
    pub percentage: Decimal,
    /// Share rounded for display.
    pub display_percentage: Decimal,
}

/// Response body for the `/departments/shares` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentSharesResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// The locale names were resolved for.
    pub locale: Locale,
    /// Total headcount.
    pub total: u64,
    /// One entry per requested department, in request order.
    pub shares: Vec<DepartmentShareView>,
    /// Audit trace of the calculation.
    pub audit_trace: AuditTrace,
}

/// Response body for the `/attendance/hourly` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyAttendanceResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// One bucket per hour, ascending.
    pub buckets: Vec<HourBucket>,
    /// Number of events dropped under the lenient policy.
    pub dropped_events: usize,
    /// Audit trace of the calculation.
    pub audit_trace: AuditTrace,
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

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidConfig { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
            EngineError::InvalidNumericInput { field, .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_NUMERIC_INPUT",
                    message,
                    format!("The field '{}' must be a non-negative number", field),
                ),
            },
            EngineError::UndefinedRatio { .. } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "UNDEFINED_RATIO",
                    message,
                    "Occupancy cannot be computed for a total capacity of zero",
                ),
            },
            EngineError::OccupancyOverflow { .. } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "OCCUPANCY_OVERFLOW",
                    message,
                    "The summed child counts do not fit in a 64-bit count",
                ),
            },
            EngineError::OutOfRangeEvent { .. } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "OUT_OF_RANGE_EVENT",
                    message,
                    "Use the lenient range policy to drop events outside the window",
                ),
            },
            EngineError::InvalidWindow { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_WINDOW",
                    message,
                    "window_end must be after window_start",
                ),
            },
            EngineError::WindowTooLong { max_hours, .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "WINDOW_TOO_LONG",
                    message,
                    format!("Split the request into windows of at most {} hours", max_hours),
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn make_datetime(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

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
    fn test_undefined_ratio_is_unprocessable() {
        let api_error: ApiErrorResponse = EngineError::UndefinedRatio { occupied: 2 }.into();
        assert_eq!(api_error.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(api_error.error.code, "UNDEFINED_RATIO");
    }

    #[test]
    fn test_out_of_range_event_is_unprocessable() {
        let api_error: ApiErrorResponse = EngineError::OutOfRangeEvent {
            timestamp: make_datetime("2026-01-16 00:00:00"),
            window_start: make_datetime("2026-01-15 00:00:00"),
            window_end: make_datetime("2026-01-16 00:00:00"),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(api_error.error.code, "OUT_OF_RANGE_EVENT");
    }

    #[test]
    fn test_invalid_window_is_bad_request() {
        let api_error: ApiErrorResponse = EngineError::InvalidWindow {
            start: make_datetime("2026-01-15 00:00:00"),
            end: make_datetime("2026-01-14 00:00:00"),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_WINDOW");
    }

    #[test]
    fn test_window_too_long_is_bad_request() {
        let api_error: ApiErrorResponse = EngineError::WindowTooLong {
            hours: 8760,
            max_hours: 744,
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "WINDOW_TOO_LONG");
    }

    #[test]
    fn test_occupancy_overflow_is_unprocessable() {
        let api_error: ApiErrorResponse = EngineError::OccupancyOverflow { children: 2 }.into();
        assert_eq!(api_error.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(api_error.error.code, "OCCUPANCY_OVERFLOW");
    }

    #[test]
    fn test_config_errors_are_internal() {
        let api_error: ApiErrorResponse = EngineError::InvalidConfig {
            message: "bad".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
    }
}
