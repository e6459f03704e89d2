//! Request types for the Housing Operations Engine API.
//!
//! This module defines the JSON request structures for every endpoint.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::{
    AttendanceEvent, DepartmentCount, Locale, OccupancyRatio, OccupancyScope, RangePolicy,
    ReportingWindow, SalaryForm,
};

/// Request body for the `/salary` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SalaryRequest {
    /// Optional employee reference, echoed in logs only.
    #[serde(default)]
    pub employee_id: Option<String>,
    /// The salary form as entered.
    #[serde(default)]
    pub components: SalaryForm,
}

/// Request body for the `/occupancy` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OccupancyRequest {
    /// The level the counts were measured at.
    #[serde(default)]
    pub scope: OccupancyScope,
    /// Number of occupied places.
    pub occupied: u64,
    /// Total number of places.
    pub total: u64,
}

impl From<&OccupancyRequest> for OccupancyRatio {
    fn from(req: &OccupancyRequest) -> Self {
        OccupancyRatio::new(req.occupied, req.total)
    }
}

/// Request body for the `/occupancy/rollup` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OccupancyRollupRequest {
    /// The level of the parent the children roll up into.
    #[serde(default = "default_rollup_scope")]
    pub scope: OccupancyScope,
    /// The child ratios (units of a building, buildings of a complex).
    pub children: Vec<OccupancyRatio>,
}

fn default_rollup_scope() -> OccupancyScope {
    OccupancyScope::Complex
}

/// Request body for the `/departments/shares` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentSharesRequest {
    /// The language department names are returned in.
    #[serde(default)]
    pub locale: Locale,
    /// Departments with their headcounts.
    pub departments: Vec<DepartmentCount>,
}

/// Request body for the `/attendance/hourly` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlyAttendanceRequest {
    /// Inclusive start of the reporting window.
    pub window_start: NaiveDateTime,
    /// Exclusive end of the reporting window.
    pub window_end: NaiveDateTime,
    /// How to treat events outside the window. Required.
    pub range_policy: RangePolicy,
    /// The check-in and check-out events.
    #[serde(default)]
    pub events: Vec<AttendanceEvent>,
}

impl HourlyAttendanceRequest {
    /// Returns the requested reporting window.
    pub fn window(&self) -> ReportingWindow {
        ReportingWindow {
            start: self.window_start,
            end: self.window_end,
        }
    }
}
