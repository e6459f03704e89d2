//! HTTP API module for the Housing Operations Engine.
//!
//! This module exposes the salary, occupancy, department share and hourly
//! attendance calculations as JSON endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    DepartmentSharesRequest, HourlyAttendanceRequest, OccupancyRequest, OccupancyRollupRequest,
    SalaryRequest,
};
pub use response::{
    ApiError, ApiErrorResponse, DepartmentShareView, DepartmentSharesResponse,
    HourlyAttendanceResponse, OccupancyResponse, SalaryDisplay, SalaryResponse,
};
pub use state::AppState;
