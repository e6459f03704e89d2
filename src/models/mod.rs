//! Core data models for the Housing Operations Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod audit;
mod department;
mod locale;
mod occupancy;
mod salary;

pub use attendance::{
    AttendanceEvent, AttendanceEventKind, HourBucket, RangePolicy, ReportingWindow,
};
pub use audit::{
    AuditStep, AuditTrace, AuditWarning, EVENTS_DROPPED, INVALID_NUMERIC_INPUT, OVER_CAPACITY,
};
pub use department::{DepartmentCount, DepartmentShare};
pub use locale::{Locale, LocalizedText};
pub use occupancy::{OccupancyBand, OccupancyRatio, OccupancyReport, OccupancyScope};
pub use salary::{AmountInput, SalaryBreakdown, SalaryComponents, SalaryForm};
