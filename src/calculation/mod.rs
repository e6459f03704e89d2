//! Calculation logic for the Housing Operations Engine.
//!
//! This module contains the salary ledger (allowance and deduction totals and
//! net salary), occupancy ratios and their severity bands, department
//! headcount shares, hourly attendance bucketing, and display rounding.
//!
//! Every function here is pure: results depend only on the arguments.

mod department_shares;
mod hourly_buckets;
mod occupancy;
mod rounding;
mod salary_ledger;

pub use department_shares::{DepartmentSharesResult, compute_department_shares, compute_shares};
pub use hourly_buckets::{
    DEFAULT_HOUR_LABEL_FORMAT, DEFAULT_MAX_WINDOW_HOURS, HourlyAttendanceResult, bucket_by_hour,
};
pub use occupancy::{
    DEFAULT_CRITICAL_THRESHOLD, DEFAULT_WARNING_THRESHOLD, OccupancyResult, aggregate_occupancy,
    classify_occupancy, compute_occupancy, compute_occupancy_with,
};
pub use rounding::round_for_display;
pub use salary_ledger::{
    SalaryCoercionResult, SalaryFormResult, SalaryLedgerResult, coerce_salary_form,
    compute_salary, compute_salary_from_form, parse_amount,
};
