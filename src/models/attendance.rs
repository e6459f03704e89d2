//! Attendance models.
//!
//! This module contains the raw check-in/check-out [`AttendanceEvent`], the
//! half-open [`ReportingWindow`] events are bucketed over, and the resulting
//! [`HourBucket`] rows.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// The kind of attendance event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceEventKind {
    /// An employee clocked in.
    CheckIn,
    /// An employee clocked out.
    CheckOut,
}

/// A single clock-in or clock-out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceEvent {
    /// When the event happened.
    pub timestamp: NaiveDateTime,
    /// Whether this was a check-in or a check-out.
    pub kind: AttendanceEventKind,
}

/// How events outside the reporting window are treated.
///
/// There is intentionally no `Default`: callers always pick one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangePolicy {
    /// Any out-of-window event fails the whole aggregation.
    Strict,
    /// Out-of-window events are dropped.
    Lenient,
}

/// A half-open time range `[start, end)`.
///
/// # Example
///
/// ```
/// use housing_engine::models::ReportingWindow;
/// use chrono::NaiveDateTime;
///
/// let start = NaiveDateTime::parse_from_str("2026-01-15 00:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2026-01-16 00:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let window = ReportingWindow { start, end };
///
/// assert!(window.contains(start));
/// assert!(!window.contains(end));
/// assert_eq!(window.hour_count(), 24);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingWindow {
    /// Inclusive start.
    pub start: NaiveDateTime,
    /// Exclusive end.
    pub end: NaiveDateTime,
}

impl ReportingWindow {
    /// Returns true if `timestamp` lies in `[start, end)`.
    pub fn contains(&self, timestamp: NaiveDateTime) -> bool {
        timestamp >= self.start && timestamp < self.end
    }

    /// Returns the number of one-hour buckets needed to cover the window.
    ///
    /// A trailing partial hour counts as a bucket, however short, down to
    /// the nanosecond. Empty or inverted windows have no buckets.
    pub fn hour_count(&self) -> usize {
        let span = self.end - self.start;
        if span <= Duration::zero() {
            return 0;
        }
        let whole_hours = span.num_hours();
        if self.start + Duration::hours(whole_hours) < self.end {
            whole_hours as usize + 1
        } else {
            whole_hours as usize
        }
    }

    /// Returns the index of the hour bucket holding `timestamp`, if any.
    ///
    /// Any `Some` index is below [`ReportingWindow::hour_count`].
    pub fn bucket_index(&self, timestamp: NaiveDateTime) -> Option<usize> {
        if !self.contains(timestamp) {
            return None;
        }
        Some((timestamp - self.start).num_hours() as usize)
    }
}

/// Check-in and check-out counts for one hour of the reporting window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourBucket {
    /// The hour label, e.g. "08:00".
    pub hour_label: String,
    /// The start of the hour this bucket covers.
    pub hour_start: NaiveDateTime,
    /// Number of check-ins in this hour.
    pub check_in_count: u32,
    /// Number of check-outs in this hour.
    pub check_out_count: u32,
}
