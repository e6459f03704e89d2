//! Hourly attendance bucketing.
//!
//! Groups check-in and check-out events into one-hour buckets spanning a
//! reporting window, for the attendance time-series chart.

use std::fmt::Write;

use chrono::{Duration, NaiveDateTime};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendanceEvent, AttendanceEventKind, AuditStep, AuditWarning, EVENTS_DROPPED, HourBucket,
    RangePolicy, ReportingWindow,
};

/// Default label format for hour buckets.
pub const DEFAULT_HOUR_LABEL_FORMAT: &str = "%H:%M";

/// Default cap on the number of hour buckets in one window (31 days).
pub const DEFAULT_MAX_WINDOW_HOURS: u32 = 744;

/// The result of bucketing attendance events.
#[derive(Debug, Clone)]
pub struct HourlyAttendanceResult {
    /// One bucket per hour of the window, ascending, empty hours included.
    pub buckets: Vec<HourBucket>,
    /// Number of events dropped for falling outside the window.
    pub dropped_events: usize,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
    /// Set when events were dropped.
    pub warnings: Vec<AuditWarning>,
}

/// Buckets attendance events by hour over `[window.start, window.end)`.
///
/// Every hour of the window gets a bucket, in ascending order, even when no
/// event falls in it. If the window is not a whole number of hours the last
/// bucket covers the remaining part hour.
///
/// # Arguments
///
/// * `events` - Check-in and check-out events, in any order
/// * `window` - The half-open reporting window
/// * `policy` - What to do with events outside the window
/// * `label_format` - `chrono` format string for bucket labels
/// * `max_window_hours` - Largest number of buckets a window may need
/// * `step_number` - The step number for audit trail sequencing
///
/// # Errors
///
/// - [`EngineError::InvalidWindow`] if `window.end` is not after `window.start`
/// - [`EngineError::WindowTooLong`] if the window needs more than
///   `max_window_hours` buckets; nothing is allocated in that case
/// - [`EngineError::OutOfRangeEvent`] for the first out-of-window event under
///   [`RangePolicy::Strict`]
///
/// # Examples
///
/// ```
/// use housing_engine::calculation::{bucket_by_hour, DEFAULT_HOUR_LABEL_FORMAT, DEFAULT_MAX_WINDOW_HOURS};
/// use housing_engine::models::{AttendanceEvent, AttendanceEventKind, RangePolicy, ReportingWindow};
/// use chrono::NaiveDateTime;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
/// let window = ReportingWindow {
///     start: at("2026-01-15 00:00:00"),
///     end: at("2026-01-16 00:00:00"),
/// };
/// let events = vec![AttendanceEvent {
///     timestamp: at("2026-01-15 08:10:00"),
///     kind: AttendanceEventKind::CheckIn,
/// }];
///
/// let result = bucket_by_hour(
///     &events,
///     window,
///     RangePolicy::Strict,
///     DEFAULT_HOUR_LABEL_FORMAT,
///     DEFAULT_MAX_WINDOW_HOURS,
///     1,
/// )
/// .unwrap();
/// assert_eq!(result.buckets.len(), 24);
/// assert_eq!(result.buckets[8].hour_label, "08:00");
/// assert_eq!(result.buckets[8].check_in_count, 1);
/// ```
pub fn bucket_by_hour(
    events: &[AttendanceEvent],
    window: ReportingWindow,
    policy: RangePolicy,
    label_format: &str,
    max_window_hours: u32,
    step_number: u32,
) -> EngineResult<HourlyAttendanceResult> {
    if window.end <= window.start {
        return Err(EngineError::InvalidWindow {
            start: window.start,
            end: window.end,
        });
    }

    let hour_count = window.hour_count();
    if hour_count > max_window_hours as usize {
        return Err(EngineError::WindowTooLong {
            hours: hour_count,
            max_hours: max_window_hours,
        });
    }

    let mut buckets: Vec<HourBucket> = (0..hour_count)
        .map(|index| {
            let hour_start = window.start + Duration::hours(index as i64);
            HourBucket {
                hour_label: format_hour_label(hour_start, label_format),
                hour_start,
                check_in_count: 0,
                check_out_count: 0,
            }
        })
        .collect();

    let mut dropped_events = 0;
    let mut check_ins = 0u32;
    let mut check_outs = 0u32;

    for event in events {
        let Some(bucket) = window
            .bucket_index(event.timestamp)
            .and_then(|index| buckets.get_mut(index))
        else {
            match policy {
                RangePolicy::Strict => {
                    return Err(EngineError::OutOfRangeEvent {
                        timestamp: event.timestamp,
                        window_start: window.start,
                        window_end: window.end,
                    });
                }
                RangePolicy::Lenient => {
                    dropped_events += 1;
                    continue;
                }
            }
        };

        match event.kind {
            AttendanceEventKind::CheckIn => {
                bucket.check_in_count += 1;
                check_ins += 1;
            }
            AttendanceEventKind::CheckOut => {
                bucket.check_out_count += 1;
                check_outs += 1;
            }
        }
    }

    let mut warnings = Vec::new();
    if dropped_events > 0 {
        debug!(
            dropped_events,
            window_start = %window.start,
            window_end = %window.end,
            "Dropped attendance events outside the reporting window"
        );
        warnings.push(AuditWarning::new(
            EVENTS_DROPPED,
            format!(
                "{} events outside [{}, {}) were dropped",
                dropped_events, window.start, window.end
            ),
            "low",
        ));
    }

    let audit_step = AuditStep {
        step_number,
        rule_id: "hourly_attendance".to_string(),
        rule_name: "Hourly Attendance".to_string(),
        input: serde_json::json!({
            "window_start": window.start,
            "window_end": window.end,
            "range_policy": policy,
            "event_count": events.len()
        }),
        output: serde_json::json!({
            "bucket_count": buckets.len(),
            "check_ins": check_ins,
            "check_outs": check_outs,
            "dropped_events": dropped_events
        }),
        reasoning: format!(
            "{} events into {} hourly buckets ({} dropped)",
            events.len(),
            buckets.len(),
            dropped_events
        ),
    };

    Ok(HourlyAttendanceResult {
        buckets,
        dropped_events,
        audit_step,
        warnings,
    })
}

/// Formats a bucket label, falling back to `HH:MM` for an unusable format.
fn format_hour_label(hour_start: NaiveDateTime, label_format: &str) -> String {
    let mut label = String::new();
    if write!(label, "{}", hour_start.format(label_format)).is_err() {
        return hour_start.format(DEFAULT_HOUR_LABEL_FORMAT).to_string();
    }
    label
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn day_window() -> ReportingWindow {
        ReportingWindow {
            start: make_datetime("2026-01-15", "00:00:00"),
            end: make_datetime("2026-01-16", "00:00:00"),
        }
    }

    fn event(date: &str, time: &str, kind: AttendanceEventKind) -> AttendanceEvent {
        AttendanceEvent {
            timestamp: make_datetime(date, time),
            kind,
        }
    }

    fn bucket(
        events: &[AttendanceEvent],
        window: ReportingWindow,
        policy: RangePolicy,
    ) -> EngineResult<HourlyAttendanceResult> {
        bucket_by_hour(
            events,
            window,
            policy,
            DEFAULT_HOUR_LABEL_FORMAT,
            DEFAULT_MAX_WINDOW_HOURS,
            1,
        )
    }

    fn make_precise(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f").unwrap()
    }

    /// HB-001: empty day
    #[test]
    fn test_empty_day_has_24_zero_buckets_in_order() {
        let result = bucket(&[], day_window(), RangePolicy::Strict).unwrap();

        assert_eq!(result.buckets.len(), 24);
        for (hour, bucket) in result.buckets.iter().enumerate() {
            assert_eq!(bucket.hour_label, format!("{:02}:00", hour));
            assert_eq!(bucket.check_in_count, 0);
            assert_eq!(bucket.check_out_count, 0);
        }
        assert!(result
            .buckets
            .windows(2)
            .all(|pair| pair[0].hour_start < pair[1].hour_start));
    }

    /// HB-002: 23:59 lands in the last bucket
    #[test]
    fn test_event_at_2359_lands_in_23_bucket() {
        let events = vec![event("2026-01-15", "23:59:00", AttendanceEventKind::CheckOut)];
        let result = bucket(&events, day_window(), RangePolicy::Strict).unwrap();

        assert_eq!(result.buckets[23].hour_label, "23:00");
        assert_eq!(result.buckets[23].check_out_count, 1);
    }

    /// HB-003: event at window end is excluded
    #[test]
    fn test_event_at_window_end_is_excluded() {
        let events = vec![event("2026-01-16", "00:00:00", AttendanceEventKind::CheckIn)];

        let lenient = bucket(&events, day_window(), RangePolicy::Lenient).unwrap();
        assert_eq!(lenient.dropped_events, 1);
        assert!(lenient.buckets.iter().all(|b| b.check_in_count == 0));

        match bucket(&events, day_window(), RangePolicy::Strict) {
            Err(EngineError::OutOfRangeEvent { timestamp, .. }) => {
                assert_eq!(timestamp, make_datetime("2026-01-16", "00:00:00"));
            }
            other => panic!("Expected OutOfRangeEvent, got {:?}", other),
        }
    }

    /// HB-004: event at window start is included
    #[test]
    fn test_event_at_window_start_is_included() {
        let events = vec![event("2026-01-15", "00:00:00", AttendanceEventKind::CheckIn)];
        let result = bucket(&events, day_window(), RangePolicy::Strict).unwrap();

        assert_eq!(result.buckets[0].check_in_count, 1);
    }

    /// HB-005: counts per kind and hour
    #[test]
    fn test_counts_by_kind_and_hour() {
        let events = vec![
            event("2026-01-15", "08:05:00", AttendanceEventKind::CheckIn),
            event("2026-01-15", "08:55:00", AttendanceEventKind::CheckIn),
            event("2026-01-15", "17:00:00", AttendanceEventKind::CheckOut),
            event("2026-01-15", "08:30:00", AttendanceEventKind::CheckOut),
            event("2026-01-15", "17:45:00", AttendanceEventKind::CheckOut),
        ];
        let result = bucket(&events, day_window(), RangePolicy::Strict).unwrap();

        assert_eq!(result.buckets[8].check_in_count, 2);
        assert_eq!(result.buckets[8].check_out_count, 1);
        assert_eq!(result.buckets[17].check_out_count, 2);
        assert_eq!(result.audit_step.output["check_ins"], 2);
        assert_eq!(result.audit_step.output["check_outs"], 3);
        assert!(result.warnings.is_empty());
    }

    /// HB-006: lenient drops, strict fails
    #[test]
    fn test_lenient_drops_out_of_range_events() {
        let events = vec![
            event("2026-01-14", "22:00:00", AttendanceEventKind::CheckIn),
            event("2026-01-15", "09:00:00", AttendanceEventKind::CheckIn),
            event("2026-01-16", "07:00:00", AttendanceEventKind::CheckOut),
        ];

        let result = bucket(&events, day_window(), RangePolicy::Lenient).unwrap();
        assert_eq!(result.dropped_events, 2);
        assert_eq!(result.buckets[9].check_in_count, 1);
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].code, EVENTS_DROPPED);

        assert!(matches!(
            bucket(&events, day_window(), RangePolicy::Strict),
            Err(EngineError::OutOfRangeEvent { .. })
        ));
    }

    #[test]
    fn test_partial_window_buckets() {
        let window = ReportingWindow {
            start: make_datetime("2026-01-15", "06:00:00"),
            end: make_datetime("2026-01-15", "08:30:00"),
        };
        let events = vec![event("2026-01-15", "08:20:00", AttendanceEventKind::CheckIn)];
        let result = bucket(&events, window, RangePolicy::Strict).unwrap();

        let labels: Vec<&str> = result.buckets.iter().map(|b| b.hour_label.as_str()).collect();
        assert_eq!(labels, vec!["06:00", "07:00", "08:00"]);
        assert_eq!(result.buckets[2].check_in_count, 1);
    }

    #[test]
    fn test_window_starting_off_the_hour() {
        let window = ReportingWindow {
            start: make_datetime("2026-01-15", "07:30:00"),
            end: make_datetime("2026-01-15", "09:30:00"),
        };
        let events = vec![event("2026-01-15", "08:40:00", AttendanceEventKind::CheckIn)];
        let result = bucket(&events, window, RangePolicy::Strict).unwrap();

        assert_eq!(result.buckets.len(), 2);
        assert_eq!(result.buckets[0].hour_label, "07:30");
        assert_eq!(result.buckets[1].check_in_count, 1);
    }

    #[test]
    fn test_multi_day_window() {
        let window = ReportingWindow {
            start: make_datetime("2026-01-15", "00:00:00"),
            end: make_datetime("2026-01-17", "00:00:00"),
        };
        let result = bucket(&[], window, RangePolicy::Lenient).unwrap();

        assert_eq!(result.buckets.len(), 48);
        assert_eq!(result.buckets[24].hour_start, make_datetime("2026-01-16", "00:00:00"));
    }

    #[test]
    fn test_custom_label_format() {
        let result = bucket_by_hour(&[], day_window(), RangePolicy::Strict, "%I %p", 24, 1).unwrap();
        assert_eq!(result.buckets[13].hour_label, "01 PM");
    }

    #[test]
    fn test_unusable_label_format_falls_back() {
        let result = bucket_by_hour(&[], day_window(), RangePolicy::Strict, "%Q", 24, 1).unwrap();
        assert_eq!(result.buckets[7].hour_label, "07:00");
    }

    #[test]
    fn test_empty_window_is_invalid() {
        let window = ReportingWindow {
            start: make_datetime("2026-01-15", "08:00:00"),
            end: make_datetime("2026-01-15", "08:00:00"),
        };
        assert!(matches!(
            bucket(&[], window, RangePolicy::Lenient),
            Err(EngineError::InvalidWindow { .. })
        ));
    }

    /// HB-007: sub-second window tail
    #[test]
    fn test_event_in_sub_second_tail_is_counted() {
        let window = ReportingWindow {
            start: make_datetime("2026-01-15", "00:00:00"),
            end: make_precise("2026-01-15 01:00:00.500"),
        };
        let events = vec![
            AttendanceEvent {
                timestamp: make_precise("2026-01-15 01:00:00.200"),
                kind: AttendanceEventKind::CheckOut,
            },
            AttendanceEvent {
                timestamp: make_precise("2026-01-15 01:00:00.500"),
                kind: AttendanceEventKind::CheckOut,
            },
        ];

        let result = bucket(&events, window, RangePolicy::Lenient).unwrap();
        assert_eq!(result.buckets.len(), 2);
        assert_eq!(result.buckets[1].hour_label, "01:00");
        assert_eq!(result.buckets[1].check_out_count, 1);
        assert_eq!(result.dropped_events, 1);

        let strict = bucket(&events[..1], window, RangePolicy::Strict).unwrap();
        assert_eq!(strict.buckets[1].check_out_count, 1);
    }

    /// HB-008: window longer than the limit
    #[test]
    fn test_window_longer_than_limit_is_rejected() {
        let window = ReportingWindow {
            start: make_datetime("0001-01-01", "00:00:00"),
            end: make_datetime("9999-12-31", "00:00:00"),
        };
        match bucket(&[], window, RangePolicy::Lenient) {
            Err(EngineError::WindowTooLong { hours, max_hours }) => {
                assert_eq!(max_hours, DEFAULT_MAX_WINDOW_HOURS);
                assert!(hours > 87_000_000);
            }
            other => panic!("Expected WindowTooLong, got {:?}", other.map(|r| r.buckets.len())),
        }
    }

    #[test]
    fn test_window_at_limit_is_accepted() {
        let start = make_datetime("2026-01-01", "00:00:00");
        let exact = ReportingWindow {
            start,
            end: start + Duration::hours(48),
        };
        let result = bucket_by_hour(&[], exact, RangePolicy::Strict, DEFAULT_HOUR_LABEL_FORMAT, 48, 1)
            .unwrap();
        assert_eq!(result.buckets.len(), 48);

        let over = ReportingWindow {
            start,
            end: start + Duration::hours(48) + Duration::nanoseconds(1),
        };
        assert!(matches!(
            bucket_by_hour(&[], over, RangePolicy::Strict, DEFAULT_HOUR_LABEL_FORMAT, 48, 1),
            Err(EngineError::WindowTooLong { hours: 49, max_hours: 48 })
        ));
    }
}
