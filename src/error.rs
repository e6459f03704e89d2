//! Error types for the Housing Operations Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payroll, occupancy and
//! attendance calculations.

use chrono::NaiveDateTime;
use thiserror::Error;

/// The main error type for the Housing Operations Engine.
///
/// None of these conditions is fatal: every variant is returned as a value
/// so the caller can pick a fallback (for example rendering "N/A" when an
/// occupancy ratio is undefined).
///
/// # Example
///
/// ```
/// use housing_engine::error::EngineError;
///
/// let error = EngineError::UndefinedRatio { occupied: 3 };
/// assert_eq!(
///     error.to_string(),
///     "Occupancy ratio is undefined: 3 occupied out of a total capacity of 0"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but its values are inconsistent.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of the violated constraint.
        message: String,
    },

    /// A field expected to hold an amount could not be parsed.
    ///
    /// The salary calculator recovers from this locally by substituting zero.
    #[error("Invalid numeric input for '{field}': '{value}'")]
    InvalidNumericInput {
        /// The name of the offending field.
        field: String,
        /// The raw value as entered.
        value: String,
    },

    /// Occupancy was requested for a capacity of zero.
    #[error("Occupancy ratio is undefined: {occupied} occupied out of a total capacity of 0")]
    UndefinedRatio {
        /// The occupied count supplied with the zero total.
        occupied: u64,
    },

    /// Summing child occupancy counts overflowed.
    #[error("Occupancy rollup of {children} children overflows the supported count range")]
    OccupancyOverflow {
        /// The number of child ratios being rolled up.
        children: usize,
    },

    /// An attendance event falls outside the requested bucketing window.
    #[error("Event at {timestamp} is outside the window [{window_start}, {window_end})")]
    OutOfRangeEvent {
        /// The timestamp of the rejected event.
        timestamp: NaiveDateTime,
        /// The inclusive start of the window.
        window_start: NaiveDateTime,
        /// The exclusive end of the window.
        window_end: NaiveDateTime,
    },

    /// A reporting window whose end does not come after its start.
    #[error("Invalid reporting window: end {end} is not after start {start}")]
    InvalidWindow {
        /// The requested window start.
        start: NaiveDateTime,
        /// The requested window end.
        end: NaiveDateTime,
    },

    /// A reporting window spanning more hours than the configured maximum.
    #[error("Reporting window of {hours} hours exceeds the maximum of {max_hours} hours")]
    WindowTooLong {
        /// The number of hour buckets the window would need.
        hours: usize,
        /// The configured maximum.
        max_hours: u32,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn make_datetime(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/engine.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/engine.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_config_displays_message() {
        let error = EngineError::InvalidConfig {
            message: "warning threshold must be below critical".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration: warning threshold must be below critical"
        );
    }

    #[test]
    fn test_invalid_numeric_input_displays_field_and_value() {
        let error = EngineError::InvalidNumericInput {
            field: "housing_allowance".to_string(),
            value: "abc".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid numeric input for 'housing_allowance': 'abc'"
        );
    }

    #[test]
    fn test_undefined_ratio_displays_occupied() {
        let error = EngineError::UndefinedRatio { occupied: 0 };
        assert_eq!(
            error.to_string(),
            "Occupancy ratio is undefined: 0 occupied out of a total capacity of 0"
        );
    }

    #[test]
    fn test_out_of_range_event_displays_window() {
        let error = EngineError::OutOfRangeEvent {
            timestamp: make_datetime("2026-01-16 00:00:00"),
            window_start: make_datetime("2026-01-15 00:00:00"),
            window_end: make_datetime("2026-01-16 00:00:00"),
        };
        assert_eq!(
            error.to_string(),
            "Event at 2026-01-16 00:00:00 is outside the window [2026-01-15 00:00:00, 2026-01-16 00:00:00)"
        );
    }

    #[test]
    fn test_invalid_window_displays_bounds() {
        let error = EngineError::InvalidWindow {
            start: make_datetime("2026-01-15 08:00:00"),
            end: make_datetime("2026-01-15 08:00:00"),
        };
        assert!(error.to_string().contains("is not after start"));
    }

    #[test]
    fn test_occupancy_overflow_displays_children() {
        let error = EngineError::OccupancyOverflow { children: 2 };
        assert_eq!(
            error.to_string(),
            "Occupancy rollup of 2 children overflows the supported count range"
        );
    }

    #[test]
    fn test_window_too_long_displays_limit() {
        let error = EngineError::WindowTooLong {
            hours: 800,
            max_hours: 744,
        };
        assert_eq!(
            error.to_string(),
            "Reporting window of 800 hours exceeds the maximum of 744 hours"
        );
    }
}
