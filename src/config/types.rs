//! Configuration types for the engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::calculation::{
    DEFAULT_CRITICAL_THRESHOLD, DEFAULT_MAX_WINDOW_HOURS, DEFAULT_WARNING_THRESHOLD,
};

/// Metadata about the deployment the engine is configured for.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineMetadata {
    /// Short code identifying the configuration set (e.g., "HOUSING-SA").
    pub code: String,
    /// Human-readable name.
    pub name: String,
    /// Version or effective date of the configuration.
    pub version: String,
    /// ISO 4217 currency code salaries are expressed in.
    pub currency: String,
}

/// Percentage thresholds separating occupancy bands.
///
/// A percentage strictly above `critical` is critical, strictly above
/// `warning` is a warning, anything else is normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct OccupancyThresholds {
    /// Lower (exclusive) bound of the warning band.
    pub warning: Decimal,
    /// Lower (exclusive) bound of the critical band.
    pub critical: Decimal,
}

impl Default for OccupancyThresholds {
    fn default() -> Self {
        Self {
            warning: DEFAULT_WARNING_THRESHOLD,
            critical: DEFAULT_CRITICAL_THRESHOLD,
        }
    }
}

/// Occupancy configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct OccupancyConfig {
    /// The band thresholds.
    pub thresholds: OccupancyThresholds,
}

/// Presentation precision settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DisplayConfig {
    /// Decimal places for money amounts.
    pub currency_decimal_places: u32,
    /// Decimal places for percentages.
    pub percentage_decimal_places: u32,
    /// `chrono` format string for hour bucket labels.
    #[serde(default = "default_hour_label_format")]
    pub hour_label_format: String,
    /// Most hour buckets a single attendance report may span.
    #[serde(default = "default_max_window_hours")]
    pub max_window_hours: u32,
}

fn default_hour_label_format() -> String {
    "%H:%M".to_string()
}

fn default_max_window_hours() -> u32 {
    DEFAULT_MAX_WINDOW_HOURS
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_decimal_places: 2,
            percentage_decimal_places: 1,
            hour_label_format: default_hour_label_format(),
            max_window_hours: default_max_window_hours(),
        }
    }
}

/// The complete engine configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    metadata: EngineMetadata,
    thresholds: OccupancyThresholds,
    display: DisplayConfig,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(
        metadata: EngineMetadata,
        thresholds: OccupancyThresholds,
        display: DisplayConfig,
    ) -> Self {
        Self {
            metadata,
            thresholds,
            display,
        }
    }

    /// Returns the engine metadata.
    pub fn metadata(&self) -> &EngineMetadata {
        &self.metadata
    }

    /// Returns the occupancy thresholds.
    pub fn thresholds(&self) -> &OccupancyThresholds {
        &self.thresholds
    }

    /// Returns the display settings.
    pub fn display(&self) -> &DisplayConfig {
        &self.display
    }
}
