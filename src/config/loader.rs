//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{DisplayConfig, EngineConfig, EngineMetadata, OccupancyConfig, OccupancyThresholds};

/// Largest number of decimal places accepted for display rounding.
const MAX_DISPLAY_DECIMAL_PLACES: u32 = 8;

/// Upper bound for `max_window_hours` (one leap year).
const MAX_WINDOW_HOURS_LIMIT: u32 = 8784;

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/housing/
/// ├── engine.yaml     # Engine metadata
/// ├── occupancy.yaml  # Occupancy band thresholds
/// └── display.yaml    # Display precision settings
/// ```
///
/// # Example
///
/// ```no_run
/// use housing_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/housing").unwrap();
/// println!("Loaded configuration: {}", loader.metadata().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The thresholds or precisions are inconsistent
    ///
    /// # Example
    ///
    /// ```no_run
    /// use housing_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/housing")?;
    /// # Ok::<(), housing_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<EngineMetadata>(&path.join("engine.yaml"))?;
        let occupancy = Self::load_yaml::<OccupancyConfig>(&path.join("occupancy.yaml"))?;
        let display = Self::load_yaml::<DisplayConfig>(&path.join("display.yaml"))?;

        Self::validate_thresholds(&occupancy.thresholds)?;
        Self::validate_display(&display)?;

        debug!(
            path = %path.display(),
            code = %metadata.code,
            warning = %occupancy.thresholds.warning,
            critical = %occupancy.thresholds.critical,
            "Loaded engine configuration"
        );

        Ok(Self {
            config: EngineConfig::new(metadata, occupancy.thresholds, display),
        })
    }

    /// Builds a loader from already constructed parts, applying the same
    /// validation as [`ConfigLoader::load`].
    pub fn from_parts(
        metadata: EngineMetadata,
        thresholds: OccupancyThresholds,
        display: DisplayConfig,
    ) -> EngineResult<Self> {
        Self::validate_thresholds(&thresholds)?;
        Self::validate_display(&display)?;
        Ok(Self {
            config: EngineConfig::new(metadata, thresholds, display),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate_thresholds(thresholds: &OccupancyThresholds) -> EngineResult<()> {
        if thresholds.warning < Decimal::ZERO {
            return Err(EngineError::InvalidConfig {
                message: format!(
                    "occupancy warning threshold {} must not be negative",
                    thresholds.warning
                ),
            });
        }
        if thresholds.warning >= thresholds.critical {
            return Err(EngineError::InvalidConfig {
                message: format!(
                    "occupancy warning threshold {} must be below critical threshold {}",
                    thresholds.warning, thresholds.critical
                ),
            });
        }
        Ok(())
    }

    fn validate_display(display: &DisplayConfig) -> EngineResult<()> {
        for (name, places) in [
            ("currency_decimal_places", display.currency_decimal_places),
            ("percentage_decimal_places", display.percentage_decimal_places),
        ] {
            if places > MAX_DISPLAY_DECIMAL_PLACES {
                return Err(EngineError::InvalidConfig {
                    message: format!(
                        "{} is {}, at most {} is supported",
                        name, places, MAX_DISPLAY_DECIMAL_PLACES
                    ),
                });
            }
        }

        if display.max_window_hours == 0 || display.max_window_hours > MAX_WINDOW_HOURS_LIMIT {
            return Err(EngineError::InvalidConfig {
                message: format!(
                    "max_window_hours is {}, expected 1 to {}",
                    display.max_window_hours, MAX_WINDOW_HOURS_LIMIT
                ),
            });
        }

        // chrono reports bad specifiers only when formatting, so try one.
        let sample = NaiveDateTime::default();
        let mut label = String::new();
        if std::fmt::write(
            &mut label,
            format_args!("{}", sample.format(&display.hour_label_format)),
        )
        .is_err()
        {
            return Err(EngineError::InvalidConfig {
                message: format!(
                    "hour_label_format '{}' is not a valid time format",
                    display.hour_label_format
                ),
            });
        }
        Ok(())
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the engine metadata.
    pub fn metadata(&self) -> &EngineMetadata {
        self.config.metadata()
    }

    /// Returns the occupancy band thresholds.
    pub fn thresholds(&self) -> &OccupancyThresholds {
        self.config.thresholds()
    }

    /// Returns the display settings.
    pub fn display(&self) -> &DisplayConfig {
        self.config.display()
    }
}
