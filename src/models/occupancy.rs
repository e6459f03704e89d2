//! Occupancy models.
//!
//! This module defines the occupied/total ratio of a unit, building or
//! complex together with the severity band used to colour occupancy bars.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The level of the housing hierarchy a ratio was measured at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OccupancyScope {
    /// A single room or apartment.
    #[default]
    Unit,
    /// A building made up of units.
    Building,
    /// A housing complex made up of buildings.
    Complex,
}

impl std::fmt::Display for OccupancyScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OccupancyScope::Unit => write!(f, "unit"),
            OccupancyScope::Building => write!(f, "building"),
            OccupancyScope::Complex => write!(f, "complex"),
        }
    }
}

/// Occupied beds against total capacity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancyRatio {
    /// Number of occupied places.
    pub occupied: u64,
    /// Total number of places.
    pub total: u64,
}

impl OccupancyRatio {
    /// Creates a new ratio.
    pub fn new(occupied: u64, total: u64) -> Self {
        Self { occupied, total }
    }

    /// Returns true when more places are occupied than exist.
    pub fn is_over_capacity(&self) -> bool {
        self.occupied > self.total
    }

    /// Returns the number of free places, negative when over capacity.
    ///
    /// Computed in `i128` so every pair of `u64` counts has an exact result.
    pub fn available(&self) -> i128 {
        i128::from(self.total) - i128::from(self.occupied)
    }
}

/// Severity band derived from an occupancy percentage.
///
/// # Example
///
/// ```
/// use housing_engine::models::OccupancyBand;
///
/// assert_eq!(format!("{}", OccupancyBand::Critical), "critical");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OccupancyBand {
    /// Occupancy at or below the warning threshold.
    Normal,
    /// Occupancy above the warning threshold, at or below critical.
    Warning,
    /// Occupancy above the critical threshold.
    Critical,
}

impl std::fmt::Display for OccupancyBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OccupancyBand::Normal => write!(f, "normal"),
            OccupancyBand::Warning => write!(f, "warning"),
            OccupancyBand::Critical => write!(f, "critical"),
        }
    }
}

/// A computed occupancy figure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancyReport {
    /// The level this figure describes.
    pub scope: OccupancyScope,
    /// The underlying counts.
    pub ratio: OccupancyRatio,
    /// occupied / total x 100, unclamped.
    pub percentage: Decimal,
    /// The severity band for `percentage`.
    pub band: OccupancyBand,
    /// Free places (total - occupied).
    pub available: i128,
    /// Whether occupied exceeds total.
    pub over_capacity: bool,
}
