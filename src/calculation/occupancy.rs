//! Occupancy ratio calculation functionality.
//!
//! This module turns occupied/total counts into a percentage and a severity
//! band, and rolls child ratios (units, buildings) up to their parent.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::OccupancyThresholds;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditStep, AuditWarning, OVER_CAPACITY, OccupancyBand, OccupancyRatio, OccupancyReport,
    OccupancyScope,
};

/// Percentage above which occupancy is a warning.
pub const DEFAULT_WARNING_THRESHOLD: Decimal = Decimal::from_parts(70, 0, 0, false, 0);

/// Percentage above which occupancy is critical.
pub const DEFAULT_CRITICAL_THRESHOLD: Decimal = Decimal::from_parts(90, 0, 0, false, 0);

/// The result of an occupancy calculation, including the report and audit step.
#[derive(Debug, Clone)]
pub struct OccupancyResult {
    /// The computed occupancy.
    pub report: OccupancyReport,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
    /// Set when occupied exceeds total.
    pub warnings: Vec<AuditWarning>,
}

/// Classifies a percentage into a band.
///
/// Each band's lower bound is exclusive: a percentage equal to the critical
/// threshold is still a warning.
///
/// # Examples
///
/// ```
/// use housing_engine::calculation::classify_occupancy;
/// use housing_engine::config::OccupancyThresholds;
/// use housing_engine::models::OccupancyBand;
/// use rust_decimal::Decimal;
///
/// let thresholds = OccupancyThresholds::default();
/// assert_eq!(classify_occupancy(Decimal::new(90, 0), &thresholds), OccupancyBand::Warning);
/// assert_eq!(classify_occupancy(Decimal::new(901, 1), &thresholds), OccupancyBand::Critical);
/// assert_eq!(classify_occupancy(Decimal::new(70, 0), &thresholds), OccupancyBand::Normal);
/// ```
pub fn classify_occupancy(percentage: Decimal, thresholds: &OccupancyThresholds) -> OccupancyBand {
    if percentage > thresholds.critical {
        OccupancyBand::Critical
    } else if percentage > thresholds.warning {
        OccupancyBand::Warning
    } else {
        OccupancyBand::Normal
    }
}

/// Computes occupancy using the default 70/90 thresholds.
///
/// # Errors
///
/// Returns [`EngineError::UndefinedRatio`] when `total` is zero.
///
/// # Examples
///
/// ```
/// use housing_engine::calculation::compute_occupancy;
/// use housing_engine::models::OccupancyBand;
/// use rust_decimal::Decimal;
///
/// let result = compute_occupancy(45, 50).unwrap();
/// assert_eq!(result.report.percentage, Decimal::new(90, 0));
/// assert_eq!(result.report.band, OccupancyBand::Warning);
///
/// assert!(compute_occupancy(3, 0).is_err());
/// ```
pub fn compute_occupancy(occupied: u64, total: u64) -> EngineResult<OccupancyResult> {
    compute_occupancy_with(
        OccupancyRatio::new(occupied, total),
        OccupancyScope::Unit,
        &OccupancyThresholds::default(),
        1,
    )
}

/// Computes occupancy for a ratio at the given scope with explicit thresholds.
///
/// Occupancy above 100% is reported as is, with an `OVER_CAPACITY` warning.
///
/// # Arguments
///
/// * `ratio` - Occupied and total counts
/// * `scope` - The level of the hierarchy the ratio describes
/// * `thresholds` - Band thresholds
/// * `step_number` - The step number for audit trail sequencing
///
/// # Errors
///
/// Returns [`EngineError::UndefinedRatio`] when `ratio.total` is zero.
pub fn compute_occupancy_with(
    ratio: OccupancyRatio,
    scope: OccupancyScope,
    thresholds: &OccupancyThresholds,
    step_number: u32,
) -> EngineResult<OccupancyResult> {
    if ratio.total == 0 {
        return Err(EngineError::UndefinedRatio {
            occupied: ratio.occupied,
        });
    }

    let percentage =
        Decimal::from(ratio.occupied) * Decimal::ONE_HUNDRED / Decimal::from(ratio.total);
    let band = classify_occupancy(percentage, thresholds);
    let over_capacity = ratio.is_over_capacity();

    let mut warnings = Vec::new();
    if over_capacity {
        debug!(
            scope = %scope,
            occupied = ratio.occupied,
            total = ratio.total,
            "Occupancy exceeds capacity"
        );
        warnings.push(AuditWarning::new(
            OVER_CAPACITY,
            format!(
                "{} occupied exceeds {} capacity of {}",
                ratio.occupied, scope, ratio.total
            ),
            "medium",
        ));
    }

    let audit_step = AuditStep {
        step_number,
        rule_id: "occupancy_ratio".to_string(),
        rule_name: "Occupancy Ratio".to_string(),
        input: serde_json::json!({
            "scope": scope,
            "occupied": ratio.occupied,
            "total": ratio.total,
            "warning_threshold": thresholds.warning.normalize().to_string(),
            "critical_threshold": thresholds.critical.normalize().to_string()
        }),
        output: serde_json::json!({
            "percentage": percentage.normalize().to_string(),
            "band": band,
            "over_capacity": over_capacity
        }),
        reasoning: format!(
            "{} / {} x 100 = {}% ({})",
            ratio.occupied,
            ratio.total,
            percentage.normalize(),
            band
        ),
    };

    Ok(OccupancyResult {
        report: OccupancyReport {
            scope,
            ratio,
            percentage,
            band,
            available: ratio.available(),
            over_capacity,
        },
        audit_step,
        warnings,
    })
}

/// Rolls child ratios up into one parent ratio by summing their counts.
///
/// An empty slice yields `0 / 0`, which [`compute_occupancy_with`] rejects
/// as undefined.
///
/// # Errors
///
/// Returns [`EngineError::OccupancyOverflow`] when either sum exceeds `u64`.
///
/// # Examples
///
/// ```
/// use housing_engine::calculation::aggregate_occupancy;
/// use housing_engine::models::OccupancyRatio;
///
/// let buildings = [OccupancyRatio::new(40, 50), OccupancyRatio::new(20, 50)];
/// assert_eq!(aggregate_occupancy(&buildings).unwrap(), OccupancyRatio::new(60, 100));
///
/// let huge = [OccupancyRatio::new(u64::MAX, u64::MAX), OccupancyRatio::new(1, 1)];
/// assert!(aggregate_occupancy(&huge).is_err());
/// ```
pub fn aggregate_occupancy(children: &[OccupancyRatio]) -> EngineResult<OccupancyRatio> {
    children
        .iter()
        .try_fold(OccupancyRatio::default(), |acc, child| {
            Some(OccupancyRatio {
                occupied: acc.occupied.checked_add(child.occupied)?,
                total: acc.total.checked_add(child.total)?,
            })
        })
        .ok_or(EngineError::OccupancyOverflow {
            children: children.len(),
        })
}
