//! Audit trail models shared by every calculation.
//!
//! Each calculation records an [`AuditStep`] describing the rule it applied,
//! and any recoverable problem with its input as an [`AuditWarning`].

use serde::{Deserialize, Serialize};

/// Warning code recorded when a form field could not be read as an amount.
pub const INVALID_NUMERIC_INPUT: &str = "INVALID_NUMERIC_INPUT";

/// Warning code recorded when occupied units exceed capacity.
pub const OVER_CAPACITY: &str = "OVER_CAPACITY";

/// Warning code recorded when attendance events fall outside the window.
pub const EVENTS_DROPPED: &str = "EVENTS_DROPPED";

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
///
/// # Example
///
/// ```
/// use housing_engine::models::AuditStep;
///
/// let step = AuditStep {
///     step_number: 1,
///     rule_id: "occupancy_ratio".to_string(),
///     rule_name: "Occupancy Ratio".to_string(),
///     input: serde_json::json!({"occupied": 45, "total": 50}),
///     output: serde_json::json!({"percentage": "90", "band": "warning"}),
///     reasoning: "45 / 50 x 100 = 90%".to_string(),
/// };
/// assert_eq!(step.rule_id, "occupancy_ratio");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate potential issues that don't prevent calculation
/// but may require attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

impl AuditWarning {
    /// Creates a new warning.
    pub fn new(
        code: impl Into<String>,
        message: impl Into<String>,
        severity: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            severity: severity.into(),
        }
    }
}

/// The complete audit trace for a calculation.
///
/// Records every decision made during the calculation for transparency.
///
/// # Example
///
/// ```
/// use housing_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 1234,
/// };
/// assert!(trace.steps.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}
