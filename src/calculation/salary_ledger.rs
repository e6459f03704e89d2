//! Salary ledger calculation functionality.
//!
//! This module totals allowances and deductions and derives the net salary,
//! and reads the permissive form input the salary calculator receives.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AmountInput, AuditStep, AuditWarning, INVALID_NUMERIC_INPUT, SalaryBreakdown,
    SalaryComponents, SalaryForm,
};

/// The result of a salary calculation, including the totals and audit step.
#[derive(Debug, Clone)]
pub struct SalaryLedgerResult {
    /// The derived totals.
    pub breakdown: SalaryBreakdown,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// The result of reading a [`SalaryForm`].
#[derive(Debug, Clone)]
pub struct SalaryCoercionResult {
    /// The typed components, with unreadable fields set to zero.
    pub components: SalaryComponents,
    /// One warning per field that was present but unreadable.
    pub warnings: Vec<AuditWarning>,
}

/// The result of calculating a salary straight from form input.
#[derive(Debug, Clone)]
pub struct SalaryFormResult {
    /// The typed components the totals were computed from.
    pub components: SalaryComponents,
    /// The derived totals.
    pub breakdown: SalaryBreakdown,
    /// The audit step recording the calculation.
    pub audit_step: AuditStep,
    /// Warnings for fields that were replaced by zero.
    pub warnings: Vec<AuditWarning>,
}

/// Computes allowance and deduction totals and the net salary.
///
/// `net_salary = basic_salary + total_allowances - total_deductions`. The
/// result is exact and is not floored at zero.
///
/// # Arguments
///
/// * `components` - The itemised salary ledger
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use housing_engine::calculation::compute_salary;
/// use housing_engine::models::SalaryComponents;
/// use rust_decimal::Decimal;
///
/// let components = SalaryComponents {
///     basic_salary: Decimal::new(5000, 0),
///     housing_allowance: Decimal::new(1500, 0),
///     transport_allowance: Decimal::new(800, 0),
///     other_allowances: Decimal::new(200, 0),
///     gosi_deduction: Decimal::new(450, 0),
///     absence_deductions: Decimal::ZERO,
///     other_deductions: Decimal::new(50, 0),
/// };
///
/// let result = compute_salary(&components, 1);
/// assert_eq!(result.breakdown.total_allowances, Decimal::new(2500, 0));
/// assert_eq!(result.breakdown.total_deductions, Decimal::new(500, 0));
/// assert_eq!(result.breakdown.net_salary, Decimal::new(7000, 0));
/// ```
pub fn compute_salary(components: &SalaryComponents, step_number: u32) -> SalaryLedgerResult {
    let total_allowances = components.housing_allowance
        + components.transport_allowance
        + components.other_allowances;
    let total_deductions = components.gosi_deduction
        + components.absence_deductions
        + components.other_deductions;
    let net_salary = components.basic_salary + total_allowances - total_deductions;

    let audit_step = AuditStep {
        step_number,
        rule_id: "salary_ledger".to_string(),
        rule_name: "Salary Ledger".to_string(),
        input: serde_json::json!({
            "basic_salary": components.basic_salary.normalize().to_string(),
            "housing_allowance": components.housing_allowance.normalize().to_string(),
            "transport_allowance": components.transport_allowance.normalize().to_string(),
            "other_allowances": components.other_allowances.normalize().to_string(),
            "gosi_deduction": components.gosi_deduction.normalize().to_string(),
            "absence_deductions": components.absence_deductions.normalize().to_string(),
            "other_deductions": components.other_deductions.normalize().to_string()
        }),
        output: serde_json::json!({
            "total_allowances": total_allowances.normalize().to_string(),
            "total_deductions": total_deductions.normalize().to_string(),
            "net_salary": net_salary.normalize().to_string()
        }),
        reasoning: format!(
            "{} + {} - {} = {}",
            components.basic_salary.normalize(),
            total_allowances.normalize(),
            total_deductions.normalize(),
            net_salary.normalize()
        ),
    };

    SalaryLedgerResult {
        breakdown: SalaryBreakdown {
            total_allowances,
            total_deductions,
            net_salary,
        },
        audit_step,
    }
}

/// Parses a single amount typed into a salary form.
///
/// Blank text is treated as an absent field and reads as zero. Thousands
/// separators (`,` and `٬`) are ignored and Arabic-Indic digits and the
/// Arabic decimal separator (`٫`) are accepted. Negative amounts are invalid.
///
/// # Errors
///
/// Returns [`EngineError::InvalidNumericInput`] when the value cannot be read
/// as a non-negative decimal.
///
/// # Examples
///
/// ```
/// use housing_engine::calculation::parse_amount;
/// use housing_engine::models::AmountInput;
/// use rust_decimal::Decimal;
///
/// let amount = parse_amount("basic_salary", &AmountInput::from("٥٠٠٠")).unwrap();
/// assert_eq!(amount, Decimal::new(5000, 0));
///
/// assert!(parse_amount("basic_salary", &AmountInput::from("five")).is_err());
/// ```
pub fn parse_amount(field: &str, input: &AmountInput) -> EngineResult<Decimal> {
    let invalid = |value: String| EngineError::InvalidNumericInput {
        field: field.to_string(),
        value,
    };

    let amount = match input {
        AmountInput::Number(value) => *value,
        AmountInput::Text(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Ok(Decimal::ZERO);
            }
            let normalized = normalize_digits(trimmed);
            Decimal::from_str(&normalized).map_err(|_| invalid(raw.clone()))?
        }
        AmountInput::Other(value) => return Err(invalid(value.to_string())),
    };

    if amount.is_zero() {
        return Ok(Decimal::ZERO);
    }
    if amount.is_sign_negative() {
        return Err(invalid(amount.to_string()));
    }
    Ok(amount)
}

/// Maps Arabic-Indic digits to ASCII and strips grouping separators.
fn normalize_digits(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, ',' | '\u{066C}'))
        .map(|c| match c {
            '\u{0660}'..='\u{0669}' => char::from(b'0' + (c as u32 - 0x0660) as u8),
            '\u{06F0}'..='\u{06F9}' => char::from(b'0' + (c as u32 - 0x06F0) as u8),
            '\u{066B}' => '.',
            other => other,
        })
        .collect()
}

/// Reads every field of a [`SalaryForm`] into [`SalaryComponents`].
///
/// Unreadable fields become zero and are reported as
/// `INVALID_NUMERIC_INPUT` warnings instead of failing the form.
pub fn coerce_salary_form(form: &SalaryForm) -> SalaryCoercionResult {
    let mut amounts = [Decimal::ZERO; 7];
    let mut warnings = Vec::new();

    for (slot, (field, input)) in amounts.iter_mut().zip(form.fields()) {
        let Some(input) = input else {
            continue;
        };
        match parse_amount(field, input) {
            Ok(amount) => *slot = amount,
            Err(err) => {
                tracing::debug!(field = field, error = %err, "Substituting zero for unreadable amount");
                warnings.push(AuditWarning::new(
                    INVALID_NUMERIC_INPUT,
                    format!("{}; treated as 0", err),
                    "low",
                ));
            }
        }
    }

    let [
        basic_salary,
        housing_allowance,
        transport_allowance,
        other_allowances,
        gosi_deduction,
        absence_deductions,
        other_deductions,
    ] = amounts;

    SalaryCoercionResult {
        components: SalaryComponents {
            basic_salary,
            housing_allowance,
            transport_allowance,
            other_allowances,
            gosi_deduction,
            absence_deductions,
            other_deductions,
        },
        warnings,
    }
}

/// Reads a [`SalaryForm`] and computes its totals in one go.
///
/// # Examples
///
/// ```
/// use housing_engine::calculation::compute_salary_from_form;
/// use housing_engine::models::SalaryForm;
/// use rust_decimal::Decimal;
///
/// let form = SalaryForm {
///     basic_salary: Some("4,000".into()),
///     housing_allowance: Some("n/a".into()),
///     ..Default::default()
/// };
///
/// let result = compute_salary_from_form(&form, 1);
/// assert_eq!(result.breakdown.net_salary, Decimal::new(4000, 0));
/// assert_eq!(result.warnings.len(), 1);
/// ```
pub fn compute_salary_from_form(form: &SalaryForm, step_number: u32) -> SalaryFormResult {
    let coerced = coerce_salary_form(form);
    let ledger = compute_salary(&coerced.components, step_number);

    SalaryFormResult {
        components: coerced.components,
        breakdown: ledger.breakdown,
        audit_step: ledger.audit_step,
        warnings: coerced.warnings,
    }
}
