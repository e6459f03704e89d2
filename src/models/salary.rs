//! Salary models.
//!
//! [`SalaryComponents`] is the typed ledger input, [`SalaryForm`] is the same
//! ledger as it arrives from a data-entry form, and [`SalaryBreakdown`] holds
//! the derived totals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The itemised components of a monthly salary.
///
/// Every field defaults to zero when absent.
///
/// # Example
///
/// ```
/// use housing_engine::models::SalaryComponents;
/// use rust_decimal::Decimal;
///
/// let components: SalaryComponents = serde_json::from_str(r#"{"basic_salary": "5000"}"#).unwrap();
/// assert_eq!(components.basic_salary, Decimal::new(5000, 0));
/// assert_eq!(components.housing_allowance, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalaryComponents {
    /// The basic monthly salary.
    pub basic_salary: Decimal,
    /// Housing allowance.
    pub housing_allowance: Decimal,
    /// Transport allowance.
    pub transport_allowance: Decimal,
    /// Any other allowances.
    pub other_allowances: Decimal,
    /// Social insurance (GOSI) deduction.
    pub gosi_deduction: Decimal,
    /// Deductions for absent days.
    pub absence_deductions: Decimal,
    /// Any other deductions.
    pub other_deductions: Decimal,
}

/// A single amount as submitted by a form.
///
/// Variants are tried in order, so any JSON value deserializes: text, then
/// numbers, then anything else (booleans, objects, arrays) as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    /// Raw text that still needs to be parsed.
    Text(String),
    /// An already numeric value.
    Number(Decimal),
    /// A value that cannot hold an amount.
    Other(serde_json::Value),
}

impl From<&str> for AmountInput {
    fn from(value: &str) -> Self {
        AmountInput::Text(value.to_string())
    }
}

impl From<Decimal> for AmountInput {
    fn from(value: Decimal) -> Self {
        AmountInput::Number(value)
    }
}

/// The salary ledger as submitted by a data-entry form.
///
/// Fields may be missing, numeric, or text that has not been validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalaryForm {
    /// The basic monthly salary.
    pub basic_salary: Option<AmountInput>,
    /// Housing allowance.
    pub housing_allowance: Option<AmountInput>,
    /// Transport allowance.
    pub transport_allowance: Option<AmountInput>,
    /// Any other allowances.
    pub other_allowances: Option<AmountInput>,
    /// Social insurance (GOSI) deduction.
    pub gosi_deduction: Option<AmountInput>,
    /// Deductions for absent days.
    pub absence_deductions: Option<AmountInput>,
    /// Any other deductions.
    pub other_deductions: Option<AmountInput>,
}

impl SalaryForm {
    /// Returns every field paired with its name, in ledger order.
    pub fn fields(&self) -> [(&'static str, Option<&AmountInput>); 7] {
        [
            ("basic_salary", self.basic_salary.as_ref()),
            ("housing_allowance", self.housing_allowance.as_ref()),
            ("transport_allowance", self.transport_allowance.as_ref()),
            ("other_allowances", self.other_allowances.as_ref()),
            ("gosi_deduction", self.gosi_deduction.as_ref()),
            ("absence_deductions", self.absence_deductions.as_ref()),
            ("other_deductions", self.other_deductions.as_ref()),
        ]
    }
}

/// Totals derived from a set of [`SalaryComponents`].
///
/// Values are exact; round them only when displaying.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// Sum of housing, transport and other allowances.
    pub total_allowances: Decimal,
    /// Sum of GOSI, absence and other deductions.
    pub total_deductions: Decimal,
    /// Basic salary plus allowances minus deductions. May be negative.
    pub net_salary: Decimal,
}
