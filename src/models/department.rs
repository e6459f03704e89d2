//! Department headcount models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::LocalizedText;

/// A department and its headcount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentCount {
    /// Department identifier.
    pub id: String,
    /// Bilingual department name.
    pub name: LocalizedText,
    /// Number of employees in the department.
    pub count: u64,
}

/// A department's share of the total headcount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentShare {
    /// Department identifier.
    pub id: String,
    /// Bilingual department name.
    pub name: LocalizedText,
    /// Number of employees in the department.
    pub count: u64,
    /// count / total x 100, unrounded. Zero when the total is zero.
    pub percentage: Decimal,
}
