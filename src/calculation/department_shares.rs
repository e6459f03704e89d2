//! Department share calculation functionality.
//!
//! Splits a headcount across departments as percentages of the total, for
//! the department distribution chart.

use rust_decimal::Decimal;

use crate::models::{AuditStep, DepartmentCount, DepartmentShare};

/// The result of a department share calculation.
#[derive(Debug, Clone)]
pub struct DepartmentSharesResult {
    /// One share per input department, in input order.
    pub shares: Vec<DepartmentShare>,
    /// Sum of all department counts.
    pub total: u64,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes each count's percentage of the sum of all counts.
///
/// The output is aligned by position with `counts`. When the sum is zero
/// (including an empty slice) every percentage is zero. Percentages are not
/// rounded.
///
/// # Examples
///
/// ```
/// use housing_engine::calculation::compute_shares;
/// use rust_decimal::Decimal;
///
/// let shares = compute_shares(&[1, 3]);
/// assert_eq!(shares, vec![Decimal::new(25, 0), Decimal::new(75, 0)]);
///
/// let shares = compute_shares(&[0, 0]);
/// assert_eq!(shares, vec![Decimal::ZERO, Decimal::ZERO]);
/// ```
pub fn compute_shares(counts: &[u64]) -> Vec<Decimal> {
    let total = counts
        .iter()
        .fold(Decimal::ZERO, |acc, count| acc + Decimal::from(*count));

    if total.is_zero() {
        return vec![Decimal::ZERO; counts.len()];
    }

    counts
        .iter()
        .map(|count| Decimal::from(*count) * Decimal::ONE_HUNDRED / total)
        .collect()
}

/// Computes the share of every department, keeping ids and names.
///
/// # Arguments
///
/// * `departments` - Departments with their headcounts
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use housing_engine::calculation::compute_department_shares;
/// use housing_engine::models::{DepartmentCount, LocalizedText};
/// use rust_decimal::Decimal;
///
/// let departments = vec![
///     DepartmentCount { id: "hr".into(), name: LocalizedText::new("الموارد البشرية", "HR"), count: 2 },
///     DepartmentCount { id: "ops".into(), name: LocalizedText::new("العمليات", "Operations"), count: 6 },
/// ];
///
/// let result = compute_department_shares(&departments, 1);
/// assert_eq!(result.total, 8);
/// assert_eq!(result.shares[1].percentage, Decimal::new(75, 0));
/// ```
pub fn compute_department_shares(
    departments: &[DepartmentCount],
    step_number: u32,
) -> DepartmentSharesResult {
    let counts: Vec<u64> = departments.iter().map(|d| d.count).collect();
    let percentages = compute_shares(&counts);
    let total = counts.iter().fold(0u64, |acc, c| acc.saturating_add(*c));

    let shares: Vec<DepartmentShare> = departments
        .iter()
        .zip(percentages)
        .map(|(department, percentage)| DepartmentShare {
            id: department.id.clone(),
            name: department.name.clone(),
            count: department.count,
            percentage,
        })
        .collect();

    let reasoning = if total == 0 {
        format!(
            "{} departments with no employees - all shares are 0%",
            departments.len()
        )
    } else {
        format!(
            "{} departments sharing {} employees",
            departments.len(),
            total
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "department_shares".to_string(),
        rule_name: "Department Shares".to_string(),
        input: serde_json::json!({
            "departments": departments
                .iter()
                .map(|d| serde_json::json!({"id": d.id, "count": d.count}))
                .collect::<Vec<_>>()
        }),
        output: serde_json::json!({
            "total": total,
            "percentages": shares
                .iter()
                .map(|s| s.percentage.normalize().to_string())
                .collect::<Vec<_>>()
        }),
        reasoning,
    };

    DepartmentSharesResult {
        shares,
        total,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LocalizedText;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn department(id: &str, count: u64) -> DepartmentCount {
        DepartmentCount {
            id: id.to_string(),
            name: LocalizedText::new(format!("قسم {}", id), format!("Department {}", id)),
            count,
        }
    }

    /// DS-001: shares sum to 100
    #[test]
    fn test_shares_sum_to_one_hundred() {
        let shares = compute_shares(&[1, 1, 1]);
        let sum: Decimal = shares.iter().sum();

        assert!((sum - dec("100")).abs() < dec("0.000001"));
        assert!(shares.iter().all(|s| *s == shares[0]));
    }

    /// DS-002: all-zero counts
    #[test]
    fn test_all_zero_counts_give_zero_shares() {
        assert_eq!(compute_shares(&[0, 0, 0]), vec![Decimal::ZERO; 3]);
    }

    /// DS-003: empty input
    #[test]
    fn test_empty_input_gives_empty_output() {
        assert!(compute_shares(&[]).is_empty());
    }

    #[test]
    fn test_zero_count_department_has_zero_share() {
        let shares = compute_shares(&[0, 4]);
        assert_eq!(shares, vec![Decimal::ZERO, dec("100")]);
    }

    #[test]
    fn test_department_shares_keep_order_and_names() {
        let departments = vec![department("a", 1), department("b", 2), department("c", 1)];
        let result = compute_department_shares(&departments, 3);

        assert_eq!(result.total, 4);
        let ids: Vec<&str> = result.shares.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(result.shares[0].percentage, dec("25"));
        assert_eq!(result.shares[1].percentage, dec("50"));
        assert_eq!(result.shares[1].name.en, "Department b");
        assert_eq!(result.audit_step.step_number, 3);
        assert_eq!(
            result.audit_step.output["percentages"][1].as_str().unwrap(),
            "50"
        );
    }

    #[test]
    fn test_empty_organization_reasoning() {
        let result = compute_department_shares(&[department("a", 0)], 1);

        assert_eq!(result.total, 0);
        assert_eq!(result.shares[0].percentage, Decimal::ZERO);
        assert!(result.audit_step.reasoning.contains("all shares are 0%"));
    }
}
