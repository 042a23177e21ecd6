//! The complete input to a child support calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{CustodyArrangement, DeviationRequest, Expenses, ParentInput};

/// Everything needed to run one calculation.
///
/// The default mirrors the blank worksheet: Parent A custodial, Parent B on
/// standard visitation, one child, no income, no expenses and no deviations.
///
/// # Example
///
/// ```
/// use child_support_engine::models::{CalculationInput, CustodyArrangement};
///
/// let input: CalculationInput = serde_json::from_str(r#"{
///     "parent_a": { "gross_monthly_income": "4000", "custody": "custodial" },
///     "parent_b": { "gross_monthly_income": "2000", "custody": "shared" },
///     "number_of_children": 2,
///     "expenses": { "health_insurance": "200", "child_care": "300" }
/// }"#).unwrap();
///
/// assert_eq!(input.parent_b.custody, CustodyArrangement::Shared);
/// assert!(!input.deviations.high_income);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// The first parent.
    pub parent_a: ParentInput,
    /// The second parent.
    pub parent_b: ParentInput,
    /// Number of children covered by the order. The schedule covers 1 to 6.
    pub number_of_children: u32,
    /// Shared child-related expenses.
    #[serde(default)]
    pub expenses: Expenses,
    /// Requested deviations.
    #[serde(default)]
    pub deviations: DeviationRequest,
}

impl Default for CalculationInput {
    fn default() -> Self {
        Self {
            parent_a: ParentInput::with_income(Decimal::ZERO, CustodyArrangement::Custodial),
            parent_b: ParentInput::with_income(Decimal::ZERO, CustodyArrangement::Standard),
            number_of_children: 1,
            expenses: Expenses::default(),
            deviations: DeviationRequest::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_worksheet() {
        let input = CalculationInput::default();
        assert_eq!(input.parent_a.custody, CustodyArrangement::Custodial);
        assert_eq!(input.parent_b.custody, CustodyArrangement::Standard);
        assert_eq!(input.number_of_children, 1);
        assert_eq!(input.expenses, Expenses::default());
    }

    #[test]
    fn test_missing_number_of_children_is_rejected() {
        let json = r#"{
            "parent_a": { "gross_monthly_income": "4000", "custody": "custodial" },
            "parent_b": { "gross_monthly_income": "2000", "custody": "shared" }
        }"#;

        let result: Result<CalculationInput, _> = serde_json::from_str(json);
        let error = result.unwrap_err().to_string();
        assert!(error.contains("number_of_children"));
    }
}
