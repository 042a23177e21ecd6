//! Shared child-related expenses.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Monthly child-related expenses shared between the parents.
///
/// Expenses are entered as household totals and split between the parents
/// in proportion to income share during the calculation.
///
/// # Example
///
/// ```
/// use child_support_engine::models::Expenses;
/// use rust_decimal_macros::dec;
///
/// let expenses = Expenses {
///     health_insurance: dec!(200),
///     child_care: dec!(300),
/// };
/// assert_eq!(expenses.total(), dec!(500));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expenses {
    /// Health insurance premiums attributable to the children.
    #[serde(default)]
    pub health_insurance: Decimal,
    /// Work-related child care costs.
    #[serde(default)]
    pub child_care: Decimal,
}

impl Expenses {
    /// Returns the total of all shared expenses.
    pub fn total(&self) -> Decimal {
        self.health_insurance.saturating_add(self.child_care)
    }
}
