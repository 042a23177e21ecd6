//! Shared expense allocation.
//!
//! Health insurance and child care are split between the parents in
//! proportion to their income shares. No rounding happens here.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::Expenses;

/// Each parent's portion of the shared expenses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExpenseAllocation {
    /// Parent A's portion.
    pub expense_a: Decimal,
    /// Parent B's portion.
    pub expense_b: Decimal,
}

/// Prorates a total expense across the two income shares.
///
/// # Examples
///
/// ```
/// use child_support_engine::calculation::allocate_expenses;
/// use rust_decimal_macros::dec;
///
/// let allocation = allocate_expenses(dec!(500), dec!(0.6), dec!(0.4));
/// assert_eq!(allocation.expense_a, dec!(300));
/// assert_eq!(allocation.expense_b, dec!(200));
/// ```
pub fn allocate_expenses(
    total_expenses: Decimal,
    share_a: Decimal,
    share_b: Decimal,
) -> ExpenseAllocation {
    ExpenseAllocation {
        expense_a: total_expenses.saturating_mul(share_a),
        expense_b: total_expenses.saturating_mul(share_b),
    }
}

/// Adds the full shared expenses to a base amount.
///
/// # Examples
///
/// ```
/// use child_support_engine::calculation::apply_expenses;
/// use child_support_engine::models::Expenses;
/// use rust_decimal_macros::dec;
///
/// let expenses = Expenses {
///     health_insurance: dec!(200),
///     child_care: dec!(300),
/// };
/// assert_eq!(apply_expenses(dec!(1000), &expenses), dec!(1500));
/// ```
pub fn apply_expenses(base: Decimal, expenses: &Expenses) -> Decimal {
    base.saturating_add(expenses.total())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_allocation_by_thirds() {
        let a = dec!(4000) / dec!(6000);
        let b = dec!(2000) / dec!(6000);
        let allocation = allocate_expenses(dec!(500), a, b);

        assert!((allocation.expense_a - dec!(333.33)).abs() < dec!(0.1));
        assert!((allocation.expense_b - dec!(166.67)).abs() < dec!(0.1));
    }

    #[test]
    fn test_zero_shares_allocate_nothing() {
        let allocation = allocate_expenses(dec!(500), Decimal::ZERO, Decimal::ZERO);
        assert_eq!(allocation.expense_a, Decimal::ZERO);
        assert_eq!(allocation.expense_b, Decimal::ZERO);
    }

    #[test]
    fn test_zero_expenses() {
        let allocation = allocate_expenses(Decimal::ZERO, dec!(0.5), dec!(0.5));
        assert_eq!(allocation.expense_a, Decimal::ZERO);
        assert_eq!(allocation.expense_b, Decimal::ZERO);
    }

    #[test]
    fn test_huge_expenses_saturate() {
        let allocation = allocate_expenses(Decimal::MAX, Decimal::ONE, Decimal::ZERO);
        assert_eq!(allocation.expense_a, Decimal::MAX);
        assert_eq!(allocation.expense_b, Decimal::ZERO);

        let expenses = Expenses {
            health_insurance: Decimal::MAX,
            child_care: Decimal::MAX,
        };
        assert_eq!(apply_expenses(dec!(1000), &expenses), Decimal::MAX);
    }

    #[test]
    fn test_apply_expenses_with_none() {
        assert_eq!(apply_expenses(dec!(1000), &Expenses::default()), dec!(1000));
    }
}
