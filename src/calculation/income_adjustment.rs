//! Income adjustment.
//!
//! Converts a parent's gross monthly income into adjusted income by
//! subtracting allowable deductions.

use rust_decimal::Decimal;

use crate::models::Deductions;

/// Subtracts deductions from gross monthly income.
///
/// A gross income of zero or less is treated as no income at all, and the
/// adjusted figure is floored at zero so deductions can never produce a
/// negative income.
///
/// # Examples
///
/// ```
/// use child_support_engine::calculation::adjust_income;
/// use child_support_engine::models::Deductions;
/// use rust_decimal_macros::dec;
///
/// let deductions = Deductions {
///     self_employment_tax: dec!(100),
///     preexisting_support: dec!(200),
/// };
/// assert_eq!(adjust_income(dec!(1000), &deductions), dec!(700));
/// ```
pub fn adjust_income(gross: Decimal, deductions: &Deductions) -> Decimal {
    if gross <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let adjusted = gross
        .saturating_sub(deductions.self_employment_tax)
        .saturating_sub(deductions.preexisting_support);
    adjusted.max(Decimal::ZERO)
}
