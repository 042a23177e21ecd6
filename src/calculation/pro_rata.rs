//! Pro-rata income shares.

use rust_decimal::Decimal;
use serde::Serialize;

/// Each parent's fraction of combined adjusted income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProRataShares {
    /// Parent A's share, in `[0, 1]`.
    pub share_a: Decimal,
    /// Parent B's share, in `[0, 1]`.
    pub share_b: Decimal,
}

/// Splits combined income into the two parents' shares.
///
/// When combined income is zero or less both shares are zero rather than a
/// division by zero.
///
/// # Examples
///
/// ```
/// use child_support_engine::calculation::calculate_pro_rata;
/// use rust_decimal_macros::dec;
///
/// let shares = calculate_pro_rata(dec!(3000), dec!(2000));
/// assert_eq!(shares.share_a, dec!(0.6));
/// assert_eq!(shares.share_b, dec!(0.4));
/// ```
pub fn calculate_pro_rata(adjusted_income_a: Decimal, adjusted_income_b: Decimal) -> ProRataShares {
    let no_shares = ProRataShares {
        share_a: Decimal::ZERO,
        share_b: Decimal::ZERO,
    };

    let Some(total) = adjusted_income_a.checked_add(adjusted_income_b) else {
        // Only two huge positive incomes overflow upward
        return if adjusted_income_a > Decimal::ZERO {
            shares_by_ratio(adjusted_income_a, adjusted_income_b)
        } else {
            no_shares
        };
    };

    if total <= Decimal::ZERO {
        return no_shares;
    }

    ProRataShares {
        share_a: adjusted_income_a / total,
        share_b: adjusted_income_b / total,
    }
}

/// Splits two positive incomes whose sum is not representable, dividing
/// the smaller by the larger instead.
fn shares_by_ratio(income_a: Decimal, income_b: Decimal) -> ProRataShares {
    let (larger, smaller, a_is_larger) = if income_a >= income_b {
        (income_a, income_b, true)
    } else {
        (income_b, income_a, false)
    };
    let larger_share = Decimal::ONE / (Decimal::ONE + smaller / larger);
    let smaller_share = Decimal::ONE - larger_share;

    if a_is_larger {
        ProRataShares {
            share_a: larger_share,
            share_b: smaller_share,
        }
    } else {
        ProRataShares {
            share_a: smaller_share,
            share_b: larger_share,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_unequal_incomes() {
        let shares = calculate_pro_rata(dec!(3000), dec!(2000));
        assert_eq!(shares.share_a, dec!(0.6));
        assert_eq!(shares.share_b, dec!(0.4));
    }

    #[test]
    fn test_equal_incomes_split_evenly() {
        let shares = calculate_pro_rata(dec!(2500), dec!(2500));
        assert_eq!(shares.share_a, dec!(0.5));
        assert_eq!(shares.share_b, dec!(0.5));
    }

    #[test]
    fn test_zero_total_income() {
        let shares = calculate_pro_rata(Decimal::ZERO, Decimal::ZERO);
        assert_eq!(shares.share_a, Decimal::ZERO);
        assert_eq!(shares.share_b, Decimal::ZERO);
    }

    #[test]
    fn test_one_parent_without_income() {
        let shares = calculate_pro_rata(dec!(5000), Decimal::ZERO);
        assert_eq!(shares.share_a, Decimal::ONE);
        assert_eq!(shares.share_b, Decimal::ZERO);
    }

    #[test]
    fn test_incomes_too_large_to_sum() {
        let shares = calculate_pro_rata(Decimal::MAX, Decimal::MAX);
        assert_eq!(shares.share_a, dec!(0.5));
        assert_eq!(shares.share_b, dec!(0.5));

        let shares = calculate_pro_rata(Decimal::MAX / dec!(4), Decimal::MAX);
        assert!((shares.share_a - dec!(0.2)).abs() < dec!(0.0000000001));
        assert!((shares.share_b - dec!(0.8)).abs() < dec!(0.0000000001));
    }

    #[test]
    fn test_thirds_sum_to_one_within_precision() {
        let shares = calculate_pro_rata(dec!(4000), dec!(2000));
        let sum = shares.share_a + shares.share_b;
        assert!((sum - Decimal::ONE).abs() < dec!(0.0000000001));
    }
}
