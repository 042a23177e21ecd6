//! Net settlement between the parents.
//!
//! Both parents carry a computed obligation. The parent whose obligation is
//! lower pays the other the difference, unless the difference is below the
//! de minimis tolerance.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{ParentId, Payer};

/// Who pays and how much.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Settlement {
    /// The paying parent.
    pub payer: Payer,
    /// The net monthly amount, never negative.
    pub amount: Decimal,
    /// `final_support_a - final_support_b`, before the tolerance check.
    pub difference: Decimal,
}

/// Settles two final obligations into a single payment.
///
/// # Examples
///
/// ```
/// use child_support_engine::calculation::settle;
/// use child_support_engine::models::Payer;
/// use rust_decimal_macros::dec;
///
/// let settlement = settle(dec!(418.20), dec!(278.80), dec!(1));
/// assert_eq!(settlement.payer, Payer::B);
/// assert_eq!(settlement.amount, dec!(139.40));
///
/// let settlement = settle(dec!(300.40), dec!(300), dec!(1));
/// assert_eq!(settlement.payer, Payer::None);
/// assert_eq!(settlement.amount, dec!(0));
/// ```
pub fn settle(
    final_support_a: Decimal,
    final_support_b: Decimal,
    tolerance: Decimal,
) -> Settlement {
    let difference = final_support_a.saturating_sub(final_support_b);

    let (payer, amount) = if difference.abs() < tolerance {
        (Payer::None, Decimal::ZERO)
    } else {
        // The parent with the lower obligation pays.
        let paying = if difference > Decimal::ZERO {
            ParentId::B
        } else {
            ParentId::A
        };
        (Payer::from(paying), difference.abs())
    };

    Settlement {
        payer,
        amount,
        difference,
    }
}
