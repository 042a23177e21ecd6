//! Shared helpers for the calculation pipeline.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary value to cents, halves away from zero.
///
/// The engine never rounds its own figures. This is offered to callers that
/// need to present or persist a result.
///
/// # Examples
///
/// ```
/// use child_support_engine::calculation::round_currency;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(round_currency(dec!(333.3333)), dec!(333.33));
/// assert_eq!(round_currency(dec!(166.665)), dec!(166.67));
/// ```
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Clamps `value` into `[min, max]`.
pub(crate) fn clamp(value: Decimal, min: Decimal, max: Decimal) -> Decimal {
    value.max(min).min(max)
}
