//! Deviation pipeline.
//!
//! Deviations adjust a parent's presumptive support. They are applied in a
//! fixed order, each multiplying the amount already adjusted by the previous
//! ones:
//!
//! 1. Low-income sliding scale (combined income $1,550 to $3,950)
//! 2. High-income surcharge (combined income above $40,000)
//! 3. Parenting time credit (more than 73 annual overnights)
//! 4. Other court-approved percentage
//!
//! The result is floored at zero.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use tracing::debug;

use crate::config::{GuidelineConfig, LowIncomeDeviation, ParentingTimeDeviation};
use crate::models::DeviationOptions;

use super::common::clamp;

/// The kinds of deviation, in the order they are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviationKind {
    /// Low-income sliding scale reduction.
    LowIncome,
    /// High-income surcharge.
    HighIncome,
    /// Parenting time credit.
    ParentingTime,
    /// Other court-approved percentage.
    Other,
}

/// A deviation that changed the running amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AppliedDeviation {
    /// Which deviation this was.
    pub kind: DeviationKind,
    /// The factor the running amount was multiplied by.
    pub multiplier: Decimal,
    /// Running amount before this deviation.
    pub amount_before: Decimal,
    /// Running amount after this deviation.
    pub amount_after: Decimal,
}

/// The result of running the deviation pipeline with its breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviationOutcome {
    /// The presumptive amount the pipeline started from.
    pub starting_amount: Decimal,
    /// The amount after all deviations, never negative.
    pub final_amount: Decimal,
    /// The deviations that were active, in application order.
    pub applied: Vec<AppliedDeviation>,
}

/// Returns the low-income reduction fraction for a combined income.
///
/// Slides linearly from zero at the upper bound to the maximum at the lower
/// bound. Callers check the income is inside the band.
///
/// # Examples
///
/// ```
/// use child_support_engine::calculation::low_income_reduction;
/// use child_support_engine::config::GuidelineConfig;
/// use rust_decimal_macros::dec;
///
/// let config = GuidelineConfig::default();
/// assert_eq!(low_income_reduction(dec!(1550), &config.low_income), dec!(0.25));
/// assert_eq!(low_income_reduction(dec!(3950), &config.low_income), dec!(0));
/// ```
pub fn low_income_reduction(combined_income: Decimal, rules: &LowIncomeDeviation) -> Decimal {
    let span = rules.upper_bound - rules.lower_bound;
    if span <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let reduction =
        rules.upper_bound.saturating_sub(combined_income) / span * rules.max_reduction;
    clamp(reduction, Decimal::ZERO, rules.max_reduction)
}

/// Returns the parenting time reduction fraction for annual overnights.
///
/// # Examples
///
/// ```
/// use child_support_engine::calculation::parenting_time_reduction;
/// use child_support_engine::config::GuidelineConfig;
/// use rust_decimal_macros::dec;
///
/// let config = GuidelineConfig::default();
/// assert_eq!(parenting_time_reduction(73, &config.parenting_time), dec!(0));
/// assert_eq!(parenting_time_reduction(103, &config.parenting_time), dec!(0.02));
/// assert_eq!(parenting_time_reduction(133, &config.parenting_time), dec!(0.04));
/// ```
pub fn parenting_time_reduction(overnights: u32, rules: &ParentingTimeDeviation) -> Decimal {
    if overnights <= rules.threshold_overnights || rules.block_overnights == 0 {
        return Decimal::ZERO;
    }
    let excess = Decimal::from(overnights - rules.threshold_overnights);
    let reduction = excess / Decimal::from(rules.block_overnights) * rules.reduction_per_block;
    reduction.min(rules.max_reduction)
}

/// Runs the deviation pipeline and reports each deviation applied.
pub fn apply_deviations_detailed(
    amount: Decimal,
    options: &DeviationOptions,
    combined_income: Decimal,
    config: &GuidelineConfig,
) -> DeviationOutcome {
    let mut running = amount;
    let mut applied = Vec::new();
    let mut apply = |kind: DeviationKind, multiplier: Decimal, running: &mut Decimal| {
        let amount_before = *running;
        *running = running.saturating_mul(multiplier);
        debug!(?kind, %multiplier, before = %amount_before, after = %*running, "deviation applied");
        applied.push(AppliedDeviation {
            kind,
            multiplier,
            amount_before,
            amount_after: *running,
        });
    };

    let low = &config.low_income;
    let in_low_band = combined_income >= low.lower_bound && combined_income <= low.upper_bound;
    if options.low_income && in_low_band {
        let reduction = low_income_reduction(combined_income, low);
        apply(DeviationKind::LowIncome, Decimal::ONE - reduction, &mut running);
    }

    if options.high_income && combined_income > config.high_income.threshold {
        apply(DeviationKind::HighIncome, config.high_income.multiplier, &mut running);
    }

    if options.parenting_time_overnights > config.parenting_time.threshold_overnights {
        let reduction =
            parenting_time_reduction(options.parenting_time_overnights, &config.parenting_time);
        apply(DeviationKind::ParentingTime, Decimal::ONE - reduction, &mut running);
    }

    if !options.other_percentage.is_zero() {
        let multiplier = Decimal::ONE.saturating_add(options.other_percentage / dec!(100));
        apply(DeviationKind::Other, multiplier, &mut running);
    }

    DeviationOutcome {
        starting_amount: amount,
        final_amount: running.max(Decimal::ZERO),
        applied,
    }
}

/// Runs the deviation pipeline with an explicit configuration.
pub fn apply_deviations_with_config(
    amount: Decimal,
    options: &DeviationOptions,
    combined_income: Decimal,
    config: &GuidelineConfig,
) -> Decimal {
    apply_deviations_detailed(amount, options, combined_income, config).final_amount
}

/// Runs the deviation pipeline with the 2025 Georgia constants.
///
/// # Examples
///
/// ```
/// use child_support_engine::calculation::apply_deviations;
/// use child_support_engine::models::DeviationOptions;
/// use rust_decimal_macros::dec;
///
/// let options = DeviationOptions::other(dec!(10));
/// assert_eq!(apply_deviations(dec!(1000), &options, dec!(5000)), dec!(1100));
/// ```
pub fn apply_deviations(
    amount: Decimal,
    options: &DeviationOptions,
    combined_income: Decimal,
) -> Decimal {
    apply_deviations_with_config(amount, options, combined_income, &GuidelineConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn options() -> DeviationOptions {
        DeviationOptions::default()
    }

    #[test]
    fn test_no_deviations_leave_amount_unchanged() {
        assert_eq!(apply_deviations(dec!(1000), &options(), dec!(5000)), dec!(1000));
    }

    #[test]
    fn test_low_income_at_2000() {
        let opts = DeviationOptions {
            low_income: true,
            ..options()
        };
        // (3950 - 2000) / 2400 * 0.25 = 0.203125
        assert_eq!(apply_deviations(dec!(1000), &opts, dec!(2000)), dec!(796.875));
    }

    #[test]
    fn test_low_income_band_edges() {
        let opts = DeviationOptions {
            low_income: true,
            ..options()
        };
        assert_eq!(apply_deviations(dec!(1000), &opts, dec!(1550)), dec!(750));
        assert_eq!(apply_deviations(dec!(1000), &opts, dec!(3950)), dec!(1000));
    }

    #[test]
    fn test_low_income_outside_band_ignored() {
        let opts = DeviationOptions {
            low_income: true,
            ..options()
        };
        assert_eq!(apply_deviations(dec!(1000), &opts, dec!(1500)), dec!(1000));
        assert_eq!(apply_deviations(dec!(1000), &opts, dec!(4000)), dec!(1000));
    }

    #[test]
    fn test_low_income_flag_required() {
        assert_eq!(apply_deviations(dec!(1000), &options(), dec!(2000)), dec!(1000));
    }

    #[test]
    fn test_high_income_surcharge() {
        let opts = DeviationOptions {
            high_income: true,
            ..options()
        };
        assert_eq!(apply_deviations(dec!(1000), &opts, dec!(45000)), dec!(1100));
    }

    #[test]
    fn test_high_income_threshold_is_exclusive() {
        let opts = DeviationOptions {
            high_income: true,
            ..options()
        };
        assert_eq!(apply_deviations(dec!(1000), &opts, dec!(40000)), dec!(1000));
    }

    #[test]
    fn test_parenting_time_at_threshold_has_no_effect() {
        let opts = DeviationOptions {
            parenting_time_overnights: 73,
            ..options()
        };
        assert_eq!(apply_deviations(dec!(1000), &opts, dec!(5000)), dec!(1000));
    }

    #[test]
    fn test_parenting_time_one_block() {
        let opts = DeviationOptions {
            parenting_time_overnights: 103,
            ..options()
        };
        assert_eq!(apply_deviations(dec!(1000), &opts, dec!(5000)), dec!(980));
    }

    #[test]
    fn test_parenting_time_cap() {
        let rules = ParentingTimeDeviation {
            threshold_overnights: 73,
            block_overnights: 30,
            reduction_per_block: dec!(0.2),
            max_reduction: dec!(0.5),
        };
        assert_eq!(parenting_time_reduction(365, &rules), dec!(0.5));
    }

    #[test]
    fn test_other_increase() {
        let opts = DeviationOptions::other(dec!(10));
        assert_eq!(apply_deviations(dec!(1000), &opts, dec!(5000)), dec!(1100));
    }

    #[test]
    fn test_other_decrease() {
        let opts = DeviationOptions::other(dec!(-25));
        assert_eq!(apply_deviations(dec!(1000), &opts, dec!(5000)), dec!(750));
    }

    #[test]
    fn test_other_minus_hundred_zeroes_amount() {
        let opts = DeviationOptions::other(dec!(-100));
        assert_eq!(apply_deviations(dec!(1000), &opts, dec!(5000)), Decimal::ZERO);
    }

    #[test]
    fn test_negative_running_amount_floored() {
        let opts = DeviationOptions::other(dec!(-150));
        assert_eq!(apply_deviations(dec!(1000), &opts, dec!(5000)), Decimal::ZERO);
    }

    #[test]
    fn test_huge_amounts_saturate_instead_of_overflowing() {
        let opts = DeviationOptions {
            high_income: true,
            ..DeviationOptions::other(dec!(1000))
        };
        assert_eq!(apply_deviations(Decimal::MAX, &opts, Decimal::MAX), Decimal::MAX);

        let opts = DeviationOptions::other(Decimal::MIN);
        assert_eq!(apply_deviations(Decimal::MAX, &opts, dec!(5000)), Decimal::ZERO);
    }

    #[test]
    fn test_deviations_compound_in_order() {
        let opts = DeviationOptions {
            low_income: false,
            high_income: true,
            parenting_time_overnights: 103,
            other_percentage: dec!(10),
        };
        let outcome =
            apply_deviations_detailed(dec!(1000), &opts, dec!(50000), &GuidelineConfig::default());

        let kinds: Vec<DeviationKind> = outcome.applied.iter().map(|d| d.kind).collect();
        assert_eq!(
            kinds,
            vec![
                DeviationKind::HighIncome,
                DeviationKind::ParentingTime,
                DeviationKind::Other
            ]
        );
        // 1000 * 1.10 * 0.98 * 1.10
        assert_eq!(outcome.final_amount, dec!(1185.8));
        assert_eq!(outcome.applied[1].amount_before, dec!(1100));
        assert_eq!(outcome.applied[1].amount_after, dec!(1078));
    }

    #[test]
    fn test_detailed_outcome_empty_when_nothing_applies() {
        let outcome =
            apply_deviations_detailed(dec!(500), &options(), dec!(5000), &GuidelineConfig::default());
        assert!(outcome.applied.is_empty());
        assert_eq!(outcome.starting_amount, dec!(500));
        assert_eq!(outcome.final_amount, dec!(500));
    }

    #[test]
    fn test_custom_config_changes_surcharge() {
        let mut config = GuidelineConfig::default();
        config.high_income.multiplier = dec!(1.25);
        let opts = DeviationOptions {
            high_income: true,
            ..options()
        };
        assert_eq!(
            apply_deviations_with_config(dec!(1000), &opts, dec!(45000), &config),
            dec!(1250)
        );
    }
}
