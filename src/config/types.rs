//! Guideline configuration types.
//!
//! These structures hold the deviation constants of the guidelines. They are
//! deserialized from YAML by [`super::ConfigLoader`] or built from the
//! statutory defaults with [`GuidelineConfig::default`].

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Metadata identifying the guidelines a configuration implements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidelineMetadata {
    /// The jurisdiction (e.g., "Georgia").
    pub jurisdiction: String,
    /// The governing statute.
    pub statute: String,
    /// The schedule year.
    pub schedule_year: u16,
}

/// Low-income sliding scale.
///
/// Within `[lower_bound, upper_bound]` the reduction slides linearly from
/// zero at the upper bound to `max_reduction` at the lower bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LowIncomeDeviation {
    /// Combined income at which the full reduction applies.
    pub lower_bound: Decimal,
    /// Combined income at which the reduction reaches zero.
    pub upper_bound: Decimal,
    /// The largest reduction, as a fraction.
    pub max_reduction: Decimal,
}

/// High-income surcharge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighIncomeDeviation {
    /// Combined income the surcharge applies above (exclusive).
    pub threshold: Decimal,
    /// Multiplier applied to the running amount.
    pub multiplier: Decimal,
}

/// Parenting time credit.
///
/// The reduction grows by `reduction_per_block` for every `block_overnights`
/// beyond `threshold_overnights` (prorated, not stepped), capped at
/// `max_reduction`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentingTimeDeviation {
    /// Overnights at or below which no credit applies.
    pub threshold_overnights: u32,
    /// Overnights per block.
    pub block_overnights: u32,
    /// Reduction per block, as a fraction.
    pub reduction_per_block: Decimal,
    /// The largest reduction, as a fraction.
    pub max_reduction: Decimal,
}

/// Net settlement between the parents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementRules {
    /// Differences strictly below this amount result in no payment.
    pub tolerance: Decimal,
}

/// The complete guideline configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidelineConfig {
    /// Guideline metadata.
    pub guidelines: GuidelineMetadata,
    /// Low-income sliding scale.
    pub low_income: LowIncomeDeviation,
    /// High-income surcharge.
    pub high_income: HighIncomeDeviation,
    /// Parenting time credit.
    pub parenting_time: ParentingTimeDeviation,
    /// Net settlement rules.
    pub settlement: SettlementRules,
}

impl Default for GuidelineConfig {
    /// The 2025 Georgia constants.
    fn default() -> Self {
        Self {
            guidelines: GuidelineMetadata {
                jurisdiction: "Georgia".to_string(),
                statute: "O.C.G.A. § 19-6-15".to_string(),
                schedule_year: 2025,
            },
            low_income: LowIncomeDeviation {
                lower_bound: dec!(1550),
                upper_bound: dec!(3950),
                max_reduction: dec!(0.25),
            },
            high_income: HighIncomeDeviation {
                threshold: dec!(40000),
                multiplier: dec!(1.10),
            },
            parenting_time: ParentingTimeDeviation {
                threshold_overnights: 73,
                block_overnights: 30,
                reduction_per_block: dec!(0.02),
                max_reduction: dec!(0.5),
            },
            settlement: SettlementRules { tolerance: dec!(1) },
        }
    }
}

impl GuidelineConfig {
    /// Checks that the configured values are internally consistent.
    ///
    /// # Example
    ///
    /// ```
    /// use child_support_engine::config::GuidelineConfig;
    ///
    /// assert!(GuidelineConfig::default().validate().is_ok());
    /// ```
    pub fn validate(&self) -> EngineResult<()> {
        let low = &self.low_income;
        if low.lower_bound >= low.upper_bound {
            return Err(invalid(format!(
                "low_income.lower_bound ({}) must be below upper_bound ({})",
                low.lower_bound, low.upper_bound
            )));
        }
        check_fraction("low_income.max_reduction", low.max_reduction)?;

        if self.high_income.multiplier < Decimal::ZERO {
            return Err(invalid(format!(
                "high_income.multiplier ({}) cannot be negative",
                self.high_income.multiplier
            )));
        }

        let time = &self.parenting_time;
        if time.block_overnights == 0 {
            return Err(invalid("parenting_time.block_overnights must be positive".to_string()));
        }
        check_fraction("parenting_time.reduction_per_block", time.reduction_per_block)?;
        check_fraction("parenting_time.max_reduction", time.max_reduction)?;

        if self.settlement.tolerance < Decimal::ZERO {
            return Err(invalid(format!(
                "settlement.tolerance ({}) cannot be negative",
                self.settlement.tolerance
            )));
        }

        Ok(())
    }
}

fn check_fraction(field: &str, value: Decimal) -> EngineResult<()> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(invalid(format!("{} ({}) must be between 0 and 1", field, value)));
    }
    Ok(())
}

fn invalid(message: String) -> EngineError {
    EngineError::InvalidConfig { message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let config = GuidelineConfig::default();
        assert_eq!(config.low_income.lower_bound, dec!(1550));
        assert_eq!(config.low_income.upper_bound, dec!(3950));
        assert_eq!(config.high_income.multiplier, dec!(1.1));
        assert_eq!(config.parenting_time.threshold_overnights, 73);
        assert_eq!(config.settlement.tolerance, dec!(1));
    }

    #[test]
    fn test_empty_low_income_band_rejected() {
        let mut config = GuidelineConfig::default();
        config.low_income.lower_bound = dec!(4000);

        match config.validate() {
            Err(EngineError::InvalidConfig { message }) => {
                assert!(message.contains("low_income.lower_bound"));
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_reduction_above_one_rejected() {
        let mut config = GuidelineConfig::default();
        config.parenting_time.max_reduction = dec!(1.5);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_block_rejected() {
        let mut config = GuidelineConfig::default();
        config.parenting_time.block_overnights = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_negative_tolerance_rejected() {
        let mut config = GuidelineConfig::default();
        config.settlement.tolerance = dec!(-1);
        assert!(config.validate().is_err());
    }
}
