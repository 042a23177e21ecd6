//! Deviation request and option models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The deviations a caller asks for.
///
/// This is the caller-facing half of [`DeviationOptions`]: the parenting time
/// component is not entered directly but derived from the custody
/// arrangements of both parents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviationRequest {
    /// Apply the low-income sliding scale reduction.
    #[serde(default)]
    pub low_income: bool,
    /// Apply the high-income surcharge.
    #[serde(default)]
    pub high_income: bool,
    /// Any other court-approved deviation, as a signed percentage
    /// (for example `-15` or `10`). Accepted range is -100 to 1000.
    #[serde(default)]
    pub other_percentage: Decimal,
}

/// The full set of options consumed by the deviation pipeline.
///
/// # Example
///
/// ```
/// use child_support_engine::models::{DeviationOptions, DeviationRequest};
/// use rust_decimal_macros::dec;
///
/// let request = DeviationRequest {
///     low_income: false,
///     high_income: true,
///     other_percentage: dec!(5),
/// };
/// let options = DeviationOptions::from_request(&request, 110);
/// assert!(options.high_income);
/// assert_eq!(options.parenting_time_overnights, 110);
/// assert_eq!(options.other_percentage, dec!(5));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviationOptions {
    /// Apply the low-income sliding scale reduction.
    pub low_income: bool,
    /// Apply the high-income surcharge.
    pub high_income: bool,
    /// Annual overnights of the non-custodial parent.
    pub parenting_time_overnights: u32,
    /// Any other court-approved deviation as a signed percentage.
    pub other_percentage: Decimal,
}

impl DeviationOptions {
    /// Combines a caller's request with the resolved annual overnights.
    pub fn from_request(request: &DeviationRequest, parenting_time_overnights: u32) -> Self {
        Self {
            low_income: request.low_income,
            high_income: request.high_income,
            parenting_time_overnights,
            other_percentage: request.other_percentage,
        }
    }

    /// Options with only the "other" percentage set.
    pub fn other(other_percentage: Decimal) -> Self {
        Self {
            other_percentage,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_requests_nothing() {
        let request = DeviationRequest::default();
        assert!(!request.low_income);
        assert!(!request.high_income);
        assert_eq!(request.other_percentage, Decimal::ZERO);
    }

    #[test]
    fn test_other_sets_only_percentage() {
        let options = DeviationOptions::other(dec!(-20));
        assert_eq!(options.other_percentage, dec!(-20));
        assert_eq!(options.parenting_time_overnights, 0);
        assert!(!options.low_income && !options.high_income);
    }

    #[test]
    fn test_deserialize_request() {
        let json = r#"{"low_income": true, "other_percentage": "-12.5"}"#;
        let request: DeviationRequest = serde_json::from_str(json).unwrap();
        assert!(request.low_income);
        assert!(!request.high_income);
        assert_eq!(request.other_percentage, dec!(-12.5));
    }
}
