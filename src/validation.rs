//! Input validation for callers at the form boundary.
//!
//! The calculation itself accepts anything and degrades to defined defaults.
//! These checks let a caller reject input the guideline worksheet would not
//! accept before running a calculation. Nothing in [`crate::calculation`]
//! calls them.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::{EngineError, EngineResult};
use crate::models::{CalculationInput, CustodyArrangement, ParentInput};
use crate::schedule::{MAX_CHILDREN, MAXIMUM_INCOME, MINIMUM_INCOME};

/// Most overnights a custom arrangement may claim.
pub const MAX_ANNUAL_OVERNIGHTS: u32 = 365;

/// Lowest accepted "other" deviation percentage.
pub const MIN_OTHER_PERCENTAGE: Decimal = dec!(-100);

/// Highest accepted "other" deviation percentage.
pub const MAX_OTHER_PERCENTAGE: Decimal = dec!(1000);

/// Returns true if a combined income falls within the tabulated schedule.
///
/// # Examples
///
/// ```
/// use child_support_engine::validation::is_valid_income;
/// use rust_decimal_macros::dec;
///
/// assert!(is_valid_income(dec!(800)));
/// assert!(!is_valid_income(dec!(700)));
/// assert!(!is_valid_income(dec!(41000)));
/// ```
pub fn is_valid_income(income: Decimal) -> bool {
    income >= Decimal::from(MINIMUM_INCOME) && income <= Decimal::from(MAXIMUM_INCOME)
}

/// Returns true if the schedule covers this number of children.
pub fn is_valid_children(children: u32) -> bool {
    (1..=MAX_CHILDREN).contains(&children)
}

/// Validates a calculation input against the worksheet's accepted ranges.
///
/// Rejects negative money amounts, child counts outside 1..=6, custom
/// overnights above 365, an "other" deviation outside -100..=1000 percent,
/// and both parents claiming to be custodial.
///
/// # Examples
///
/// ```
/// use child_support_engine::models::{CalculationInput, CustodyArrangement};
/// use child_support_engine::validation::validate_input;
///
/// let mut input = CalculationInput::default();
/// assert!(validate_input(&input).is_ok());
///
/// input.parent_b.custody = CustodyArrangement::Custodial;
/// assert!(validate_input(&input).is_err());
/// ```
pub fn validate_input(input: &CalculationInput) -> EngineResult<()> {
    validate_parent("parent_a", &input.parent_a)?;
    validate_parent("parent_b", &input.parent_b)?;

    if !is_valid_children(input.number_of_children) {
        return Err(invalid(
            "number_of_children",
            format!(
                "must be between 1 and {}, got {}",
                MAX_CHILDREN, input.number_of_children
            ),
        ));
    }

    non_negative("expenses.health_insurance", input.expenses.health_insurance)?;
    non_negative("expenses.child_care", input.expenses.child_care)?;

    let other = input.deviations.other_percentage;
    if other < MIN_OTHER_PERCENTAGE || other > MAX_OTHER_PERCENTAGE {
        return Err(invalid(
            "deviations.other_percentage",
            format!(
                "must be between {} and {}, got {}",
                MIN_OTHER_PERCENTAGE, MAX_OTHER_PERCENTAGE, other
            ),
        ));
    }

    if input.parent_a.custody.is_custodial() && input.parent_b.custody.is_custodial() {
        return Err(invalid(
            "custody",
            "only one parent can be the custodial parent".to_string(),
        ));
    }

    Ok(())
}

impl CalculationInput {
    /// Validates this input. See [`validate_input`].
    pub fn validate(&self) -> EngineResult<()> {
        validate_input(self)
    }
}

fn validate_parent(prefix: &str, parent: &ParentInput) -> EngineResult<()> {
    non_negative(
        &format!("{}.gross_monthly_income", prefix),
        parent.gross_monthly_income,
    )?;
    non_negative(
        &format!("{}.deductions.self_employment_tax", prefix),
        parent.deductions.self_employment_tax,
    )?;
    non_negative(
        &format!("{}.deductions.preexisting_support", prefix),
        parent.deductions.preexisting_support,
    )?;

    if let CustodyArrangement::Custom(overnights) = parent.custody
        && overnights > MAX_ANNUAL_OVERNIGHTS
    {
        return Err(invalid(
            &format!("{}.custody", prefix),
            format!(
                "custom overnights must be between 0 and {}, got {}",
                MAX_ANNUAL_OVERNIGHTS, overnights
            ),
        ));
    }
    Ok(())
}

fn non_negative(field: &str, value: Decimal) -> EngineResult<()> {
    if value < Decimal::ZERO {
        return Err(invalid(field, format!("cannot be negative, got {}", value)));
    }
    Ok(())
}

fn invalid(field: &str, message: String) -> EngineError {
    EngineError::InvalidInput {
        field: field.to_string(),
        message,
    }
}
