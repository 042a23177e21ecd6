//! Calculation logic for the child support engine.
//!
//! This module contains every stage of the guideline worksheet: income
//! adjustment, pro-rata shares, expense allocation, custody resolution, the
//! deviation pipeline and net settlement, plus the orchestrator that runs
//! them in order.

mod common;
mod custody_resolution;
mod deviations;
mod engine;
mod expense_allocation;
mod income_adjustment;
mod pro_rata;
mod settlement;

pub use common::round_currency;
pub use custody_resolution::resolve_custody;
pub use deviations::{
    AppliedDeviation, DeviationKind, DeviationOutcome, apply_deviations, apply_deviations_detailed,
    apply_deviations_with_config, low_income_reduction, parenting_time_reduction,
};
pub use engine::{
    WARN_CHILDREN_OUT_OF_RANGE, WARN_CUSTODY_FALLBACK, WARN_INCOME_ABOVE_SCHEDULE,
    WARN_MINIMUM_BRACKET, calculate_child_support, calculate_child_support_with_config,
};
pub use expense_allocation::{ExpenseAllocation, allocate_expenses, apply_expenses};
pub use income_adjustment::adjust_income;
pub use pro_rata::{ProRataShares, calculate_pro_rata};
pub use settlement::{Settlement, settle};
