//! BCSO schedule lookup.
//!
//! Combined income is rounded to the nearest $50 (half up) and matched to the
//! highest row at or below it. Incomes above the last row reuse it; positive
//! incomes below the first row fall back to it.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::Serialize;
use tracing::{debug, warn};

use super::table::{BCSO_TABLE, BracketEntry, MAX_CHILDREN};

/// The outcome of a schedule lookup with diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BcsoLookup {
    /// The monthly obligation found, zero when no row applies.
    pub amount: Decimal,
    /// The income after rounding to the nearest $50.
    pub rounded_income: Decimal,
    /// The income of the row used, if any.
    pub bracket_income: Option<u32>,
    /// True when the income was below the first row and the first row was
    /// used in its place.
    pub used_minimum_bracket: bool,
}

impl BcsoLookup {
    fn none(rounded_income: Decimal) -> Self {
        Self {
            amount: Decimal::ZERO,
            rounded_income,
            bracket_income: None,
            used_minimum_bracket: false,
        }
    }
}

/// Rounds an income to the nearest multiple of $50, halves rounding up.
///
/// # Examples
///
/// ```
/// use child_support_engine::schedule::round_to_bracket;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(round_to_bracket(dec!(825)), dec!(850));
/// assert_eq!(round_to_bracket(dec!(824.99)), dec!(800));
/// assert_eq!(round_to_bracket(dec!(5000)), dec!(5000));
/// ```
pub fn round_to_bracket(income: Decimal) -> Decimal {
    let width = dec!(50);
    (income / width)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .saturating_mul(width)
}

/// A read-only view over an ordered BCSO schedule.
#[derive(Debug, Clone, Copy)]
pub struct BcsoSchedule<'a> {
    entries: &'a [BracketEntry],
}

impl BcsoSchedule<'static> {
    /// The compiled-in 2025 Georgia schedule.
    pub fn georgia_2025() -> Self {
        Self::new(BCSO_TABLE)
    }
}

impl<'a> BcsoSchedule<'a> {
    /// Wraps a schedule. Entries must be sorted by ascending income.
    pub fn new(entries: &'a [BracketEntry]) -> Self {
        Self { entries }
    }

    /// Returns the schedule rows.
    pub fn entries(&self) -> &'a [BracketEntry] {
        self.entries
    }

    /// Finds the row for an income without the very-low-income fallback.
    ///
    /// Returns the exact row for the rounded income if there is one,
    /// otherwise the highest row below it, or `None` when the rounded income
    /// is below every row.
    pub fn find_bracket(&self, income: Decimal) -> Option<&'a BracketEntry> {
        let rounded = round_to_bracket(income);
        self.entries
            .iter()
            .rfind(|entry| Decimal::from(entry.income) <= rounded)
    }

    /// Looks up the obligation for an income and number of children,
    /// reporting which row was used.
    pub fn lookup_with_fallback(&self, income: Decimal, children: u32) -> BcsoLookup {
        let rounded_income = round_to_bracket(income);

        if !(1..=MAX_CHILDREN).contains(&children) {
            debug!(children, "child count outside schedule, obligation is zero");
            return BcsoLookup::none(rounded_income);
        }
        if income <= Decimal::ZERO {
            return BcsoLookup::none(rounded_income);
        }

        if let Some(entry) = self.find_bracket(income) {
            debug!(rounded = %rounded_income, bracket = entry.income, children, "bracket selected");
            return BcsoLookup {
                amount: entry.obligation(children),
                rounded_income,
                bracket_income: Some(entry.income),
                used_minimum_bracket: false,
            };
        }

        match self.entries.first() {
            Some(floor) => {
                warn!(
                    income = %income,
                    floor = floor.income,
                    "combined income below schedule minimum, using minimum bracket"
                );
                BcsoLookup {
                    amount: floor.obligation(children),
                    rounded_income,
                    bracket_income: Some(floor.income),
                    used_minimum_bracket: true,
                }
            }
            None => BcsoLookup::none(rounded_income),
        }
    }

    /// Looks up the obligation for an income and number of children.
    pub fn lookup(&self, income: Decimal, children: u32) -> Decimal {
        self.lookup_with_fallback(income, children).amount
    }
}

/// Finds the schedule row for an income without the very-low-income fallback.
///
/// # Examples
///
/// ```
/// use child_support_engine::schedule::find_bracket;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(find_bracket(dec!(825)).unwrap().income, 850);
/// assert!(find_bracket(dec!(700)).is_none());
/// ```
pub fn find_bracket(income: Decimal) -> Option<&'static BracketEntry> {
    BcsoSchedule::georgia_2025().find_bracket(income)
}

/// Looks up the Basic Child Support Obligation for a combined income.
///
/// Returns zero when `children` is outside 1..=6 or the income is zero or
/// less. Any positive income below the first row uses the first row.
///
/// # Examples
///
/// ```
/// use child_support_engine::schedule::lookup_bcso;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(lookup_bcso(dec!(800), 1), dec!(170));
/// assert_eq!(lookup_bcso(dec!(2050), 2), dec!(633));
/// assert_eq!(lookup_bcso(dec!(700), 1), dec!(170));
/// assert_eq!(lookup_bcso(dec!(3000), 7), dec!(0));
/// ```
pub fn lookup_bcso(income: Decimal, children: u32) -> Decimal {
    BcsoSchedule::georgia_2025().lookup(income, children)
}

/// Looks up the Basic Child Support Obligation and reports whether the
/// minimum bracket stood in for a below-schedule income.
pub fn lookup_bcso_with_fallback(income: Decimal, children: u32) -> BcsoLookup {
    BcsoSchedule::georgia_2025().lookup_with_fallback(income, children)
}
