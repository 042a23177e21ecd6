//! The 2025 Georgia Basic Child Support Obligation schedule.
//!
//! Monthly obligations by combined adjusted monthly income, in $50 steps.
//! Rows below $2,300 list no figures for five or six children; those cells
//! are stored as zero and resolved by [`BracketEntry::obligation`].

use rust_decimal::Decimal;
use serde::Serialize;

/// Largest number of children the schedule covers.
pub const MAX_CHILDREN: u32 = 6;

/// Combined income the schedule starts at.
pub const MINIMUM_INCOME: u32 = 800;

/// Combined income the schedule stops at.
pub const MAXIMUM_INCOME: u32 = 40_000;

/// Width of one income bracket.
pub const BRACKET_WIDTH: u32 = 50;

/// One row of the BCSO schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BracketEntry {
    /// Combined adjusted monthly income for this row (a multiple of 50).
    pub income: u32,
    /// Obligation for 1 through 6 children, in whole dollars.
    /// Zero marks a cell the schedule leaves blank.
    pub amounts: [u32; 6],
}

impl BracketEntry {
    const fn new(income: u32, amounts: [u32; 6]) -> Self {
        Self { income, amounts }
    }

    /// Returns the tabulated cell for `children`, or `None` when the count is
    /// outside 1..=6 or the cell is blank.
    pub fn tabulated(&self, children: u32) -> Option<Decimal> {
        if !(1..=MAX_CHILDREN).contains(&children) {
            return None;
        }
        match self.amounts[(children - 1) as usize] {
            0 => None,
            amount => Some(Decimal::from(amount)),
        }
    }

    /// Returns the monthly obligation for `children`.
    ///
    /// A blank cell takes the figure of the largest smaller family size that
    /// is tabulated, so a larger family never owes less than a smaller one.
    /// Counts outside 1..=6 yield zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use child_support_engine::schedule::BCSO_TABLE;
    /// use rust_decimal_macros::dec;
    ///
    /// let floor = &BCSO_TABLE[0];
    /// assert_eq!(floor.obligation(1), dec!(170));
    /// assert_eq!(floor.obligation(5), dec!(350));
    /// assert_eq!(floor.obligation(7), dec!(0));
    /// ```
    pub fn obligation(&self, children: u32) -> Decimal {
        if !(1..=MAX_CHILDREN).contains(&children) {
            return Decimal::ZERO;
        }
        (1..=children)
            .rev()
            .find_map(|n| self.tabulated(n))
            .unwrap_or(Decimal::ZERO)
    }
}

/// The BCSO schedule, sorted by ascending income.
pub static BCSO_TABLE: &[BracketEntry] = &[
    // Low incomes ($800 - $1,000)
    BracketEntry::new(800, [170, 260, 313, 350, 0, 0]),
    BracketEntry::new(850, [180, 275, 332, 371, 0, 0]),
    BracketEntry::new(900, [191, 291, 351, 392, 0, 0]),
    BracketEntry::new(950, [201, 307, 370, 413, 0, 0]),
    BracketEntry::new(1000, [212, 323, 389, 434, 0, 0]),
    // Mid-range incomes ($2,050 - $2,250)
    BracketEntry::new(2050, [435, 633, 732, 818, 0, 0]),
    BracketEntry::new(2100, [446, 649, 750, 839, 0, 0]),
    BracketEntry::new(2150, [457, 665, 768, 860, 0, 0]),
    BracketEntry::new(2200, [468, 681, 786, 881, 0, 0]),
    BracketEntry::new(2250, [479, 697, 804, 902, 0, 0]),
    // Higher incomes ($10,050 - $10,250)
    BracketEntry::new(10050, [1078, 1570, 1813, 2029, 2229, 2421]),
    BracketEntry::new(10100, [1083, 1577, 1820, 2036, 2237, 2429]),
    BracketEntry::new(10150, [1089, 1584, 1827, 2043, 2244, 2437]),
    BracketEntry::new(10200, [1094, 1591, 1834, 2050, 2252, 2445]),
    BracketEntry::new(10250, [1099, 1598, 1841, 2057, 2259, 2452]),
    // High incomes ($20,400 - $20,600)
    BracketEntry::new(20400, [2079, 3038, 3518, 3930, 4323, 4699]),
    BracketEntry::new(20450, [2084, 3045, 3525, 3937, 4331, 4707]),
    BracketEntry::new(20500, [2089, 3052, 3532, 3944, 4338, 4715]),
    BracketEntry::new(20550, [2094, 3059, 3539, 3951, 4346, 4723]),
    BracketEntry::new(20600, [2099, 3066, 3546, 3958, 4353, 4731]),
    // Maximum
    BracketEntry::new(40000, [3378, 5041, 5928, 6627, 7290, 7923]),
];
