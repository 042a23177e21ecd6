//! The Basic Child Support Obligation schedule and its lookup.
//!
//! The schedule is static data compiled into the crate. Lookups never fail:
//! unusable inputs resolve to a zero obligation.

mod lookup;
mod table;

pub use lookup::{
    BcsoLookup, BcsoSchedule, find_bracket, lookup_bcso, lookup_bcso_with_fallback,
    round_to_bracket,
};
pub use table::{
    BCSO_TABLE, BRACKET_WIDTH, BracketEntry, MAX_CHILDREN, MAXIMUM_INCOME, MINIMUM_INCOME,
};
