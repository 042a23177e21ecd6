//! Custody and visitation arrangement models.
//!
//! Each parent selects one [`CustodyArrangement`]. The non-custodial parent's
//! arrangement is translated into a fixed count of annual overnights, which
//! sizes the parenting time deviation.

use serde::{Deserialize, Serialize};

use super::ParentId;

/// Overnights per year for the "minimal" visitation schedule.
pub const MINIMAL_OVERNIGHTS: u32 = 52;
/// Overnights per year for the "standard" visitation schedule
/// (every other weekend, two weeks in summer and alternating holidays).
pub const STANDARD_OVERNIGHTS: u32 = 80;
/// Overnights per year for the "extended" visitation schedule.
pub const EXTENDED_OVERNIGHTS: u32 = 110;
/// Overnights per year for near 50/50 shared custody.
pub const SHARED_OVERNIGHTS: u32 = 146;

/// How much time a parent has with the children.
///
/// # Example
///
/// ```
/// use child_support_engine::models::CustodyArrangement;
///
/// assert_eq!(CustodyArrangement::Standard.visitation_overnights(), Some(80));
/// assert_eq!(CustodyArrangement::Custom(200).visitation_overnights(), Some(200));
/// assert_eq!(CustodyArrangement::Custodial.visitation_overnights(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CustodyArrangement {
    /// Primary physical custody of the children.
    Custodial,
    /// No overnight visits.
    #[serde(alias = "no_visitation")]
    NoVisitation,
    /// Occasional weekends, 52 overnights per year.
    Minimal,
    /// Standard visitation, 80 overnights per year.
    Standard,
    /// Extended visitation, 110 overnights per year.
    Extended,
    /// Near 50/50 custody, 146 overnights per year.
    Shared,
    /// An explicit number of overnights per year (0 to 365).
    Custom(u32),
}

impl CustodyArrangement {
    /// Returns true if this is the custodial parent's arrangement.
    pub fn is_custodial(self) -> bool {
        matches!(self, CustodyArrangement::Custodial)
    }

    /// Returns the annual overnights a non-custodial parent with this
    /// arrangement spends with the children.
    ///
    /// Returns `None` for [`CustodyArrangement::Custodial`], which has no
    /// visitation schedule of its own.
    pub fn visitation_overnights(self) -> Option<u32> {
        match self {
            CustodyArrangement::Custodial => None,
            CustodyArrangement::NoVisitation => Some(0),
            CustodyArrangement::Minimal => Some(MINIMAL_OVERNIGHTS),
            CustodyArrangement::Standard => Some(STANDARD_OVERNIGHTS),
            CustodyArrangement::Extended => Some(EXTENDED_OVERNIGHTS),
            CustodyArrangement::Shared => Some(SHARED_OVERNIGHTS),
            CustodyArrangement::Custom(overnights) => Some(overnights),
        }
    }
}

/// The outcome of deciding which parent is custodial and how many annual
/// overnights the other parent has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustodyResolution {
    /// The parent treated as custodial.
    pub custodial_parent: ParentId,
    /// Annual overnights of the non-custodial parent.
    pub annual_overnights: u32,
    /// True when neither or both parents were marked custodial and Parent A
    /// was assumed custodial.
    pub used_fallback: bool,
}

impl CustodyResolution {
    /// Returns the parent treated as non-custodial.
    pub fn noncustodial_parent(&self) -> ParentId {
        self.custodial_parent.other()
    }
}
