//! Custody resolution.
//!
//! Decides which parent is custodial and how many annual overnights the
//! other parent has, which feeds the parenting time deviation.

use tracing::warn;

use crate::models::{CustodyArrangement, CustodyResolution, ParentId};

/// Resolves the custodial parent and the non-custodial parent's overnights.
///
/// When exactly one parent is marked custodial, the other parent's
/// arrangement supplies the overnights. When neither or both are marked
/// custodial, Parent A is assumed custodial and Parent B's arrangement is
/// used; a custodial arrangement on that side contributes zero overnights.
///
/// # Examples
///
/// ```
/// use child_support_engine::calculation::resolve_custody;
/// use child_support_engine::models::{CustodyArrangement, ParentId};
///
/// let resolution = resolve_custody(CustodyArrangement::Extended, CustodyArrangement::Custodial);
/// assert_eq!(resolution.custodial_parent, ParentId::B);
/// assert_eq!(resolution.annual_overnights, 110);
/// assert!(!resolution.used_fallback);
/// ```
pub fn resolve_custody(
    custody_a: CustodyArrangement,
    custody_b: CustodyArrangement,
) -> CustodyResolution {
    let (custodial_parent, visiting, used_fallback) =
        match (custody_a.is_custodial(), custody_b.is_custodial()) {
            (true, false) => (ParentId::A, custody_b, false),
            (false, true) => (ParentId::B, custody_a, false),
            (true, true) | (false, false) => {
                warn!(
                    ?custody_a,
                    ?custody_b,
                    "custodial parent ambiguous, treating Parent A as custodial"
                );
                (ParentId::A, custody_b, true)
            }
        };

    CustodyResolution {
        custodial_parent,
        annual_overnights: visiting.visitation_overnights().unwrap_or(0),
        used_fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_a_custodial_uses_b_schedule() {
        let resolution = resolve_custody(CustodyArrangement::Custodial, CustodyArrangement::Standard);
        assert_eq!(resolution.custodial_parent, ParentId::A);
        assert_eq!(resolution.annual_overnights, 80);
        assert!(!resolution.used_fallback);
    }

    #[test]
    fn test_parent_b_custodial_uses_a_schedule() {
        let resolution = resolve_custody(CustodyArrangement::Shared, CustodyArrangement::Custodial);
        assert_eq!(resolution.custodial_parent, ParentId::B);
        assert_eq!(resolution.noncustodial_parent(), ParentId::A);
        assert_eq!(resolution.annual_overnights, 146);
    }

    #[test]
    fn test_custom_overnights_pass_through() {
        let resolution =
            resolve_custody(CustodyArrangement::Custodial, CustodyArrangement::Custom(183));
        assert_eq!(resolution.annual_overnights, 183);
    }

    #[test]
    fn test_neither_custodial_falls_back_to_parent_a() {
        let resolution = resolve_custody(CustodyArrangement::Shared, CustodyArrangement::Minimal);
        assert_eq!(resolution.custodial_parent, ParentId::A);
        assert_eq!(resolution.annual_overnights, 52);
        assert!(resolution.used_fallback);
    }

    #[test]
    fn test_both_custodial_falls_back_with_no_overnights() {
        let resolution =
            resolve_custody(CustodyArrangement::Custodial, CustodyArrangement::Custodial);
        assert_eq!(resolution.custodial_parent, ParentId::A);
        assert_eq!(resolution.annual_overnights, 0);
        assert!(resolution.used_fallback);
    }

    #[test]
    fn test_no_visitation_means_zero_overnights() {
        let resolution =
            resolve_custody(CustodyArrangement::Custodial, CustodyArrangement::NoVisitation);
        assert_eq!(resolution.annual_overnights, 0);
        assert!(!resolution.used_fallback);
    }
}
