//! Parent identity, income and deduction models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::CustodyArrangement;

/// Identifies one of the two parents in a calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParentId {
    /// Parent A (the first parent entered).
    A,
    /// Parent B (the second parent entered).
    B,
}

impl ParentId {
    /// Returns the other parent.
    ///
    /// # Examples
    ///
    /// ```
    /// use child_support_engine::models::ParentId;
    ///
    /// assert_eq!(ParentId::A.other(), ParentId::B);
    /// assert_eq!(ParentId::B.other(), ParentId::A);
    /// ```
    pub fn other(self) -> ParentId {
        match self {
            ParentId::A => ParentId::B,
            ParentId::B => ParentId::A,
        }
    }

    /// Returns the single-letter label used in results ("A" or "B").
    pub fn label(self) -> &'static str {
        match self {
            ParentId::A => "A",
            ParentId::B => "B",
        }
    }
}

/// Deductions subtracted from a parent's gross monthly income.
///
/// Both amounts are expected to be non-negative. They only reduce gross
/// income and are not carried beyond a single calculation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deductions {
    /// One half of self-employment tax paid, per month.
    #[serde(default)]
    pub self_employment_tax: Decimal,
    /// Child support already paid under a pre-existing order, per month.
    #[serde(default)]
    pub preexisting_support: Decimal,
}

impl Deductions {
    /// Returns the sum of all deductions.
    pub fn total(&self) -> Decimal {
        self.self_employment_tax.saturating_add(self.preexisting_support)
    }
}

/// Everything the engine needs to know about one parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentInput {
    /// Optional display name. Passed through to the result untouched.
    #[serde(default)]
    pub name: Option<String>,
    /// Gross monthly income before deductions.
    pub gross_monthly_income: Decimal,
    /// Deductions applied to the gross income.
    #[serde(default)]
    pub deductions: Deductions,
    /// The parent's custody or visitation arrangement.
    pub custody: CustodyArrangement,
}

impl ParentInput {
    /// Creates a parent with the given income and custody and no deductions.
    ///
    /// # Examples
    ///
    /// ```
    /// use child_support_engine::models::{CustodyArrangement, ParentInput};
    /// use rust_decimal_macros::dec;
    ///
    /// let parent = ParentInput::with_income(dec!(4200), CustodyArrangement::Standard);
    /// assert_eq!(parent.gross_monthly_income, dec!(4200));
    /// assert!(parent.name.is_none());
    /// ```
    pub fn with_income(gross_monthly_income: Decimal, custody: CustodyArrangement) -> Self {
        Self {
            name: None,
            gross_monthly_income,
            deductions: Deductions::default(),
            custody,
        }
    }

    /// Sets the display name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the deductions.
    pub fn with_deductions(mut self, deductions: Deductions) -> Self {
        self.deductions = deductions;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parent_id_other_is_symmetric() {
        assert_eq!(ParentId::A.other().other(), ParentId::A);
        assert_eq!(ParentId::B.other(), ParentId::A);
    }

    #[test]
    fn test_parent_id_labels() {
        assert_eq!(ParentId::A.label(), "A");
        assert_eq!(ParentId::B.label(), "B");
    }

    #[test]
    fn test_deductions_total() {
        let deductions = Deductions {
            self_employment_tax: dec!(100),
            preexisting_support: dec!(200),
        };
        assert_eq!(deductions.total(), dec!(300));
        assert_eq!(Deductions::default().total(), Decimal::ZERO);
    }

    #[test]
    fn test_deserialize_parent_with_defaults() {
        let json = r#"{
            "gross_monthly_income": "3000",
            "custody": "custodial"
        }"#;

        let parent: ParentInput = serde_json::from_str(json).unwrap();
        assert_eq!(parent.gross_monthly_income, dec!(3000));
        assert_eq!(parent.deductions, Deductions::default());
        assert_eq!(parent.custody, CustodyArrangement::Custodial);
        assert!(parent.name.is_none());
    }

    #[test]
    fn test_deserialize_parent_with_deductions_and_name() {
        let json = r#"{
            "name": "Jordan",
            "gross_monthly_income": "5000.00",
            "deductions": {
                "self_employment_tax": "250.50",
                "preexisting_support": "400"
            },
            "custody": { "custom": 120 }
        }"#;

        let parent: ParentInput = serde_json::from_str(json).unwrap();
        assert_eq!(parent.name.as_deref(), Some("Jordan"));
        assert_eq!(parent.deductions.self_employment_tax, dec!(250.50));
        assert_eq!(parent.deductions.preexisting_support, dec!(400));
        assert_eq!(parent.custody, CustodyArrangement::Custom(120));
    }

    #[test]
    fn test_builder_helpers() {
        let parent = ParentInput::with_income(dec!(1000), CustodyArrangement::Minimal)
            .named("Sam")
            .with_deductions(Deductions {
                self_employment_tax: dec!(10),
                preexisting_support: Decimal::ZERO,
            });

        assert_eq!(parent.name.as_deref(), Some("Sam"));
        assert_eq!(parent.deductions.total(), dec!(10));
    }
}
