//! Calculation result models for the child support engine.
//!
//! This module contains the [`CalculationResult`] type, which captures every
//! intermediate figure of the guideline worksheet along with an audit trace
//! explaining how each figure was reached.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{CustodyResolution, ParentId};

/// Which parent, if any, pays the net support amount.
///
/// # Example
///
/// ```
/// use child_support_engine::models::{ParentId, Payer};
///
/// assert_eq!(Payer::B.paying_parent(), Some(ParentId::B));
/// assert_eq!(Payer::None.paying_parent(), None);
/// assert_eq!(serde_json::to_string(&Payer::None).unwrap(), "\"None\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Payer {
    /// Parent A pays Parent B.
    A,
    /// Parent B pays Parent A.
    B,
    /// The obligations offset within tolerance; nobody pays.
    None,
}

impl Payer {
    /// Returns the paying parent, or `None` when no payment is due.
    pub fn paying_parent(self) -> Option<ParentId> {
        match self {
            Payer::A => Some(ParentId::A),
            Payer::B => Some(ParentId::B),
            Payer::None => None,
        }
    }

    /// Returns the receiving parent, or `None` when no payment is due.
    pub fn receiving_parent(self) -> Option<ParentId> {
        self.paying_parent().map(ParentId::other)
    }
}

impl From<ParentId> for Payer {
    fn from(parent: ParentId) -> Self {
        match parent {
            ParentId::A => Payer::A,
            ParentId::B => Payer::B,
        }
    }
}

/// A single step in the audit trace recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// Stable identifier of the worksheet rule applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings never change the computed amounts. They flag inputs the engine
/// absorbed into a fallback so the caller can surface them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level ("low", "medium" or "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

impl AuditTrace {
    /// Returns true if a warning with the given code was recorded.
    pub fn has_warning(&self, code: &str) -> bool {
        self.warnings.iter().any(|w| w.code == code)
    }

    /// Returns the step recorded for the given rule, if any.
    pub fn step(&self, rule_id: &str) -> Option<&AuditStep> {
        self.steps.iter().find(|s| s.rule_id == rule_id)
    }
}

/// The complete result of a child support calculation.
///
/// Every intermediate figure is kept so a renderer can show the full
/// worksheet. No rounding is applied; formatting is left to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Display name of Parent A, passed through from the input.
    pub parent_a_name: Option<String>,
    /// Display name of Parent B, passed through from the input.
    pub parent_b_name: Option<String>,
    /// Parent A's gross monthly income as entered.
    pub gross_income_a: Decimal,
    /// Parent B's gross monthly income as entered.
    pub gross_income_b: Decimal,
    /// Parent A's income after deductions, floored at zero.
    pub adjusted_income_a: Decimal,
    /// Parent B's income after deductions, floored at zero.
    pub adjusted_income_b: Decimal,
    /// Sum of both adjusted incomes.
    pub combined_income: Decimal,
    /// Parent A's fraction of combined income.
    pub pro_rata_a: Decimal,
    /// Parent B's fraction of combined income.
    pub pro_rata_b: Decimal,
    /// Basic Child Support Obligation from the schedule.
    pub bcso: Decimal,
    /// Parent A's share of the BCSO.
    pub basic_support_a: Decimal,
    /// Parent B's share of the BCSO.
    pub basic_support_b: Decimal,
    /// Parent A's share of shared expenses.
    pub expenses_a: Decimal,
    /// Parent B's share of shared expenses.
    pub expenses_b: Decimal,
    /// Parent A's basic support plus expenses, before deviations.
    pub presumptive_support_a: Decimal,
    /// Parent B's basic support plus expenses, before deviations.
    pub presumptive_support_b: Decimal,
    /// Parent A's obligation after deviations.
    pub final_support_a: Decimal,
    /// Parent B's obligation after deviations.
    pub final_support_b: Decimal,
    /// How custody was resolved for the parenting time deviation.
    pub custody: CustodyResolution,
    /// Which parent pays the net amount.
    pub payer: Payer,
    /// The net monthly amount paid, never negative.
    pub amount: Decimal,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

impl CalculationResult {
    /// Returns the parent receiving the net payment, if any.
    pub fn payee(&self) -> Option<ParentId> {
        self.payer.receiving_parent()
    }

    /// Returns the display name for a parent, falling back to
    /// "Parent A" / "Parent B" when no name was given.
    pub fn display_name(&self, parent: ParentId) -> String {
        let name = match parent {
            ParentId::A => self.parent_a_name.as_deref(),
            ParentId::B => self.parent_b_name.as_deref(),
        };
        match name {
            Some(name) if !name.trim().is_empty() => name.to_string(),
            _ => format!("Parent {}", parent.label()),
        }
    }
}
