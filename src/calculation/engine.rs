//! The calculation orchestrator.
//!
//! Runs the guideline worksheet from top to bottom, recording an audit step
//! for every stage:
//!
//! 1. Resolve the custodial parent and parenting time overnights
//! 2. Adjust both incomes
//! 3. Combine incomes
//! 4. Compute pro-rata shares
//! 5. Look up the BCSO
//! 6. Split the BCSO into basic support
//! 7. Allocate shared expenses
//! 8. Sum presumptive support
//! 9. Apply deviations to each parent independently
//! 10. Settle the net payment

use rust_decimal::Decimal;
use serde_json::json;
use tracing::debug;

use crate::config::GuidelineConfig;
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, CalculationInput, CalculationResult, DeviationOptions,
};
use crate::schedule::{MAX_CHILDREN, MAXIMUM_INCOME, lookup_bcso_with_fallback};

use super::custody_resolution::resolve_custody;
use super::deviations::{DeviationOutcome, apply_deviations_detailed};
use super::expense_allocation::allocate_expenses;
use super::income_adjustment::adjust_income;
use super::pro_rata::calculate_pro_rata;
use super::settlement::settle;

/// Warning code when neither or both parents were marked custodial.
pub const WARN_CUSTODY_FALLBACK: &str = "CUSTODY_FALLBACK";
/// Warning code when a below-schedule income used the minimum bracket.
pub const WARN_MINIMUM_BRACKET: &str = "MINIMUM_BRACKET_USED";
/// Warning code when the child count is outside the schedule.
pub const WARN_CHILDREN_OUT_OF_RANGE: &str = "CHILDREN_OUT_OF_RANGE";
/// Warning code when combined income is above the last schedule row.
pub const WARN_INCOME_ABOVE_SCHEDULE: &str = "INCOME_ABOVE_SCHEDULE";

#[derive(Default)]
struct AuditRecorder {
    trace: AuditTrace,
}

impl AuditRecorder {
    fn step(
        &mut self,
        rule_id: &str,
        rule_name: &str,
        input: serde_json::Value,
        output: serde_json::Value,
        reasoning: String,
    ) {
        let step_number = self.trace.steps.len() as u32 + 1;
        self.trace.steps.push(AuditStep {
            step_number,
            rule_id: rule_id.to_string(),
            rule_name: rule_name.to_string(),
            input,
            output,
            reasoning,
        });
    }

    fn warn(&mut self, code: &str, message: String, severity: &str) {
        self.trace.warnings.push(AuditWarning {
            code: code.to_string(),
            message,
            severity: severity.to_string(),
        });
    }
}

/// Calculates child support with the 2025 Georgia constants.
///
/// The calculation is total: every input produces a result, with unusable
/// values absorbed into the documented fallbacks and flagged as warnings in
/// the audit trace.
///
/// # Examples
///
/// ```
/// use child_support_engine::calculation::calculate_child_support;
/// use child_support_engine::models::{CalculationInput, CustodyArrangement, ParentInput, Payer};
/// use rust_decimal_macros::dec;
///
/// let input = CalculationInput {
///     parent_a: ParentInput::with_income(dec!(2500), CustodyArrangement::Custodial),
///     parent_b: ParentInput::with_income(dec!(2500), CustodyArrangement::Standard),
///     number_of_children: 1,
///     ..CalculationInput::default()
/// };
///
/// let result = calculate_child_support(&input);
/// assert_eq!(result.pro_rata_a, dec!(0.5));
/// assert_eq!(result.payer, Payer::None);
/// assert_eq!(result.amount, dec!(0));
/// ```
pub fn calculate_child_support(input: &CalculationInput) -> CalculationResult {
    calculate_child_support_with_config(input, &GuidelineConfig::default())
}

/// Calculates child support with an explicit guideline configuration.
pub fn calculate_child_support_with_config(
    input: &CalculationInput,
    config: &GuidelineConfig,
) -> CalculationResult {
    let mut audit = AuditRecorder::default();
    let parent_a = &input.parent_a;
    let parent_b = &input.parent_b;

    // 1. Custody
    let custody = resolve_custody(parent_a.custody, parent_b.custody);
    audit.step(
        "custody_resolution",
        "Custody Resolution",
        json!({ "custody_a": parent_a.custody, "custody_b": parent_b.custody }),
        json!({
            "custodial_parent": custody.custodial_parent,
            "annual_overnights": custody.annual_overnights,
            "used_fallback": custody.used_fallback
        }),
        format!(
            "Parent {} is custodial; Parent {} has {} overnights per year",
            custody.custodial_parent.label(),
            custody.noncustodial_parent().label(),
            custody.annual_overnights
        ),
    );
    if custody.used_fallback {
        audit.warn(
            WARN_CUSTODY_FALLBACK,
            "Exactly one parent should be custodial; Parent A was assumed custodial".to_string(),
            "medium",
        );
    }

    // 2. Adjusted incomes
    let adjusted_income_a = adjust_income(parent_a.gross_monthly_income, &parent_a.deductions);
    let adjusted_income_b = adjust_income(parent_b.gross_monthly_income, &parent_b.deductions);
    audit.step(
        "income_adjustment",
        "Income Adjustment",
        json!({
            "gross_income_a": parent_a.gross_monthly_income,
            "deductions_a": parent_a.deductions.total(),
            "gross_income_b": parent_b.gross_monthly_income,
            "deductions_b": parent_b.deductions.total()
        }),
        json!({ "adjusted_income_a": adjusted_income_a, "adjusted_income_b": adjusted_income_b }),
        format!(
            "A: ${} - ${} = ${}; B: ${} - ${} = ${} (floored at $0)",
            parent_a.gross_monthly_income,
            parent_a.deductions.total(),
            adjusted_income_a,
            parent_b.gross_monthly_income,
            parent_b.deductions.total(),
            adjusted_income_b
        ),
    );

    // 3. Combined income
    let combined_income = adjusted_income_a.saturating_add(adjusted_income_b);
    audit.step(
        "combined_income",
        "Combined Adjusted Income",
        json!({ "adjusted_income_a": adjusted_income_a, "adjusted_income_b": adjusted_income_b }),
        json!({ "combined_income": combined_income }),
        format!("${} + ${} = ${}", adjusted_income_a, adjusted_income_b, combined_income),
    );

    // 4. Pro-rata shares
    let shares = calculate_pro_rata(adjusted_income_a, adjusted_income_b);
    audit.step(
        "pro_rata",
        "Pro-Rata Income Shares",
        json!({ "combined_income": combined_income }),
        json!({ "pro_rata_a": shares.share_a, "pro_rata_b": shares.share_b }),
        if combined_income > Decimal::ZERO {
            format!(
                "A: ${} / ${}; B: ${} / ${}",
                adjusted_income_a, combined_income, adjusted_income_b, combined_income
            )
        } else {
            "No combined income; both shares are zero".to_string()
        },
    );

    // 5. BCSO
    let children = input.number_of_children;
    let lookup = lookup_bcso_with_fallback(combined_income, children);
    let bcso = lookup.amount;
    audit.step(
        "bcso_lookup",
        "Basic Child Support Obligation",
        json!({ "combined_income": combined_income, "number_of_children": children }),
        json!({
            "bcso": bcso,
            "rounded_income": lookup.rounded_income,
            "bracket_income": lookup.bracket_income,
            "used_minimum_bracket": lookup.used_minimum_bracket
        }),
        match lookup.bracket_income {
            Some(bracket) => format!(
                "Combined income ${} rounds to ${}; ${} bracket gives ${} for {} child(ren)",
                combined_income, lookup.rounded_income, bracket, bcso, children
            ),
            None => format!("No schedule amount for {} child(ren) at ${}", children, combined_income),
        },
    );
    if !(1..=MAX_CHILDREN).contains(&children) {
        audit.warn(
            WARN_CHILDREN_OUT_OF_RANGE,
            format!(
                "The schedule covers 1 to {} children; {} gives no obligation",
                MAX_CHILDREN, children
            ),
            "high",
        );
    }
    if lookup.used_minimum_bracket {
        audit.warn(
            WARN_MINIMUM_BRACKET,
            format!(
                "Combined income ${} is below the schedule; the minimum bracket was used",
                combined_income
            ),
            "low",
        );
    }
    if lookup.rounded_income > Decimal::from(MAXIMUM_INCOME) {
        audit.warn(
            WARN_INCOME_ABOVE_SCHEDULE,
            format!(
                "Combined income ${} is above the ${} schedule maximum; the maximum bracket was used",
                combined_income, MAXIMUM_INCOME
            ),
            "low",
        );
    }

    // 6. Basic support
    let basic_support_a = bcso * shares.share_a;
    let basic_support_b = bcso * shares.share_b;
    audit.step(
        "basic_support",
        "Basic Support Shares",
        json!({ "bcso": bcso, "pro_rata_a": shares.share_a, "pro_rata_b": shares.share_b }),
        json!({ "basic_support_a": basic_support_a, "basic_support_b": basic_support_b }),
        format!(
            "A: ${} x {} = ${}; B: ${} x {} = ${}",
            bcso, shares.share_a, basic_support_a, bcso, shares.share_b, basic_support_b
        ),
    );

    // 7. Expenses
    let total_expenses = input.expenses.total();
    let allocation = allocate_expenses(total_expenses, shares.share_a, shares.share_b);
    audit.step(
        "expense_allocation",
        "Shared Expense Allocation",
        json!({
            "health_insurance": input.expenses.health_insurance,
            "child_care": input.expenses.child_care
        }),
        json!({ "expenses_a": allocation.expense_a, "expenses_b": allocation.expense_b }),
        format!(
            "Total expenses ${} split by income share: A ${}, B ${}",
            total_expenses, allocation.expense_a, allocation.expense_b
        ),
    );

    // 8. Presumptive support
    let presumptive_support_a = basic_support_a.saturating_add(allocation.expense_a);
    let presumptive_support_b = basic_support_b.saturating_add(allocation.expense_b);
    audit.step(
        "presumptive_support",
        "Presumptive Support",
        json!({
            "basic_support_a": basic_support_a,
            "expenses_a": allocation.expense_a,
            "basic_support_b": basic_support_b,
            "expenses_b": allocation.expense_b
        }),
        json!({
            "presumptive_support_a": presumptive_support_a,
            "presumptive_support_b": presumptive_support_b
        }),
        format!(
            "A: ${} + ${} = ${}; B: ${} + ${} = ${}",
            basic_support_a,
            allocation.expense_a,
            presumptive_support_a,
            basic_support_b,
            allocation.expense_b,
            presumptive_support_b
        ),
    );

    // 9. Deviations
    let options = DeviationOptions::from_request(&input.deviations, custody.annual_overnights);
    let outcome_a =
        apply_deviations_detailed(presumptive_support_a, &options, combined_income, config);
    let outcome_b =
        apply_deviations_detailed(presumptive_support_b, &options, combined_income, config);
    audit.step(
        "deviations",
        "Deviations",
        json!({
            "options": options,
            "combined_income": combined_income,
            "presumptive_support_a": presumptive_support_a,
            "presumptive_support_b": presumptive_support_b
        }),
        json!({
            "final_support_a": outcome_a.final_amount,
            "final_support_b": outcome_b.final_amount,
            "applied_a": outcome_a.applied,
            "applied_b": outcome_b.applied
        }),
        describe_deviations(&outcome_a, &outcome_b),
    );

    // 10. Settlement
    let settlement = settle(
        outcome_a.final_amount,
        outcome_b.final_amount,
        config.settlement.tolerance,
    );
    audit.step(
        "settlement",
        "Net Settlement",
        json!({
            "final_support_a": outcome_a.final_amount,
            "final_support_b": outcome_b.final_amount,
            "tolerance": config.settlement.tolerance
        }),
        json!({
            "payer": settlement.payer,
            "amount": settlement.amount,
            "difference": settlement.difference
        }),
        match settlement.payer.paying_parent() {
            Some(payer) => format!(
                "Parent {} pays Parent {} ${} per month",
                payer.label(),
                payer.other().label(),
                settlement.amount
            ),
            None => format!(
                "Difference ${} is under the ${} tolerance; no payment",
                settlement.difference.abs(),
                config.settlement.tolerance
            ),
        },
    );

    debug!(
        combined_income = %combined_income,
        bcso = %bcso,
        payer = ?settlement.payer,
        amount = %settlement.amount,
        "child support calculated"
    );

    CalculationResult {
        parent_a_name: parent_a.name.clone(),
        parent_b_name: parent_b.name.clone(),
        gross_income_a: parent_a.gross_monthly_income,
        gross_income_b: parent_b.gross_monthly_income,
        adjusted_income_a,
        adjusted_income_b,
        combined_income,
        pro_rata_a: shares.share_a,
        pro_rata_b: shares.share_b,
        bcso,
        basic_support_a,
        basic_support_b,
        expenses_a: allocation.expense_a,
        expenses_b: allocation.expense_b,
        presumptive_support_a,
        presumptive_support_b,
        final_support_a: outcome_a.final_amount,
        final_support_b: outcome_b.final_amount,
        custody,
        payer: settlement.payer,
        amount: settlement.amount,
        audit_trace: audit.trace,
    }
}

fn describe_deviations(outcome_a: &DeviationOutcome, outcome_b: &DeviationOutcome) -> String {
    if outcome_a.applied.is_empty() {
        return "No deviations applied".to_string();
    }
    let factors: Vec<String> = outcome_a
        .applied
        .iter()
        .map(|d| format!("{:?} x {}", d.kind, d.multiplier.normalize()))
        .collect();
    format!(
        "{}; A: ${} -> ${}; B: ${} -> ${}",
        factors.join(", "),
        outcome_a.starting_amount,
        outcome_a.final_amount,
        outcome_b.starting_amount,
        outcome_b.final_amount
    )
}
