//! Core data models for the child support engine.
//!
//! This module contains the input records handed to the calculation pipeline
//! and the [`CalculationResult`] it produces.

mod calculation_result;
mod custody;
mod deviation;
mod expenses;
mod input;
mod parent;

pub use calculation_result::{AuditStep, AuditTrace, AuditWarning, CalculationResult, Payer};
pub use custody::{CustodyArrangement, CustodyResolution};
pub use deviation::{DeviationOptions, DeviationRequest};
pub use expenses::Expenses;
pub use input::CalculationInput;
pub use parent::{Deductions, ParentId, ParentInput};
