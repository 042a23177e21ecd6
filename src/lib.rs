//! Child Support Guideline Engine
//!
//! This crate estimates monthly child support obligations under the Georgia
//! child support guidelines (O.C.G.A. § 19-6-15) using the 2025 Basic Child
//! Support Obligation (BCSO) schedule.
//!
//! The engine is a pure, total function: every input maps to a defined
//! [`models::CalculationResult`] and nothing here performs I/O except the
//! optional YAML [`config::ConfigLoader`].
//!
//! # Example
//!
//! ```
//! use child_support_engine::calculation::calculate_child_support;
//! use child_support_engine::models::{CalculationInput, CustodyArrangement, ParentInput, Payer};
//! use rust_decimal_macros::dec;
//!
//! let input = CalculationInput {
//!     parent_a: ParentInput::with_income(dec!(3000), CustodyArrangement::Custodial),
//!     parent_b: ParentInput::with_income(dec!(2000), CustodyArrangement::Standard),
//!     number_of_children: 2,
//!     ..CalculationInput::default()
//! };
//!
//! let result = calculate_child_support(&input);
//! assert_eq!(result.combined_income, dec!(5000));
//! assert_eq!(result.payer, Payer::B);
//! ```

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod schedule;
pub mod validation;
