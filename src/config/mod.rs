//! Guideline configuration.
//!
//! The deviation constants default to the 2025 Georgia guidelines and can be
//! loaded from a YAML file instead. The BCSO schedule itself is not
//! configurable; see [`crate::schedule`].
//!
//! # Example
//!
//! ```no_run
//! use child_support_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/georgia_2025.yaml").unwrap();
//! println!("Loaded guidelines: {}", config.config().guidelines.statute);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    GuidelineConfig, GuidelineMetadata, HighIncomeDeviation, LowIncomeDeviation,
    ParentingTimeDeviation, SettlementRules,
};
