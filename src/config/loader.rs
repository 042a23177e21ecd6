//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading guideline
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::GuidelineConfig;

/// Loads and validates a guideline configuration.
///
/// # File Format
///
/// ```text
/// guidelines:
///   jurisdiction: Georgia
///   statute: "O.C.G.A. § 19-6-15"
///   schedule_year: 2025
/// low_income:
///   lower_bound: "1550"
///   upper_bound: "3950"
///   max_reduction: "0.25"
/// high_income:
///   threshold: "40000"
///   multiplier: "1.10"
/// parenting_time:
///   threshold_overnights: 73
///   block_overnights: 30
///   reduction_per_block: "0.02"
///   max_reduction: "0.5"
/// settlement:
///   tolerance: "1"
/// ```
///
/// # Example
///
/// ```no_run
/// use child_support_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/georgia_2025.yaml")?;
/// println!("Loaded guidelines: {}", loader.config().guidelines.jurisdiction);
/// # Ok::<(), child_support_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: GuidelineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// Returns an error if the file is missing, is not valid YAML, is missing
    /// a required field, or holds inconsistent values.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse(&content, &path_str)
    }

    /// Loads configuration from YAML text.
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, path: &str) -> EngineResult<Self> {
        let config: GuidelineConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: path.to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;

        debug!(
            path,
            jurisdiction = %config.guidelines.jurisdiction,
            year = config.guidelines.schedule_year,
            "loaded guideline configuration"
        );
        Ok(Self { config })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &GuidelineConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> GuidelineConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn config_path() -> &'static str {
        "./config/georgia_2025.yaml"
    }

    #[test]
    fn test_load_shipped_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.config().guidelines.jurisdiction, "Georgia");
        assert_eq!(loader.config().guidelines.schedule_year, 2025);
    }

    #[test]
    fn test_shipped_configuration_matches_defaults() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.into_config(), GuidelineConfig::default());
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        match ConfigLoader::load("/nonexistent/guidelines.yaml") {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("guidelines.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_yaml_returns_parse_error() {
        match ConfigLoader::from_yaml_str("low_income: [unclosed") {
            Err(EngineError::ConfigParseError { path, .. }) => assert_eq!(path, "<inline>"),
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_inconsistent_values_rejected() {
        let yaml = r#"
guidelines:
  jurisdiction: Georgia
  statute: "O.C.G.A. § 19-6-15"
  schedule_year: 2025
low_income:
  lower_bound: "3950"
  upper_bound: "1550"
  max_reduction: "0.25"
high_income:
  threshold: "40000"
  multiplier: "1.10"
parenting_time:
  threshold_overnights: 73
  block_overnights: 30
  reduction_per_block: "0.02"
  max_reduction: "0.5"
settlement:
  tolerance: "1"
"#;
        assert!(matches!(
            ConfigLoader::from_yaml_str(yaml),
            Err(EngineError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_custom_values_loaded() {
        let yaml = r#"
guidelines:
  jurisdiction: Georgia
  statute: "O.C.G.A. § 19-6-15"
  schedule_year: 2026
low_income:
  lower_bound: "1600"
  upper_bound: "4000"
  max_reduction: "0.2"
high_income:
  threshold: "40000"
  multiplier: "1.05"
parenting_time:
  threshold_overnights: 90
  block_overnights: 30
  reduction_per_block: "0.03"
  max_reduction: "0.4"
settlement:
  tolerance: "0.5"
"#;
        let config = ConfigLoader::from_yaml_str(yaml).unwrap().into_config();
        assert_eq!(config.high_income.multiplier, dec!(1.05));
        assert_eq!(config.parenting_time.threshold_overnights, 90);
        assert_eq!(config.settlement.tolerance, dec!(0.5));
    }
}
