//! Configuration system for SegForge scoring.
//!
//! Load merge-priority expressions from TOML (or YAML) files so a host can
//! pick the scoring function of a merge session without code changes. A
//! parsed [`ScoringExpr`] is validated against a [`StatisticRegistry`] of
//! known statistics and bound to a statistics source as a boxed scoring
//! tree; hosts that know their expression at compile time should build it
//! with the fluent combinators in `segforge-scoring` instead.
//!
//! # Examples
//!
//! Load an expression from a TOML string:
//!
//! ```
//! use segforge_config::{ScoringConfig, StatisticRegistry};
//! use segforge_core::StatisticUnit;
//!
//! let config = ScoringConfig::from_toml_str(r#"
//!     [expression]
//!     op = "one_minus"
//!     [expression.of]
//!     op = "safe_divide"
//!     [expression.of.lhs]
//!     op = "statistic"
//!     name = "affinity_sum"
//!     [expression.of.rhs]
//!     op = "statistic"
//!     name = "contact_area"
//! "#).unwrap();
//!
//! let mut registry = StatisticRegistry::new();
//! registry
//!     .register("affinity_sum", StatisticUnit::Affinity)
//!     .register("contact_area", StatisticUnit::Area);
//!
//! let required = config.expression.capabilities(&registry).unwrap();
//! assert_eq!(required.len(), 2);
//! assert!(required.contains("affinity_sum"));
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use segforge_core::CompositionError;

mod bind;
mod expr;
mod registry;


pub use bind::NamedStatisticSource;
pub use expr::ScoringExpr;
pub use registry::StatisticRegistry;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unknown statistic `{0}`")]
    UnknownStatistic(String),

    #[error("constant {0} is not representable in the score type")]
    UnrepresentableConstant(f64),

    #[error(transparent)]
    Composition(#[from] CompositionError),
}

/// Main scoring configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ScoringConfig {
    /// The merge-priority expression evaluated per edge.
    pub expression: ScoringExpr,
}

impl ScoringConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }
}
