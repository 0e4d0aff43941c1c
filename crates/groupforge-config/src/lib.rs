//! Configuration system for GroupForge.
//!
//! Load engine tunables from TOML or YAML to calibrate the size thresholds
//! and refinement limits per deployment without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use groupforge_config::EngineConfig;
//!
//! let config = EngineConfig::from_toml_str(r#"
//!     [clustering]
//!     exact_limit = 800
//!
//!     [balance]
//!     refinement_limit = 1500
//!     max_passes = 50
//! "#).unwrap();
//!
//! assert_eq!(config.clustering.exact_limit, 800);
//! assert_eq!(config.balance.max_passes, 50);
//! assert_eq!(config.balance.variety_swap_scale, 0.1);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use groupforge_config::EngineConfig;
//!
//! let config = EngineConfig::load("groupforge.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(test)]
mod tests;

/// Default entry count above which clustering uses the projection fallback.
pub const DEFAULT_EXACT_CLUSTERING_LIMIT: usize = 1200;

/// Default entry count above which swap refinement is skipped.
pub const DEFAULT_REFINEMENT_LIMIT: usize = 2000;

/// Default maximum number of swap refinement passes.
pub const DEFAULT_MAX_PASSES: usize = 100;

/// Default minimum cost decrease for a swap to count as an improvement.
pub const DEFAULT_IMPROVEMENT_EPSILON: f64 = 1e-9;

/// Default scale of the variety term relative to the balance cost.
pub const DEFAULT_VARIETY_SWAP_SCALE: f64 = 0.1;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct EngineConfig {
    /// Clustering configuration.
    #[serde(default)]
    pub clustering: ClusteringConfig,

    /// Balanced team formation configuration.
    #[serde(default)]
    pub balance: BalanceConfig,
}

impl EngineConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or
    /// fails validation.
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
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the exact clustering limit.
    pub fn with_exact_clustering_limit(mut self, limit: usize) -> Self {
        self.clustering.exact_limit = limit;
        self
    }

    /// Sets the swap refinement entry limit.
    pub fn with_refinement_limit(mut self, limit: usize) -> Self {
        self.balance.refinement_limit = limit;
        self
    }

    /// Sets the maximum number of refinement passes.
    pub fn with_max_passes(mut self, passes: usize) -> Self {
        self.balance.max_passes = passes;
        self
    }

    /// Sets the variety swap scale.
    pub fn with_variety_swap_scale(mut self, scale: f64) -> Self {
        self.balance.variety_swap_scale = scale;
        self
    }

    /// Checks that every tunable is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.balance.validate()
    }
}

/// Clustering configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ClusteringConfig {
    /// Largest entry count clustered with the full distance matrix.
    #[serde(default = "default_exact_limit")]
    pub exact_limit: usize,
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            exact_limit: DEFAULT_EXACT_CLUSTERING_LIMIT,
        }
    }
}

/// Balanced team formation configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct BalanceConfig {
    /// Largest entry count for which swap refinement runs.
    #[serde(default = "default_refinement_limit")]
    pub refinement_limit: usize,

    /// Maximum number of full refinement passes.
    #[serde(default = "default_max_passes")]
    pub max_passes: usize,

    /// A swap must lower the cost by more than this.
    #[serde(default = "default_improvement_epsilon")]
    pub improvement_epsilon: f64,

    /// Weight of the co-grouping penalty change relative to the balance cost.
    #[serde(default = "default_variety_swap_scale")]
    pub variety_swap_scale: f64,
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            refinement_limit: DEFAULT_REFINEMENT_LIMIT,
            max_passes: DEFAULT_MAX_PASSES,
            improvement_epsilon: DEFAULT_IMPROVEMENT_EPSILON,
            variety_swap_scale: DEFAULT_VARIETY_SWAP_SCALE,
        }
    }
}

impl BalanceConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_passes == 0 {
            return Err(ConfigError::Invalid(
                "balance.max_passes must be positive".to_string(),
            ));
        }
        if !self.improvement_epsilon.is_finite() || self.improvement_epsilon < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "balance.improvement_epsilon must be a non-negative number, got {}",
                self.improvement_epsilon
            )));
        }
        if !self.variety_swap_scale.is_finite() || self.variety_swap_scale < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "balance.variety_swap_scale must be a non-negative number, got {}",
                self.variety_swap_scale
            )));
        }
        Ok(())
    }
}

fn default_exact_limit() -> usize {
    DEFAULT_EXACT_CLUSTERING_LIMIT
}

fn default_refinement_limit() -> usize {
    DEFAULT_REFINEMENT_LIMIT
}

fn default_max_passes() -> usize {
    DEFAULT_MAX_PASSES
}

fn default_improvement_epsilon() -> f64 {
    DEFAULT_IMPROVEMENT_EPSILON
}

fn default_variety_swap_scale() -> f64 {
    DEFAULT_VARIETY_SWAP_SCALE
}
