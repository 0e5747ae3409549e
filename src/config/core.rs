//! Confusion loss configuration structure, builder and loaders.

use crate::core::constants::*;
use crate::core::error::{ConfusionLossError, Result};
use crate::core::types::*;

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Parameters of a confusion loss computation.
///
/// The plain [`confusion_loss`](crate::confusion_loss) function is equivalent
/// to the default configuration with a custom `alpha`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfusionLossConfig {
    /// Power-mean exponent; `f64::INFINITY` selects the max-norm limit
    pub alpha: f64,
    /// Handling of prediction columns that sum to zero
    pub zero_column_policy: ZeroColumnPolicy,
    /// Row/column ordering when building from labels
    pub category_order: CategoryOrder,
}

impl Default for ConfusionLossConfig {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            zero_column_policy: DEFAULT_ZERO_COLUMN_POLICY,
            category_order: DEFAULT_CATEGORY_ORDER,
        }
    }
}

/// Reject exponents that do not define a power mean.
pub fn validate_alpha(alpha: f64) -> Result<()> {
    if alpha.is_nan() || alpha <= 0.0 {
        return Err(ConfusionLossError::invalid_parameter(
            "alpha",
            alpha.to_string(),
            "must be positive",
        ));
    }
    Ok(())
}

impl ConfusionLossConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Default configuration with the given exponent
    pub fn with_alpha(alpha: f64) -> Self {
        Self {
            alpha,
            ..Self::default()
        }
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        validate_alpha(self.alpha)
    }

    /// Load configuration from a `.json` or `.toml` file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfusionLossError::config(format!("Failed to read config file: {}", e)))?;

        let config: Self = match path.extension().and_then(|s| s.to_str()) {
            Some("json") => serde_json::from_str(&content).map_err(|e| {
                ConfusionLossError::config(format!("Failed to parse JSON config: {}", e))
            })?,
            Some("toml") => toml::from_str(&content).map_err(|e| {
                ConfusionLossError::config(format!("Failed to parse TOML config: {}", e))
            })?,
            _ => {
                return Err(ConfusionLossError::config(
                    "Unsupported config file format. Use .json or .toml",
                ))
            }
        };

        config.validate()?;
        log::debug!("Loaded configuration from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Save configuration to a `.json` or `.toml` file
    ///
    /// JSON has no representation for an infinite exponent; use TOML for that.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = match path.extension().and_then(|s| s.to_str()) {
            Some("json") => {
                if !self.alpha.is_finite() {
                    return Err(ConfusionLossError::config(
                        "JSON cannot represent a non-finite alpha; use .toml",
                    ));
                }
                serde_json::to_string_pretty(self).map_err(|e| {
                    ConfusionLossError::config(format!("Failed to serialize to JSON: {}", e))
                })?
            }
            Some("toml") => toml::to_string_pretty(self).map_err(|e| {
                ConfusionLossError::config(format!("Failed to serialize to TOML: {}", e))
            })?,
            _ => {
                return Err(ConfusionLossError::config(
                    "Unsupported config file format. Use .json or .toml",
                ))
            }
        };

        std::fs::write(path, content).map_err(|e| {
            ConfusionLossError::config(format!("Failed to write config file: {}", e))
        })?;

        Ok(())
    }

    /// Load configuration from `CONFUSION_LOSS_*` environment variables
    pub fn load_from_environment() -> Result<Self> {
        Self::load_from_lookup(|key| std::env::var(key).ok())
    }

    /// Apply environment variable overrides to an existing configuration
    pub fn apply_environment_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    pub(crate) fn load_from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        config.apply_overrides(lookup)?;
        Ok(config)
    }

    fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup(ENV_ALPHA) {
            // `str::parse::<f64>` also accepts "inf" for the max-norm limit.
            self.alpha = val
                .trim()
                .parse()
                .map_err(|_| invalid_env(ENV_ALPHA, &val))?;
        }

        if let Some(val) = lookup(ENV_ZERO_COLUMN_POLICY) {
            self.zero_column_policy = val
                .parse()
                .map_err(|_| invalid_env(ENV_ZERO_COLUMN_POLICY, &val))?;
        }

        if let Some(val) = lookup(ENV_CATEGORY_ORDER) {
            self.category_order = val
                .parse()
                .map_err(|_| invalid_env(ENV_CATEGORY_ORDER, &val))?;
        }

        self.validate()
    }
}

fn invalid_env(key: &str, val: &str) -> ConfusionLossError {
    ConfusionLossError::config(format!("Invalid {}: '{}'", key, val))
}

/// Builder for [`ConfusionLossConfig`].
#[derive(Debug)]
pub struct ConfusionLossConfigBuilder {
    config: ConfusionLossConfig,
}

impl ConfusionLossConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            config: ConfusionLossConfig::default(),
        }
    }

    /// Set the power-mean exponent.
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.config.alpha = alpha;
        self
    }

    /// Set the zero-column policy.
    pub fn zero_column_policy(mut self, policy: ZeroColumnPolicy) -> Self {
        self.config.zero_column_policy = policy;
        self
    }

    /// Set the category ordering.
    pub fn category_order(mut self, order: CategoryOrder) -> Self {
        self.config.category_order = order;
        self
    }

    /// Validate and build the configuration.
    pub fn build(self) -> Result<ConfusionLossConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for ConfusionLossConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
