//! Configuration for the diff engine.
//!
//! `DiffConfig` centralizes the behavioral knobs so callers tune one value
//! object instead of threading loose parameters through the pipeline.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffConfig {
    /// Wall-clock budget in seconds for the bisect search. A sub-problem
    /// that exceeds it degrades to a Delete+Insert pair. Non-positive
    /// values disable the deadline entirely.
    pub timeout_secs: f64,
    /// Run the line-granularity pre-pass on large inputs before refining at
    /// scalar granularity. Affects execution cost only, never content.
    pub check_lines: bool,
    /// Minimum scalar count on both sides before the line pre-pass engages.
    pub line_mode_threshold: u32,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 1.0,
            check_lines: true,
            line_mode_threshold: 100,
        }
    }
}

impl DiffConfig {
    pub fn fastest() -> Self {
        Self {
            timeout_secs: 0.2,
            ..Default::default()
        }
    }

    pub fn balanced() -> Self {
        Self::default()
    }

    /// Unlimited budget: bisect never degrades and every region is minimal.
    pub fn most_precise() -> Self {
        Self {
            timeout_secs: 0.0,
            ..Default::default()
        }
    }

    pub fn builder() -> DiffConfigBuilder {
        DiffConfigBuilder {
            inner: DiffConfig::default(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_secs.is_nan() {
            return Err(ConfigError::InvalidTimeout {
                value: self.timeout_secs,
            });
        }
        if self.line_mode_threshold == 0 {
            return Err(ConfigError::NonPositiveLimit {
                field: "line_mode_threshold",
                value: 0,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("timeout_secs must not be NaN (got {value})")]
    InvalidTimeout { value: f64 },
    #[error("{field} must be greater than zero (got {value})")]
    NonPositiveLimit { field: &'static str, value: u64 },
}

#[derive(Debug, Clone)]
pub struct DiffConfigBuilder {
    inner: DiffConfig,
}

impl Default for DiffConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DiffConfigBuilder {
    pub fn new() -> Self {
        DiffConfig::builder()
    }

    pub fn timeout_secs(mut self, value: f64) -> Self {
        self.inner.timeout_secs = value;
        self
    }

    pub fn check_lines(mut self, value: bool) -> Self {
        self.inner.check_lines = value;
        self
    }

    pub fn line_mode_threshold(mut self, value: u32) -> Self {
        self.inner.line_mode_threshold = value;
        self
    }

    pub fn build(self) -> DiffConfig {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(DiffConfig::default().validate().is_ok());
        assert!(DiffConfig::fastest().validate().is_ok());
        assert!(DiffConfig::most_precise().validate().is_ok());
    }

    #[test]
    fn nan_timeout_rejected() {
        let config = DiffConfig::builder().timeout_secs(f64::NAN).build();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTimeout { .. })
        ));
    }

    #[test]
    fn zero_line_threshold_rejected() {
        let config = DiffConfig::builder().line_mode_threshold(0).build();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveLimit { .. })
        ));
    }

    #[test]
    fn serde_defaults_fill_missing_fields() {
        let config: DiffConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, DiffConfig::default());
    }
}
