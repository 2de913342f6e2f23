//! Configuration file support.
//!
//! Every field has a default, so a config file only needs the values it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BacError, Result};
use crate::kinetics::constants::{
    DEFAULT_ABSORPTION_EPSILON, DEFAULT_MAX_STEPS, DEFAULT_ZERO_THRESHOLD,
};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct SimulationConfig {
    #[serde(default)]
    pub engine: EngineConfig,

    #[serde(default)]
    pub report: ReportConfig,
}

/// Numerical controls for the simulation engine
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct EngineConfig {
    /// Step cap for each phase before giving up with a non-convergence error.
    #[serde(default = "default_max_steps")]
    pub max_steps: usize,

    /// Grams within which an intake counts as fully absorbed.
    #[serde(default = "default_absorption_epsilon")]
    pub absorption_epsilon: f64,

    /// Concentrations below this are snapped to zero.
    #[serde(default = "default_zero_threshold")]
    pub zero_threshold: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_steps: default_max_steps(),
            absorption_epsilon: default_absorption_epsilon(),
            zero_threshold: default_zero_threshold(),
        }
    }
}

/// Report formatting
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ReportConfig {
    /// chrono format string for sample timestamps.
    #[serde(default = "default_time_format")]
    pub time_format: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            time_format: default_time_format(),
        }
    }
}

fn default_max_steps() -> usize {
    DEFAULT_MAX_STEPS
}

fn default_absorption_epsilon() -> f64 {
    DEFAULT_ABSORPTION_EPSILON
}

fn default_zero_threshold() -> f64 {
    DEFAULT_ZERO_THRESHOLD
}

fn default_time_format() -> String {
    "%H:%M".to_string()
}

impl SimulationConfig {
    /// Load configuration from an optional path, falling back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                tracing::debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load and validate configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: SimulationConfig = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.engine.validate()
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_steps == 0 {
            return Err(BacError::Config("max_steps must be at least 1".to_string()));
        }
        if !(self.absorption_epsilon.is_finite() && self.absorption_epsilon > 0.0) {
            return Err(BacError::Config(format!(
                "absorption_epsilon must be positive, got {}",
                self.absorption_epsilon
            )));
        }
        if !(self.zero_threshold.is_finite() && self.zero_threshold > 0.0) {
            return Err(BacError::Config(format!(
                "zero_threshold must be positive, got {}",
                self.zero_threshold
            )));
        }
        Ok(())
    }
}
