//! CLI configuration management.
//!
//! Loads `WhatIfConfig` from a TOML file, applies `WHATIF_*` environment
//! overrides, then command-line flags.
//!
//! Priority (highest to lowest):
//! 1. CLI arguments
//! 2. Environment variables
//! 3. Config file
//! 4. Default values

use std::path::{Path, PathBuf};

use adapter_loader::DEFAULT_DATA_DIR;
use forecast_models::DEFAULT_INTERVAL_WIDTH;
use forecast_scenarios::ShapeParams;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "whatif.toml";

/// Longest forecast horizon accepted.
pub const MAX_PERIODS: usize = 365;

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration error type
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),

    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),

    /// Unusable environment variable
    #[error("Environment variable error: {0}")]
    Env(String),

    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Baseline forecaster settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecasterConfig {
    /// Central interval coverage in (0, 1)
    pub interval_width: f64,
}

impl Default for ForecasterConfig {
    fn default() -> Self {
        Self {
            interval_width: DEFAULT_INTERVAL_WIDTH,
        }
    }
}

/// What-if CLI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WhatIfConfig {
    /// Directory holding `<SYMBOL>_daily.csv` files
    pub data_dir: PathBuf,

    /// Log level
    pub log_level: String,

    /// Forecast horizon in days
    pub periods: usize,

    /// Baseline forecaster settings
    pub forecaster: ForecasterConfig,

    /// Scenario shape constants
    pub shape: ShapeParams,
}

impl Default for WhatIfConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            log_level: "info".to_string(),
            periods: 30,
            forecaster: ForecasterConfig::default(),
            shape: ShapeParams::default(),
        }
    }
}

impl WhatIfConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, or defaults if the file is absent
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply `WHATIF_*` environment variable overrides
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.with_env_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn with_env_from<L>(mut self, lookup: L) -> Result<Self, ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        if let Some(data_dir) = lookup("WHATIF_DATA_DIR") {
            self.data_dir = PathBuf::from(data_dir);
        }

        if let Some(log_level) = lookup("WHATIF_LOG_LEVEL") {
            self.log_level = log_level;
        }

        if let Some(periods) = lookup("WHATIF_PERIODS") {
            self.periods = periods.trim().parse().map_err(|_| {
                ConfigError::Env(format!("WHATIF_PERIODS '{}' is not an integer", periods))
            })?;
        }

        if let Some(width) = lookup("WHATIF_INTERVAL_WIDTH") {
            self.forecaster.interval_width = width.trim().parse().map_err(|_| {
                ConfigError::Env(format!("WHATIF_INTERVAL_WIDTH '{}' is not a number", width))
            })?;
        }

        Ok(self)
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliOverrides) {
        if let Some(data_dir) = &cli.data_dir {
            self.data_dir = data_dir.clone();
        }
        if let Some(log_level) = &cli.log_level {
            self.log_level = log_level.clone();
        }
        if let Some(periods) = cli.periods {
            self.periods = periods;
        }
        if let Some(width) = cli.interval_width {
            self.forecaster.interval_width = width;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if !VALID_LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, VALID_LOG_LEVELS
            ));
        }

        if self.data_dir.as_os_str().is_empty() {
            errors.push("data_dir cannot be empty".to_string());
        }

        if self.periods == 0 || self.periods > MAX_PERIODS {
            errors.push(format!(
                "periods {} must be between 1 and {}",
                self.periods, MAX_PERIODS
            ));
        }

        let width = self.forecaster.interval_width;
        if !(width > 0.0 && width < 1.0) {
            errors.push(format!(
                "forecaster.interval_width {} must be in (0, 1)",
                width
            ));
        }

        if let Err(e) = self.shape.validate() {
            errors.push(format!("shape: {}", e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

/// Command-line overrides
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// Data directory override
    pub data_dir: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Horizon override
    pub periods: Option<usize>,
    /// Interval coverage override
    pub interval_width: Option<f64>,
}

/// Build configuration from all sources
pub fn build_config(path: &Path, cli: &CliOverrides) -> Result<WhatIfConfig, ConfigError> {
    let mut config = WhatIfConfig::load_or_default(path)?.with_env_override()?;
    config.merge_with_cli(cli);
    config.validate()?;
    Ok(config)
}
