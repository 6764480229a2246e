//! CLI error types.

use adapter_loader::LoaderError;
use forecast_scenarios::ScenarioError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by `whatif` commands.
#[derive(Error, Debug)]
pub enum CliError {
    /// Input file does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Bad command-line value
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration could not be built
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// History could not be loaded
    #[error("Data load error: {0}")]
    Loader(#[from] LoaderError),

    /// Forecast or scenario failure
    #[error("Scenario error: {0}")]
    Scenario(#[from] ScenarioError),

    /// Output could not be written
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialisation failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;
