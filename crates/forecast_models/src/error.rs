//! Error types for baseline forecasting.
//!
//! This module provides:
//! - `ForecastError`: Errors raised by [`crate::Forecaster`] implementations

use forecast_core::types::SeriesError;
use thiserror::Error;

/// Forecasting errors.
///
/// # Examples
/// ```
/// use forecast_models::ForecastError;
///
/// let err = ForecastError::InsufficientHistory { got: 1, need: 2 };
/// assert_eq!(err.to_string(), "Insufficient history: got 1 observations, need at least 2");
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ForecastError {
    /// Too few observations to fit the model.
    #[error("Insufficient history: got {got} observations, need at least {need}")]
    InsufficientHistory {
        /// Observations supplied
        got: usize,
        /// Minimum required
        need: usize,
    },

    /// Invalid forecaster configuration.
    #[error("Invalid forecaster configuration: {0}")]
    InvalidConfig(String),

    /// The fitted output could not form a valid series.
    #[error("Forecast series error: {0}")]
    Series(#[from] SeriesError),
}
