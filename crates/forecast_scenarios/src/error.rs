//! Error types for scenario construction and analysis.

use forecast_models::ForecastError;
use thiserror::Error;

/// Scenario errors.
///
/// # Variants
/// - `InvalidSpec`: Scenario parameters out of range
/// - `NoBaseline`: Analysis requested before `generate_baseline`
/// - `ScenarioNotFound`: Unknown scenario name
/// - `InsufficientHistory`: Session created with no observations
/// - `DivisionUndefined`: Percentage against a zero reference
/// - `EmptyForecast`: Forecaster returned no records
/// - `Forecast`: Any other error from the Forecaster
///
/// # Examples
/// ```
/// use forecast_scenarios::ScenarioError;
///
/// let err = ScenarioError::ScenarioNotFound("crash".to_string());
/// assert_eq!(err.to_string(), "Scenario 'crash' not found");
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ScenarioError {
    /// Scenario parameters out of range.
    #[error("Invalid scenario: {0}")]
    InvalidSpec(String),

    /// No baseline has been generated for this session.
    #[error("Generate baseline forecast first")]
    NoBaseline,

    /// Unknown scenario name.
    #[error("Scenario '{0}' not found")]
    ScenarioNotFound(String),

    /// Too few historical observations to start a session.
    #[error("Insufficient history: {got} observations")]
    InsufficientHistory {
        /// Observations supplied
        got: usize,
    },

    /// A percentage was requested against a zero reference value.
    #[error("Percentage undefined: {0} is zero")]
    DivisionUndefined(&'static str),

    /// The forecaster returned an empty series.
    #[error("Forecaster returned an empty series")]
    EmptyForecast,

    /// Error raised by the Forecaster.
    #[error(transparent)]
    Forecast(ForecastError),
}

impl From<ForecastError> for ScenarioError {
    /// A forecaster's short-history error keeps its meaning as
    /// `InsufficientHistory`; everything else is wrapped.
    fn from(err: ForecastError) -> Self {
        match err {
            ForecastError::InsufficientHistory { got, .. } => Self::InsufficientHistory { got },
            other => Self::Forecast(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_baseline_display() {
        assert_eq!(
            ScenarioError::NoBaseline.to_string(),
            "Generate baseline forecast first"
        );
    }

    #[test]
    fn test_division_undefined_display() {
        let err = ScenarioError::DivisionUndefined("baseline final price");
        assert_eq!(err.to_string(), "Percentage undefined: baseline final price is zero");
    }

    #[test]
    fn test_forecast_error_is_transparent() {
        let inner = ForecastError::InvalidConfig("interval_width".to_string());
        let err: ScenarioError = inner.clone().into();
        assert_eq!(err.to_string(), inner.to_string());
        assert_eq!(err, ScenarioError::Forecast(inner));
    }

    #[test]
    fn test_forecast_short_history_maps_to_insufficient_history() {
        let err: ScenarioError = ForecastError::InsufficientHistory { got: 1, need: 2 }.into();
        assert_eq!(err, ScenarioError::InsufficientHistory { got: 1 });
    }
}
