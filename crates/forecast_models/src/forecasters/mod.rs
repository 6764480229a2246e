//! Baseline forecasters.
//!
//! This module provides:
//! - [`Forecaster`]: the seam through which the scenario layer obtains a
//!   baseline series
//! - [`LinearTrendForecaster`]: reference implementation

mod linear_trend;

pub use linear_trend::{LinearTrendForecaster, DEFAULT_INTERVAL_WIDTH};

use crate::error::ForecastError;
use forecast_core::types::{ForecastSeries, HistoricalSeries};

/// Produces a baseline forecast from historical observations.
///
/// Implementations must return `history.len() + periods` records with
/// `lower <= point <= upper` throughout; the first `history.len()` records
/// are the in-sample fit.
///
/// # Examples
/// ```
/// use forecast_core::types::{Date, HistoricalSeries, Observation};
/// use forecast_models::{Forecaster, LinearTrendForecaster};
///
/// let start = Date::from_ymd(2024, 1, 1).unwrap();
/// let history = HistoricalSeries::new(
///     (0..10).map(|i| Observation::new(start.add_days(i), 50.0 + i as f64)).collect(),
/// ).unwrap();
///
/// let forecaster = LinearTrendForecaster::default();
/// let series = forecaster.forecast(&history, 5).unwrap();
/// assert_eq!(series.len(), 15);
/// assert_eq!(series.history_len(), 10);
/// ```
pub trait Forecaster: Send + Sync {
    /// Short model identifier.
    fn name(&self) -> &str;

    /// Fit `history` and extend it `periods` days.
    fn forecast(
        &self,
        history: &HistoricalSeries,
        periods: usize,
    ) -> Result<ForecastSeries, ForecastError>;
}
