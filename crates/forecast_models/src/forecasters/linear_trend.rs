//! Ordinary least-squares trend forecaster.

use forecast_core::math::statistics::mean;
use forecast_core::types::{Date, ForecastPoint, ForecastSeries, HistoricalSeries};
use tracing::debug;

use super::Forecaster;
use crate::distributions::two_sided_z;
use crate::error::ForecastError;

/// Default central interval coverage.
pub const DEFAULT_INTERVAL_WIDTH: f64 = 0.95;

/// Minimum observations needed to fit a slope.
const MIN_OBSERVATIONS: usize = 2;

/// Linear trend forecaster.
///
/// Regresses `y` on calendar days since the first observation, so gaps
/// such as weekends keep their spacing. The band is `point ± z·σ`, where
/// `σ` is the residual standard deviation (`n - 2` degrees of freedom, zero
/// for an exact fit) and `z` the two-sided normal critical value for
/// `interval_width`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearTrendForecaster {
    interval_width: f64,
}

/// Fitted trend line.
#[derive(Debug, Clone, Copy)]
struct TrendFit {
    intercept: f64,
    slope: f64,
    sigma: f64,
}

impl TrendFit {
    fn at(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

impl LinearTrendForecaster {
    /// Create a forecaster with the given interval coverage.
    ///
    /// # Errors
    /// `InvalidConfig` unless `0 < interval_width < 1`.
    pub fn new(interval_width: f64) -> Result<Self, ForecastError> {
        if !(interval_width > 0.0 && interval_width < 1.0) {
            return Err(ForecastError::InvalidConfig(format!(
                "interval_width must be in (0, 1), got {}",
                interval_width
            )));
        }
        Ok(Self { interval_width })
    }

    /// Interval coverage.
    pub fn interval_width(&self) -> f64 {
        self.interval_width
    }

    /// Critical value applied to the residual deviation.
    pub fn z_score(&self) -> f64 {
        two_sided_z(self.interval_width)
    }

    fn fit(xs: &[f64], ys: &[f64]) -> Option<TrendFit> {
        let x_bar = mean(xs)?;
        let y_bar = mean(ys)?;
        let (sxy, sxx) = xs
            .iter()
            .zip(ys)
            .fold((0.0, 0.0), |(sxy, sxx), (&x, &y)| {
                let dx = x - x_bar;
                (sxy + dx * (y - y_bar), sxx + dx * dx)
            });

        // All observations on one date: flat line through the mean
        let slope = if sxx > 0.0 { sxy / sxx } else { 0.0 };
        let intercept = y_bar - slope * x_bar;

        let dof = xs.len().saturating_sub(2);
        let sigma = if dof == 0 {
            0.0
        } else {
            let sse: f64 = xs
                .iter()
                .zip(ys)
                .map(|(&x, &y)| {
                    let r = y - (intercept + slope * x);
                    r * r
                })
                .sum();
            (sse / dof as f64).sqrt()
        };

        Some(TrendFit {
            intercept,
            slope,
            sigma,
        })
    }
}

impl Default for LinearTrendForecaster {
    fn default() -> Self {
        Self {
            interval_width: DEFAULT_INTERVAL_WIDTH,
        }
    }
}

impl Forecaster for LinearTrendForecaster {
    fn name(&self) -> &str {
        "linear_trend"
    }

    fn forecast(
        &self,
        history: &HistoricalSeries,
        periods: usize,
    ) -> Result<ForecastSeries, ForecastError> {
        let (first, last) = match (history.first(), history.last()) {
            (Some(first), Some(last)) if history.len() >= MIN_OBSERVATIONS => (first.ds, last.ds),
            _ => {
                return Err(ForecastError::InsufficientHistory {
                    got: history.len(),
                    need: MIN_OBSERVATIONS,
                })
            }
        };

        let offset = |d: Date| (d - first) as f64;
        let xs: Vec<f64> = history.observations().iter().map(|o| offset(o.ds)).collect();
        let ys = history.values();
        let fit = Self::fit(&xs, &ys).ok_or(ForecastError::InsufficientHistory {
            got: history.len(),
            need: MIN_OBSERVATIONS,
        })?;
        let half_width = self.z_score() * fit.sigma;

        debug!(
            observations = history.len(),
            periods,
            slope = fit.slope,
            sigma = fit.sigma,
            "Fitted linear trend"
        );

        let band = |date: Date| {
            let point = fit.at(offset(date));
            ForecastPoint::new(date, point, point - half_width, point + half_width)
        };

        let in_sample = history.observations().iter().map(|o| band(o.ds));
        let future = (1..=periods as i64).map(|k| band(last.add_days(k)));
        let points = in_sample.chain(future).collect();

        Ok(ForecastSeries::new(points, history.len())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use forecast_core::types::Observation;

    fn history_from(values: &[f64]) -> HistoricalSeries {
        let start = Date::from_ymd(2024, 1, 1).unwrap();
        HistoricalSeries::new(
            values
                .iter()
                .enumerate()
                .map(|(i, &y)| Observation::new(start.add_days(i as i64), y))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_new_validates_interval_width() {
        assert!(LinearTrendForecaster::new(0.8).is_ok());
        for bad in [0.0, 1.0, -0.5, 1.5, f64::NAN] {
            assert!(matches!(
                LinearTrendForecaster::new(bad),
                Err(ForecastError::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn test_default_uses_95_percent_band() {
        let f = LinearTrendForecaster::default();
        assert_eq!(f.interval_width(), DEFAULT_INTERVAL_WIDTH);
        assert_relative_eq!(f.z_score(), 1.959964, epsilon = 1e-5);
    }

    #[test]
    fn test_exact_line_has_zero_width_band() {
        let history = history_from(&[10.0, 12.0, 14.0, 16.0]);
        let series = LinearTrendForecaster::default()
            .forecast(&history, 3)
            .unwrap();

        assert_eq!(series.len(), 7);
        assert_eq!(series.history_len(), 4);
        for (i, p) in series.iter().enumerate() {
            assert_relative_eq!(p.point, 10.0 + 2.0 * i as f64, epsilon = 1e-9);
            assert_relative_eq!(p.lower, p.point, epsilon = 1e-9);
            assert_relative_eq!(p.upper, p.point, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_future_dates_are_successive_days() {
        let history = history_from(&[1.0, 2.0, 1.5]);
        let series = LinearTrendForecaster::default()
            .forecast(&history, 2)
            .unwrap();
        let last = history.last().unwrap().ds;
        assert_eq!(series.get(3).unwrap().date, last.add_days(1));
        assert_eq!(series.get(4).unwrap().date, last.add_days(2));
    }

    #[test]
    fn test_noisy_history_has_symmetric_band() {
        let history = history_from(&[100.0, 103.0, 99.0, 104.0, 101.0, 106.0]);
        let f = LinearTrendForecaster::default();
        let series = f.forecast(&history, 5).unwrap();
        let first = series.get(0).unwrap();
        let width = first.upper - first.point;
        assert!(width > 0.0);
        for p in series.iter() {
            assert_relative_eq!(p.upper - p.point, width, epsilon = 1e-9);
            assert_relative_eq!(p.point - p.lower, width, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_wider_coverage_widens_band() {
        let history = history_from(&[100.0, 103.0, 99.0, 104.0, 101.0]);
        let narrow = LinearTrendForecaster::new(0.5).unwrap().forecast(&history, 1).unwrap();
        let wide = LinearTrendForecaster::new(0.99).unwrap().forecast(&history, 1).unwrap();
        assert!(wide.get(0).unwrap().width() > narrow.get(0).unwrap().width());
    }

    #[test]
    fn test_gapped_dates_use_calendar_spacing() {
        let start = Date::from_ymd(2024, 1, 1).unwrap();
        let history = HistoricalSeries::new(vec![
            Observation::new(start, 10.0),
            Observation::new(start.add_days(1), 11.0),
            Observation::new(start.add_days(4), 14.0),
        ])
        .unwrap();
        let series = LinearTrendForecaster::default()
            .forecast(&history, 1)
            .unwrap();
        // Next day after day 4 is day 5 on a slope of 1/day
        assert_relative_eq!(series.final_point().unwrap(), 15.0, epsilon = 1e-9);
    }

    #[test]
    fn test_insufficient_history() {
        let err = LinearTrendForecaster::default()
            .forecast(&history_from(&[1.0]), 5)
            .unwrap_err();
        assert_eq!(err, ForecastError::InsufficientHistory { got: 1, need: 2 });

        let err = LinearTrendForecaster::default()
            .forecast(&HistoricalSeries::empty(), 5)
            .unwrap_err();
        assert_eq!(err, ForecastError::InsufficientHistory { got: 0, need: 2 });
    }

    #[test]
    fn test_zero_periods_returns_fit_only() {
        let series = LinearTrendForecaster::default()
            .forecast(&history_from(&[1.0, 2.0, 4.0]), 0)
            .unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.horizon_len(), 0);
    }
}
