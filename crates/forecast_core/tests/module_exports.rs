//! Integration tests for module exports.
//!
//! Verify that public modules and types are reachable via absolute paths
//! and through the `types` re-exports.

use chrono::NaiveDate;

/// Statistics helpers are accessible via absolute path.
#[test]
fn test_statistics_module_exports() {
    use forecast_core::math::statistics::{max, mean, min, sample_std_dev};

    let values = [1.0_f64, 2.0, 3.0];
    assert_eq!(mean(&values), Some(2.0));
    assert_eq!(max(&values), Some(3.0));
    assert_eq!(min(&values), Some(1.0));
    assert_eq!(sample_std_dev(&values), Some(1.0));
}

/// Types are accessible both from their modules and the re-exports.
#[test]
fn test_types_module_exports() {
    use forecast_core::types::error::SeriesError;
    use forecast_core::types::series::{ForecastPoint, ForecastSeries};
    use forecast_core::types::time::Date;
    use forecast_core::types::{HistoricalSeries, Observation};

    let date: Date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap().into();
    let series = ForecastSeries::new(vec![ForecastPoint::new(date, 1.0, 0.0, 2.0)], 1).unwrap();
    assert_eq!(series.horizon_len(), 0);

    let history = HistoricalSeries::new(vec![Observation::new(date, 1.0)]).unwrap();
    assert_eq!(history.len(), 1);

    let err: SeriesError = ForecastSeries::new(Vec::new(), 1).unwrap_err();
    assert!(matches!(err, SeriesError::HistoryTooLong { .. }));
}

/// A forecast series built from a history keeps the history prefix aligned.
#[test]
fn test_history_and_forecast_alignment() {
    use forecast_core::types::{Date, ForecastSeries, HistoricalSeries, Observation};

    let start = Date::from_ymd(2024, 1, 1).unwrap();
    let history = HistoricalSeries::new(
        (0..3)
            .map(|i| Observation::new(start.add_days(i), 100.0 + i as f64))
            .collect(),
    )
    .unwrap();

    let last = history.last().unwrap().ds;
    let mut dates: Vec<Date> = history.observations().iter().map(|o| o.ds).collect();
    dates.extend((1..=2).map(|k| last.add_days(k)));
    let point: Vec<f64> = (0..5).map(|i| 100.0 + i as f64).collect();
    let lower: Vec<f64> = point.iter().map(|p| p - 1.0).collect();
    let upper: Vec<f64> = point.iter().map(|p| p + 1.0).collect();

    let series = ForecastSeries::from_columns(dates, point, lower, upper, history.len()).unwrap();
    assert_eq!(series.history_len(), 3);
    assert_eq!(series.horizon()[0].date, start.add_days(3));
}
