//! Contract tests for the `Forecaster` boundary.

use forecast_core::types::{Date, HistoricalSeries, Observation};
use forecast_models::{Forecaster, LinearTrendForecaster};
use proptest::prelude::*;

fn history(values: &[f64]) -> HistoricalSeries {
    let start = Date::from_ymd(2023, 6, 1).unwrap();
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
fn test_forecaster_is_object_safe() {
    let boxed: Box<dyn Forecaster> = Box::new(LinearTrendForecaster::default());
    assert_eq!(boxed.name(), "linear_trend");
    let series = boxed.forecast(&history(&[1.0, 2.0, 3.0]), 4).unwrap();
    assert_eq!(series.len(), 7);
}

#[test]
fn test_history_dates_are_preserved() {
    let h = history(&[5.0, 6.0, 5.5, 7.0]);
    let series = LinearTrendForecaster::default().forecast(&h, 2).unwrap();
    for (obs, p) in h.observations().iter().zip(series.iter()) {
        assert_eq!(obs.ds, p.date);
    }
}

proptest! {
    #[test]
    fn prop_length_and_ordering(
        values in prop::collection::vec(1.0_f64..1000.0, 2..60),
        periods in 0_usize..90,
    ) {
        let h = history(&values);
        let series = LinearTrendForecaster::default().forecast(&h, periods).unwrap();
        prop_assert_eq!(series.len(), values.len() + periods);
        prop_assert_eq!(series.history_len(), values.len());
        for p in series.iter() {
            prop_assert!(p.lower <= p.point && p.point <= p.upper);
        }
    }
}
