//! End-to-end analysis sessions over the reference forecaster.

use approx::assert_relative_eq;
use forecast_core::types::{Date, HistoricalSeries, Observation};
use forecast_models::LinearTrendForecaster;
use forecast_scenarios::{
    ImpactLevel, MetricKind, PresetScenarioType, ScenarioEngine, ScenarioError, ScenarioSpec,
    ShapeParams, WhatIfAnalyzer,
};

fn trending_history() -> HistoricalSeries {
    let start = Date::from_ymd(2024, 3, 1).unwrap();
    let wiggle = [0.0, 0.6, -0.4, 0.3, -0.5, 0.2];
    HistoricalSeries::new(
        (0..60)
            .map(|i| {
                let y = 150.0 + 0.5 * i as f64 + wiggle[i % wiggle.len()];
                Observation::new(start.add_days(i as i64), y)
            })
            .collect(),
    )
    .unwrap()
}

#[test]
fn test_preset_session() {
    let mut analyzer =
        WhatIfAnalyzer::new(trending_history(), LinearTrendForecaster::default()).unwrap();
    let baseline_len = analyzer.generate_baseline(30).unwrap().len();
    assert_eq!(baseline_len, 90);

    analyzer
        .add_scenarios(PresetScenarioType::generate_all(), 30)
        .unwrap();
    assert_eq!(analyzer.scenario_count(), 3);

    let cmp = analyzer.compare_scenarios(&MetricKind::ALL).unwrap();
    let base_final = cmp.baseline[&MetricKind::FinalPrice];

    // Crash recovers fully before the horizon ends
    let crash = &cmp.scenarios["market_crash"];
    assert_eq!(crash.metrics[&MetricKind::FinalPrice], base_final);
    assert_eq!(crash.vs_baseline.final_price_diff, 0.0);
    assert!(crash.metrics[&MetricKind::MinPrice] < cmp.baseline[&MetricKind::MinPrice]);

    // Rotation is sustained at +8%
    let rotation = &cmp.scenarios["sector_rotation"];
    assert_relative_eq!(rotation.vs_baseline.final_price_pct, 8.0, epsilon = 1e-9);

    // Earnings beat has mostly decayed by day 30
    let beat = &cmp.scenarios["earnings_beat"];
    let expected = 15.0 * (-20.0_f64 / 10.0).exp();
    assert_relative_eq!(beat.vs_baseline.final_price_pct, expected, epsilon = 1e-9);

    let report = analyzer.impact_report("sector_rotation").unwrap();
    assert_eq!(report.level, ImpactLevel::Significant);
    assert_eq!(report.current_price, analyzer.current_price().unwrap());
}

#[test]
fn test_custom_shape_params_flow_through() {
    let engine = ScenarioEngine::new(ShapeParams::default().with_spike_decay_days(2.0)).unwrap();
    let mut analyzer = WhatIfAnalyzer::new(trending_history(), LinearTrendForecaster::default())
        .unwrap()
        .with_engine(engine);
    analyzer.generate_baseline(10).unwrap();
    analyzer
        .add_scenario("beat", ScenarioSpec::one_time_spike(10.0, 1).unwrap(), 10)
        .unwrap();
    let cmp = analyzer.compare_scenarios(&[MetricKind::FinalPrice]).unwrap();
    let expected = 10.0 * (-9.0_f64 / 2.0).exp();
    assert_relative_eq!(
        cmp.scenarios["beat"].vs_baseline.final_price_pct,
        expected,
        epsilon = 1e-9
    );
}

#[test]
fn test_short_history_is_insufficient_history() {
    let start = Date::from_ymd(2024, 1, 1).unwrap();
    let history = HistoricalSeries::new(vec![Observation::new(start, 10.0)]).unwrap();
    let mut analyzer = WhatIfAnalyzer::new(history, LinearTrendForecaster::default()).unwrap();
    assert_eq!(
        analyzer.generate_baseline(5).unwrap_err(),
        ScenarioError::InsufficientHistory { got: 1 }
    );
    assert!(analyzer.baseline().is_none());
}

#[test]
fn test_start_beyond_horizon_equals_baseline() {
    let mut analyzer =
        WhatIfAnalyzer::new(trending_history(), LinearTrendForecaster::default()).unwrap();
    analyzer.generate_baseline(5).unwrap();
    let out = analyzer
        .add_scenario("late", ScenarioSpec::one_time_spike(10.0, 6).unwrap(), 5)
        .unwrap()
        .clone();
    assert_eq!(&out, &analyzer.baseline().unwrap().series);
}
