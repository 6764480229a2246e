//! Criterion benchmarks for forecast_scenarios.
//!
//! Benchmarks cover:
//! - Scenario application per shape over varying horizon lengths
//! - Parallel preset batch evaluation in a session

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use forecast_core::types::{Date, ForecastPoint, ForecastSeries, HistoricalSeries, Observation};
use forecast_models::LinearTrendForecaster;
use forecast_scenarios::{PresetScenarioType, ScenarioEngine, WhatIfAnalyzer};

/// Synthetic baseline: `history` flat records followed by a gentle ramp.
fn generate_baseline(history: usize, horizon: usize) -> ForecastSeries {
    let start = Date::from_ymd(2024, 1, 1).unwrap();
    ForecastSeries::new(
        (0..history + horizon)
            .map(|i| {
                let v = 100.0 + i as f64 * 0.1;
                ForecastPoint::new(start.add_days(i as i64), v, v * 0.95, v * 1.05)
            })
            .collect(),
        history,
    )
    .unwrap()
}

fn generate_history(n: usize) -> HistoricalSeries {
    let start = Date::from_ymd(2024, 1, 1).unwrap();
    HistoricalSeries::new(
        (0..n)
            .map(|i| {
                // Uptrend with a deterministic wiggle
                let wiggle = ((i * 37) % 11) as f64 - 5.0;
                Observation::new(start.add_days(i as i64), 100.0 + i as f64 * 0.2 + wiggle * 0.1)
            })
            .collect(),
    )
    .unwrap()
}

/// Benchmark one scenario application per preset shape.
fn bench_engine_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_apply");
    let engine = ScenarioEngine::default();

    for horizon in [30, 365, 3650] {
        let baseline = generate_baseline(250, horizon);
        for preset in PresetScenarioType::all() {
            let spec = preset.generate();
            group.bench_with_input(
                BenchmarkId::new(preset.key(), horizon),
                &baseline,
                |b, baseline| {
                    b.iter(|| engine.apply(black_box(baseline), black_box(&spec), 250));
                },
            );
        }
    }

    group.finish();
}

/// Benchmark baseline regeneration, which re-evaluates stored scenarios.
fn bench_session_rebaseline(c: &mut Criterion) {
    let mut group = c.benchmark_group("session_rebaseline");

    for n_scenarios in [3, 30, 300] {
        let mut analyzer =
            WhatIfAnalyzer::new(generate_history(500), LinearTrendForecaster::default()).unwrap();
        analyzer.generate_baseline(90).unwrap();
        let batch: Vec<_> = (0..n_scenarios)
            .map(|i| {
                let preset = PresetScenarioType::all()[i % 3];
                (format!("{}_{}", preset.key(), i), preset.generate())
            })
            .collect();
        analyzer.add_scenarios(batch, 90).unwrap();

        group.bench_function(BenchmarkId::from_parameter(n_scenarios), |b| {
            b.iter(|| analyzer.generate_baseline(black_box(90)).map(|s| s.len()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_engine_apply, bench_session_rebaseline);
criterion_main!(benches);
