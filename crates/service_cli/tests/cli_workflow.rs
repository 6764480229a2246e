//! End-to-end command workflows over the bundled demo history.

use std::path::PathBuf;

use forecast_scenarios::MetricKind;
use service_cli::commands::{self, baseline, compare, scenario::ScenarioArgs};
use service_cli::output::OutputFormat;
use service_cli::{build_config, CliOverrides, ConfigError};

fn workspace_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/raw")
}

fn write_config(dir: &std::path::Path, body: &str) -> PathBuf {
    let path = dir.join("whatif.toml");
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn test_file_then_cli_priority() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        dir.path(),
        r#"
        periods = 45
        log_level = "warn"

        [forecaster]
        interval_width = 0.9
        "#,
    );

    let overrides = CliOverrides {
        data_dir: Some(workspace_data_dir()),
        periods: Some(15),
        ..Default::default()
    };
    let config = build_config(&path, &overrides).unwrap();
    assert_eq!(config.periods, 15);
    assert_eq!(config.log_level, "warn");
    assert_eq!(config.forecaster.interval_width, 0.9);
}

#[test]
fn test_invalid_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(dir.path(), "periods = 1000\n[shape]\nspike_decay_days = 0.0\n");

    match build_config(&path, &CliOverrides::default()) {
        Err(ConfigError::Validation(errors)) => {
            assert!(errors.iter().any(|e| e.contains("periods")));
            assert!(errors.iter().any(|e| e.contains("spike_decay_days")));
        }
        other => panic!("Expected validation error, got {:?}", other),
    }
}

#[test]
fn test_demo_baseline_and_comparison() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(dir.path(), "periods = 30\n");
    let config = build_config(
        &path,
        &CliOverrides {
            data_dir: Some(workspace_data_dir()),
            ..Default::default()
        },
    )
    .unwrap();

    let rendered = baseline::execute(&config, "DEMO", OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(value["horizon"].as_array().unwrap().len(), 30);

    let custom = ScenarioArgs {
        kind: "event".to_string(),
        magnitude: -10.0,
        start: 2,
        duration: None,
        recovery: Some(3),
    }
    .to_spec()
    .unwrap();
    let comparison = compare::compare(&config, "DEMO", Some(custom), &MetricKind::ALL).unwrap();
    assert_eq!(comparison.scenarios.len(), 4);
    assert_eq!(comparison.baseline.len(), 5);
    for metrics in comparison.scenarios.values() {
        assert!(metrics.metrics.contains_key(&MetricKind::FinalPrice));
    }
}

#[test]
fn test_unknown_symbol_reports_path() {
    let config = service_cli::WhatIfConfig {
        data_dir: workspace_data_dir(),
        ..Default::default()
    };
    let err = commands::open_session(&config, "MISSING").unwrap_err();
    assert!(err.to_string().contains("MISSING_daily.csv"));
}
