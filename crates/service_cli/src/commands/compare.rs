//! Compare command implementation
//!
//! Runs the preset scenarios (plus an optional custom one) against a single
//! baseline and tabulates the requested metrics.

use forecast_scenarios::{MetricKind, PresetScenarioType, ScenarioComparison, ScenarioSpec};
use tracing::info;

use super::open_session;
use super::scenario::CUSTOM_SCENARIO;
use crate::config::WhatIfConfig;
use crate::error::Result;
use crate::output::{self, OutputFormat, Table};

/// Compare presets and `custom` for `symbol`.
pub fn compare(
    config: &WhatIfConfig,
    symbol: &str,
    custom: Option<ScenarioSpec>,
    metrics: &[MetricKind],
) -> Result<ScenarioComparison> {
    info!("Comparing scenarios...");
    info!("  Symbol: {}", symbol);
    info!("  Metrics: {:?}", metrics);

    let mut session = open_session(config, symbol)?;
    session.generate_baseline(config.periods)?;
    session.add_scenarios(PresetScenarioType::generate_all(), config.periods)?;
    if let Some(spec) = custom {
        session.add_scenario(CUSTOM_SCENARIO, spec, config.periods)?;
    }

    info!("  Scenarios: {}", session.scenario_count());
    Ok(session.compare_scenarios(metrics)?)
}

/// Render a comparison as a table with one row per scenario.
pub fn render_table(comparison: &ScenarioComparison, metrics: &[MetricKind]) -> String {
    let mut headers = vec!["Scenario".to_string()];
    headers.extend(metrics.iter().map(|k| k.to_string()));
    headers.push("vs baseline".to_string());
    headers.push("vs baseline %".to_string());

    let cell = |set: &forecast_scenarios::MetricSet, kind: &MetricKind| {
        set.get(kind)
            .map(|&v| output::price(v))
            .unwrap_or_else(|| "-".to_string())
    };

    let mut table = Table::new(headers);
    let mut row = vec!["baseline".to_string()];
    row.extend(metrics.iter().map(|k| cell(&comparison.baseline, k)));
    row.push("-".to_string());
    row.push("-".to_string());
    table.push_row(row);

    for (name, scenario) in &comparison.scenarios {
        let mut row = vec![name.clone()];
        row.extend(metrics.iter().map(|k| cell(&scenario.metrics, k)));
        row.push(format!("{:+.2}", scenario.vs_baseline.final_price_diff));
        row.push(output::percent(scenario.vs_baseline.final_price_pct));
        table.push_row(row);
    }
    table.render()
}

/// Print the comparison.
pub fn run(
    config: &WhatIfConfig,
    symbol: &str,
    custom: Option<ScenarioSpec>,
    metrics: &[MetricKind],
    format: &str,
) -> Result<()> {
    let format: OutputFormat = format.parse()?;
    let comparison = compare(config, symbol, custom, metrics)?;
    match format {
        OutputFormat::Json => println!("{}", output::to_json(&comparison)?),
        OutputFormat::Table => {
            println!("Scenario comparison for {} ({} days)\n", symbol, config.periods);
            println!("{}", render_table(&comparison, metrics));
        }
    }
    info!("Comparison complete");
    Ok(())
}
