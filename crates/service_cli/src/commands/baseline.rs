//! Baseline command implementation
//!
//! Forecasts the horizon for one symbol with no scenario applied.

use forecast_core::types::ForecastPoint;
use forecast_models::Forecaster;
use forecast_scenarios::{MetricKind, MetricSet, ScenarioError};
use serde::Serialize;
use tracing::info;

use super::open_session;
use crate::config::WhatIfConfig;
use crate::error::Result;
use crate::output::{self, OutputFormat, Table};

#[derive(Debug, Serialize)]
struct BaselineOutput<'a> {
    symbol: &'a str,
    forecaster: &'a str,
    periods: usize,
    current_price: Option<f64>,
    metrics: MetricSet,
    horizon: &'a [ForecastPoint],
}

/// Render the baseline forecast for `symbol`.
pub fn execute(config: &WhatIfConfig, symbol: &str, format: OutputFormat) -> Result<String> {
    info!("Generating baseline forecast...");
    info!("  Symbol: {}", symbol);
    info!("  Periods: {}", config.periods);

    let mut session = open_session(config, symbol)?;
    session.generate_baseline(config.periods)?;
    let current_price = session.current_price();
    let forecaster = session.forecaster().name().to_string();
    let baseline = session
        .baseline()
        .ok_or(ScenarioError::NoBaseline)?;

    let rendered = match format {
        OutputFormat::Json => output::to_json(&BaselineOutput {
            symbol,
            forecaster: &forecaster,
            periods: baseline.periods,
            current_price,
            metrics: baseline.metrics.select(&MetricKind::ALL),
            horizon: baseline.series.horizon(),
        })?,
        OutputFormat::Table => {
            let mut forecast = Table::new(["Date", "Forecast", "Lower", "Upper"]);
            for point in baseline.series.horizon() {
                forecast.push_row(vec![
                    point.date.to_string(),
                    output::price(point.point),
                    output::price(point.lower),
                    output::price(point.upper),
                ]);
            }

            let mut metrics = Table::new(["Metric", "Value"]);
            for (kind, value) in baseline.metrics.select(&MetricKind::ALL) {
                metrics.push_row(vec![kind.to_string(), output::price(value)]);
            }

            let current = current_price.map(output::price).unwrap_or_else(|| "-".to_string());
            format!(
                "Baseline forecast for {} ({} days, {})\nCurrent price: {}\n\n{}\n\n{}",
                symbol,
                baseline.periods,
                forecaster,
                current,
                forecast.render(),
                metrics.render()
            )
        }
    };

    info!("Baseline complete");
    Ok(rendered)
}

/// Print the baseline forecast for `symbol`.
pub fn run(config: &WhatIfConfig, symbol: &str, format: &str) -> Result<()> {
    let format: OutputFormat = format.parse()?;
    println!("{}", execute(config, symbol, format)?);
    Ok(())
}
