//! Scenario command implementation
//!
//! Applies one custom scenario to the baseline and reports its impact.

use forecast_scenarios::{
    ImpactReport, ScenarioKind, ScenarioSpec, ScenarioSummary, DEFAULT_DURATION,
    DEFAULT_RECOVERY_DAYS,
};
use serde::Serialize;
use tracing::info;

use super::open_session;
use crate::config::WhatIfConfig;
use crate::error::{CliError, Result};
use crate::output::{self, OutputFormat, Table};

/// Registry name used for the scenario built from CLI flags.
pub const CUSTOM_SCENARIO: &str = "custom";

/// Scenario parameters as given on the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioArgs {
    /// `spike`, `gradual` or `event`
    pub kind: String,
    /// Signed magnitude in percent
    pub magnitude: f64,
    /// 1-based horizon start day
    pub start: usize,
    /// Ramp length for `gradual`
    pub duration: Option<usize>,
    /// Recovery length for `event`
    pub recovery: Option<usize>,
}

impl ScenarioArgs {
    /// Build a validated spec.
    ///
    /// # Errors
    /// `InvalidArgument` for an unknown kind or a length flag that does not
    /// apply to it; `Scenario` for out-of-range values.
    pub fn to_spec(&self) -> Result<ScenarioSpec> {
        let kind = match self.kind.trim().to_lowercase().as_str() {
            "spike" => {
                self.reject_length("duration", self.duration)?;
                self.reject_length("recovery", self.recovery)?;
                ScenarioKind::OneTimeSpike
            }
            "gradual" => {
                self.reject_length("recovery", self.recovery)?;
                ScenarioKind::GradualChange {
                    duration: self.duration.unwrap_or(DEFAULT_DURATION),
                }
            }
            "event" => {
                self.reject_length("duration", self.duration)?;
                ScenarioKind::MarketEvent {
                    recovery_days: self.recovery.unwrap_or(DEFAULT_RECOVERY_DAYS),
                }
            }
            other => {
                return Err(CliError::InvalidArgument(format!(
                    "Unknown scenario kind: {}. Supported: spike, gradual, event",
                    other
                )))
            }
        };
        Ok(ScenarioSpec::new(kind, self.magnitude, self.start)?)
    }

    fn reject_length(&self, flag: &str, value: Option<usize>) -> Result<()> {
        match value {
            Some(_) => Err(CliError::InvalidArgument(format!(
                "--{} does not apply to a {} scenario",
                flag, self.kind
            ))),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Serialize)]
struct ScenarioOutput<'a> {
    symbol: &'a str,
    narrative: String,
    summary: ScenarioSummary,
    impact: ImpactReport,
    headline: String,
}

/// Render the impact of `spec` on `symbol`.
pub fn execute(
    config: &WhatIfConfig,
    symbol: &str,
    spec: ScenarioSpec,
    format: OutputFormat,
) -> Result<String> {
    info!("Running scenario...");
    info!("  Symbol: {}", symbol);
    info!("  Scenario: {}", spec.description());

    let mut session = open_session(config, symbol)?;
    session.generate_baseline(config.periods)?;
    session.add_scenario(CUSTOM_SCENARIO, spec.clone(), config.periods)?;

    let summary = session.get_scenario_summary(CUSTOM_SCENARIO)?;
    let impact = session.impact_report(CUSTOM_SCENARIO)?;
    let narrative = spec.narrative();
    let headline = impact.headline();

    let rendered = match format {
        OutputFormat::Json => output::to_json(&ScenarioOutput {
            symbol,
            narrative,
            summary,
            impact,
            headline,
        })?,
        OutputFormat::Table => {
            let mut table = Table::new(["", "Price", "Change"]);
            table.push_row(vec!["Current".to_string(), output::price(impact.current_price)]);
            table.push_row(vec![
                "Baseline final".to_string(),
                output::price(impact.baseline_final),
                output::percent(impact.baseline_change_pct),
            ]);
            table.push_row(vec![
                "Scenario final".to_string(),
                output::price(impact.scenario_final),
                output::percent(impact.scenario_change_pct),
            ]);
            table.push_row(vec![
                "vs Baseline".to_string(),
                format!("{:+.2}", impact.delta_vs_baseline),
                output::percent(impact.impact_pct),
            ]);
            table.push_row(vec![
                "Scenario range".to_string(),
                format!(
                    "{} .. {}",
                    output::price(summary.min_price),
                    output::price(summary.max_price)
                ),
            ]);
            format!(
                "{} ({})\n\n{}\n\n{}\n\n{}",
                summary.description,
                symbol,
                narrative,
                table.render(),
                headline
            )
        }
    };

    info!("Scenario complete");
    Ok(rendered)
}

/// Print the impact of the scenario described by `args`.
pub fn run(config: &WhatIfConfig, symbol: &str, args: &ScenarioArgs, format: &str) -> Result<()> {
    let format: OutputFormat = format.parse()?;
    let spec = args.to_spec()?;
    println!("{}", execute(config, symbol, spec, format)?);
    Ok(())
}
