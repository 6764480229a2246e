//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod baseline;
pub mod check;
pub mod compare;
pub mod scenario;

use adapter_loader::CsvHistorySource;
use forecast_models::LinearTrendForecaster;
use forecast_scenarios::{MetricKind, ScenarioEngine, ScenarioError, WhatIfAnalyzer};
use tracing::info;

use crate::config::WhatIfConfig;
use crate::error::{CliError, Result};

/// Session type driven by every command.
pub type Session = WhatIfAnalyzer<LinearTrendForecaster>;

/// Load `symbol` from the configured data directory and start a session.
///
/// # Errors
/// - `FileNotFound` if `<data_dir>/<SYMBOL>_daily.csv` does not exist
/// - `Loader` if the file cannot be parsed
/// - `Scenario` if the file holds no usable rows
pub fn open_session(config: &WhatIfConfig, symbol: &str) -> Result<Session> {
    let source = CsvHistorySource::new(config.data_dir.clone());
    let path = source.path_for(symbol);
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }

    let history = source.try_load(symbol)?;
    info!("  History: {} ({} observations)", path.display(), history.len());

    let forecaster =
        LinearTrendForecaster::new(config.forecaster.interval_width).map_err(ScenarioError::from)?;
    let engine = ScenarioEngine::new(config.shape)?;

    Ok(WhatIfAnalyzer::new(history, forecaster)?.with_engine(engine))
}

/// Parse metric names, defaulting to [`MetricKind::DEFAULT`].
pub fn parse_metrics(names: &[String]) -> Result<Vec<MetricKind>> {
    if names.is_empty() {
        return Ok(MetricKind::DEFAULT.to_vec());
    }
    names
        .iter()
        .map(|name| {
            let needle = name.trim().to_lowercase();
            MetricKind::ALL
                .into_iter()
                .find(|kind| kind.name() == needle)
                .ok_or_else(|| {
                    let supported: Vec<&str> = MetricKind::ALL.iter().map(|k| k.name()).collect();
                    CliError::InvalidArgument(format!(
                        "Unknown metric: {}. Supported: {}",
                        name,
                        supported.join(", ")
                    ))
                })
        })
        .collect()
}

#[cfg(test)]
pub(crate) mod fixtures {
    use std::fmt::Write as _;
    use std::path::Path;

    use forecast_core::types::Date;

    /// Write `<dir>/<symbol>_daily.csv` with a steady uptrend.
    pub fn write_history(dir: &Path, symbol: &str, rows: usize) {
        let start = Date::from_ymd(2024, 1, 1).unwrap();
        let mut csv = String::from("date,open,high,low,close,volume\n");
        for i in 0..rows {
            let close = 100.0 + i as f64 * 0.5 + if i % 2 == 0 { 0.3 } else { -0.3 };
            writeln!(
                csv,
                "{},{:.2},{:.2},{:.2},{:.2},1000",
                start.add_days(i as i64),
                close,
                close + 1.0,
                close - 1.0,
                close
            )
            .unwrap();
        }
        std::fs::write(dir.join(format!("{}_daily.csv", symbol)), csv).unwrap();
    }
}
