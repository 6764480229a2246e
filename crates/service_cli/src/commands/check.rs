//! Check command implementation
//!
//! Validates the configuration and, optionally, the history file of one
//! symbol without running a forecast.

use std::path::Path;

use adapter_loader::{read_daily_csv, CsvHistorySource};
use forecast_models::LinearTrendForecaster;
use tracing::info;

use crate::config::{ConfigError, WhatIfConfig};
use crate::error::{CliError, Result};
use crate::output::Table;

/// Outcome of one readiness check.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckItem {
    /// What was checked
    pub name: String,
    /// Whether it passed
    pub ok: bool,
    /// Human-readable detail
    pub detail: String,
}

impl CheckItem {
    fn pass(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ok: true,
            detail: detail.into(),
        }
    }

    fn fail(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ok: false,
            detail: detail.into(),
        }
    }
}

/// All checks in run order.
#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    items: Vec<CheckItem>,
}

impl CheckReport {
    /// Individual results.
    pub fn items(&self) -> &[CheckItem] {
        &self.items
    }

    /// Number of failed checks.
    pub fn failures(&self) -> usize {
        self.items.iter().filter(|i| !i.ok).count()
    }

    /// Render as a table.
    pub fn render(&self) -> String {
        let mut table = Table::new(["Check", "Status", "Detail"]);
        for item in &self.items {
            table.push_row(vec![
                item.name.clone(),
                if item.ok { "ok" } else { "FAIL" }.to_string(),
                item.detail.clone(),
            ]);
        }
        table.render()
    }
}

/// Run every check.
///
/// `built` is the outcome of building the configuration from `config_path`,
/// the environment and CLI flags.
pub fn execute(
    config_path: &Path,
    built: std::result::Result<WhatIfConfig, ConfigError>,
    symbol: Option<&str>,
) -> CheckReport {
    let mut items = Vec::new();

    items.push(CheckItem::pass(
        "config file",
        if config_path.exists() {
            format!("{} (loaded)", config_path.display())
        } else {
            format!("{} (not found, using defaults)", config_path.display())
        },
    ));

    let config = match built {
        Ok(config) => {
            items.push(CheckItem::pass("configuration", "valid"));
            config
        }
        Err(err) => {
            items.push(CheckItem::fail("configuration", err.to_string()));
            return CheckReport { items };
        }
    };

    items.push(CheckItem::pass(
        "horizon",
        format!("{} days", config.periods),
    ));

    match LinearTrendForecaster::new(config.forecaster.interval_width) {
        Ok(f) => items.push(CheckItem::pass(
            "forecaster",
            format!(
                "linear_trend, {:.0}% interval (z = {:.3})",
                f.interval_width() * 100.0,
                f.z_score()
            ),
        )),
        Err(err) => items.push(CheckItem::fail("forecaster", err.to_string())),
    }

    if config.data_dir.is_dir() {
        items.push(CheckItem::pass(
            "data_dir",
            config.data_dir.display().to_string(),
        ));
    } else {
        items.push(CheckItem::fail(
            "data_dir",
            format!("{} is not a directory", config.data_dir.display()),
        ));
    }

    if let Some(symbol) = symbol {
        let path = CsvHistorySource::new(config.data_dir.clone()).path_for(symbol);
        let name = format!("history {}", symbol.trim());
        match read_daily_csv(&path) {
            Ok(history) => match (history.first(), history.last()) {
                (Some(first), Some(last)) => items.push(CheckItem::pass(
                    name,
                    format!(
                        "{} observations, {} to {}",
                        history.len(),
                        first.ds,
                        last.ds
                    ),
                )),
                _ => items.push(CheckItem::fail(
                    name,
                    format!("{} has no usable rows", path.display()),
                )),
            },
            Err(err) => items.push(CheckItem::fail(name, err.to_string())),
        }
    }

    CheckReport { items }
}

/// Print the check report; fails if any check failed.
pub fn run(
    config_path: &Path,
    built: std::result::Result<WhatIfConfig, ConfigError>,
    symbol: Option<&str>,
) -> Result<()> {
    info!("Checking configuration...");
    info!("  Config: {}", config_path.display());

    let report = execute(config_path, built, symbol);
    println!("{}", report.render());

    match report.failures() {
        0 => {
            info!("All checks passed");
            Ok(())
        }
        n => Err(CliError::InvalidArgument(format!("{} check(s) failed", n))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::write_history;

    #[test]
    fn test_all_checks_pass() {
        let dir = tempfile::tempdir().unwrap();
        write_history(dir.path(), "ACME", 10);
        let config = WhatIfConfig {
            data_dir: dir.path().to_path_buf(),
            ..Default::default()
        };

        let report = execute(&dir.path().join("whatif.toml"), Ok(config), Some("ACME"));
        assert_eq!(report.failures(), 0);
        let names: Vec<&str> = report.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["config file", "configuration", "horizon", "forecaster", "data_dir", "history ACME"]
        );
        assert!(report.items()[0].detail.contains("using defaults"));
        assert!(report.items()[5].detail.contains("2024-01-01 to 2024-01-10"));
        assert!(report.items()[3].detail.contains("z = 1.960"));
    }

    #[test]
    fn test_invalid_config_stops_early() {
        let dir = tempfile::tempdir().unwrap();
        let built = Err(ConfigError::Validation(vec![
            "periods 0 must be between 1 and 365".to_string(),
        ]));

        let report = execute(&dir.path().join("whatif.toml"), built, Some("ACME"));
        assert_eq!(report.items().len(), 2);
        assert_eq!(report.failures(), 1);
        assert!(report.render().contains("FAIL"));
    }

    #[test]
    fn test_missing_symbol_and_dir_fail() {
        let dir = tempfile::tempdir().unwrap();
        let config = WhatIfConfig {
            data_dir: dir.path().join("absent"),
            ..Default::default()
        };
        let config_path = dir.path().join("whatif.toml");

        let report = execute(&config_path, Ok(config.clone()), Some("ACME"));
        assert_eq!(report.failures(), 2);
        assert!(run(&config_path, Ok(config), None).is_err());
    }
}
