//! whatif CLI - What-If Scenario Forecasting
//!
//! This is the operational entry point for baseline forecasts and scenario
//! analysis over daily price history.
//!
//! # Commands
//!
//! - `whatif baseline <SYMBOL>` - Forecast the horizon with no scenario
//! - `whatif scenario <SYMBOL> --kind <KIND> --magnitude <PCT>` - Impact of one scenario
//! - `whatif compare <SYMBOL>` - Compare the preset scenarios
//! - `whatif check` - Validate configuration and data files
//!
//! # Configuration
//!
//! Settings come from `whatif.toml`, then `WHATIF_*` environment variables,
//! then the global flags below. `RUST_LOG` takes precedence over the
//! configured log level.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use service_cli::commands::{self, scenario::ScenarioArgs};
use service_cli::{build_config, CliOverrides};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// What-if scenario forecasting CLI
#[derive(Parser)]
#[command(name = "whatif")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "whatif.toml")]
    config: PathBuf,

    /// Directory holding <SYMBOL>_daily.csv files
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Forecast horizon in days
    #[arg(short, long, global = true)]
    periods: Option<usize>,

    /// Forecast interval coverage in (0, 1)
    #[arg(long, global = true)]
    interval_width: Option<f64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the baseline forecast
    Baseline {
        /// Ticker symbol
        symbol: String,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Apply one scenario and report its impact
    Scenario {
        /// Ticker symbol
        symbol: String,

        /// Scenario kind (spike, gradual, event)
        #[arg(short, long)]
        kind: String,

        /// Signed magnitude in percent
        #[arg(short, long, allow_hyphen_values = true)]
        magnitude: f64,

        /// First affected horizon day (1-based)
        #[arg(short, long, default_value = "1")]
        start: usize,

        /// Ramp length in days (gradual)
        #[arg(long)]
        duration: Option<usize>,

        /// Recovery length in days (event)
        #[arg(long)]
        recovery: Option<usize>,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Compare the preset scenarios, plus an optional custom one
    Compare {
        /// Ticker symbol
        symbol: String,

        /// Metrics to report (final_price, max_price, min_price, volatility, avg_price)
        #[arg(long, value_delimiter = ',')]
        metrics: Vec<String>,

        /// Custom scenario kind (spike, gradual, event)
        #[arg(short, long, requires = "magnitude")]
        kind: Option<String>,

        /// Custom scenario magnitude in percent
        #[arg(short, long, allow_hyphen_values = true, requires = "kind")]
        magnitude: Option<f64>,

        /// Custom scenario start day (1-based)
        #[arg(short, long, default_value = "1")]
        start: usize,

        /// Custom scenario ramp length (gradual)
        #[arg(long)]
        duration: Option<usize>,

        /// Custom scenario recovery length (event)
        #[arg(long)]
        recovery: Option<usize>,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Validate configuration and data files
    Check {
        /// Also check the history file of this symbol
        symbol: Option<String>,
    },
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        data_dir: cli.data_dir.clone(),
        log_level: cli
            .log_level
            .clone()
            .or_else(|| cli.verbose.then(|| "debug".to_string())),
        periods: cli.periods,
        interval_width: cli.interval_width,
    };
    let built = build_config(&cli.config, &overrides);

    if let Commands::Check { symbol } = &cli.command {
        let level = built
            .as_ref()
            .map(|c| c.log_level.clone())
            .unwrap_or_else(|_| "info".to_string());
        init_tracing(&level);
        commands::check::run(&cli.config, built, symbol.as_deref())?;
        return Ok(());
    }

    let config = built
        .with_context(|| format!("failed to load configuration from {}", cli.config.display()))?;
    init_tracing(&config.log_level);

    match cli.command {
        Commands::Baseline { symbol, format } => {
            commands::baseline::run(&config, &symbol, &format)?;
        }
        Commands::Scenario {
            symbol,
            kind,
            magnitude,
            start,
            duration,
            recovery,
            format,
        } => {
            let args = ScenarioArgs {
                kind,
                magnitude,
                start,
                duration,
                recovery,
            };
            commands::scenario::run(&config, &symbol, &args, &format)?;
        }
        Commands::Compare {
            symbol,
            metrics,
            kind,
            magnitude,
            start,
            duration,
            recovery,
            format,
        } => {
            let metrics = commands::parse_metrics(&metrics)?;
            let custom = match (kind, magnitude) {
                (Some(kind), Some(magnitude)) => Some(
                    ScenarioArgs {
                        kind,
                        magnitude,
                        start,
                        duration,
                        recovery,
                    }
                    .to_spec()?,
                ),
                _ => None,
            };
            commands::compare::run(&config, &symbol, custom, &metrics, &format)?;
        }
        Commands::Check { .. } => {}
    }

    Ok(())
}
