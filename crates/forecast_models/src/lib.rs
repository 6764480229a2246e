//! # Forecast Models (L2: Baseline Forecasting)
//!
//! The Forecaster boundary of the workspace.
//!
//! This crate provides:
//! - The [`Forecaster`] trait: `forecast(history, periods) -> ForecastSeries`
//! - [`LinearTrendForecaster`]: a least-squares trend with normal
//!   prediction bands, used as the reference baseline
//! - Standard normal distribution helpers (`distributions`)
//!
//! ## Contract
//!
//! Every forecaster returns `history.len() + periods` records. The first
//! `history.len()` reproduce the in-sample fit and carry the history's dates;
//! the remainder are dated on successive calendar days after the last
//! observation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod distributions;
pub mod error;
pub mod forecasters;

pub use error::ForecastError;
pub use forecasters::{Forecaster, LinearTrendForecaster, DEFAULT_INTERVAL_WIDTH};
