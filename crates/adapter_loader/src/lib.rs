//! # Adapter Loader (A: Data Input)
//!
//! The DataSource boundary of the workspace.
//!
//! This crate provides:
//! - [`CsvHistorySource`]: reads `<data_dir>/<SYMBOL>_daily.csv` with
//!   `date` and `close` columns into a [`HistoricalSeries`]
//! - [`HistoryFetcher`]: the fetch half of fetch-then-retry, with
//!   [`NoopFetcher`] as the offline default
//! - [`LoaderError`]: structured loader errors
//!
//! ## Normalisation
//!
//! `date -> ds`, `close -> y`; rows whose close is empty or non-finite are
//! dropped; observations are sorted ascending by date.
//!
//! [`HistoricalSeries`]: forecast_core::types::HistoricalSeries

#![deny(missing_docs)]

mod error;
mod fetcher;
mod source;

pub use error::LoaderError;
pub use fetcher::{HistoryFetcher, NoopFetcher};
pub use source::{read_daily_csv, CsvHistorySource, HistorySource, DEFAULT_DATA_DIR, FILE_SUFFIX};
