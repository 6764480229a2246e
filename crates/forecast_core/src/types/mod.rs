//! Core time and series types.
//!
//! This module provides:
//! - `time`: `Date`, a type-safe calendar date
//! - `series`: forecast records, forecast series and historical observations
//! - `error`: Structured error types for date and series construction
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Date`] from `time`
//! - [`ForecastPoint`], [`ForecastSeries`], [`Observation`], [`HistoricalSeries`] from `series`
//! - [`DateError`], [`SeriesError`] from `error`

pub mod error;
pub mod series;
pub mod time;

pub use error::{DateError, SeriesError};
pub use series::{ForecastPoint, ForecastSeries, HistoricalSeries, Observation};
pub use time::Date;
