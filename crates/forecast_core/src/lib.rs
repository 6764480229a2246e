//! # forecast_core: Foundation Types for What-If Forecasting
//!
//! ## Layer 1 (Foundation) Role
//!
//! forecast_core is the bottom layer of the workspace, providing:
//! - Calendar dates: `Date` (`types::time`)
//! - Forecast and history containers: `ForecastPoint`, `ForecastSeries`,
//!   `Observation`, `HistoricalSeries` (`types::series`)
//! - Error types: `DateError`, `SeriesError` (`types::error`)
//! - Descriptive statistics over point values (`math::statistics`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other workspace crates, with minimal external dependencies:
//! - num-traits: Generic floating-point bound for statistics
//! - chrono: Date arithmetic
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use forecast_core::types::{Date, ForecastPoint, ForecastSeries};
//! use forecast_core::math::statistics::mean;
//!
//! let start = Date::from_ymd(2024, 1, 1).unwrap();
//! let points = (0..3)
//!     .map(|i| ForecastPoint::new(start.add_days(i), 100.0, 95.0, 105.0))
//!     .collect();
//! let series = ForecastSeries::new(points, 1).unwrap();
//!
//! assert_eq!(series.len(), 3);
//! assert_eq!(series.horizon_len(), 2);
//! assert_eq!(mean(&series.point_values()), Some(100.0));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `Date` and the series types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
