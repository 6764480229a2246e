//! Numerical helpers over series columns.
//!
//! This module provides:
//! - `statistics`: Descriptive statistics (mean, sample standard deviation,
//!   extrema) used by scenario metrics

pub mod statistics;
