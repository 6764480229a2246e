//! Error types for structured error handling.
//!
//! This module provides:
//! - `DateError`: Errors from date construction and parsing
//! - `SeriesError`: Errors from forecast/history series construction

use std::fmt;
use thiserror::Error;

/// Date-related errors.
///
/// # Variants
/// - `InvalidDate`: Invalid date components (e.g., February 30th)
/// - `ParseError`: Failed to parse date string
///
/// # Examples
/// ```
/// use forecast_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2024-2-30");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse date string.
    ParseError(String),
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateError::InvalidDate { year, month, day } => {
                write!(f, "Invalid date: {}-{}-{}", year, month, day)
            }
            DateError::ParseError(msg) => write!(f, "Date parse error: {}", msg),
        }
    }
}

impl std::error::Error for DateError {}

/// Series construction errors.
///
/// Raised when a forecast or history container would break one of its
/// structural invariants.
///
/// # Examples
/// ```
/// use forecast_core::types::SeriesError;
///
/// let err = SeriesError::IntervalOrdering { index: 3 };
/// assert!(format!("{}", err).contains("index 3"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeriesError {
    /// Parallel column inputs have different lengths.
    #[error("Column length mismatch: dates={dates}, point={point}, lower={lower}, upper={upper}")]
    LengthMismatch {
        /// Number of dates
        dates: usize,
        /// Number of point estimates
        point: usize,
        /// Number of lower bounds
        lower: usize,
        /// Number of upper bounds
        upper: usize,
    },

    /// The declared history length exceeds the number of records.
    #[error("History length {history_len} exceeds series length {len}")]
    HistoryTooLong {
        /// Declared history length
        history_len: usize,
        /// Number of records
        len: usize,
    },

    /// A record violates `lower <= point <= upper`.
    #[error("Interval ordering violated at index {index}")]
    IntervalOrdering {
        /// Offending record index
        index: usize,
    },

    /// A record contains NaN or infinity.
    #[error("Non-finite value at index {index}")]
    NonFinite {
        /// Offending record index
        index: usize,
    },

    /// Dates are not strictly increasing.
    #[error("Dates not strictly increasing at index {index}")]
    UnorderedDates {
        /// Offending record index
        index: usize,
    },
}
