//! Loader error types.

use std::path::PathBuf;
use thiserror::Error;

/// History loading errors.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// Source file does not exist.
    #[error("History file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Malformed CSV content.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O failure other than a missing file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A field could not be interpreted.
    #[error("Parse error at line {line}: {message}")]
    Parse {
        /// 1-based line number in the source file
        line: u64,
        /// What went wrong
        message: String,
    },

    /// The fetcher could not obtain data.
    #[error("Fetch failed: {0}")]
    Fetch(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = LoaderError::NotFound(PathBuf::from("data/raw/AAPL_daily.csv"));
        assert_eq!(
            err.to_string(),
            "History file not found: data/raw/AAPL_daily.csv"
        );

        let err = LoaderError::Parse {
            line: 3,
            message: "bad date".to_string(),
        };
        assert_eq!(err.to_string(), "Parse error at line 3: bad date");
    }
}
