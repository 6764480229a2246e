//! CSV-backed history source.

use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use forecast_core::types::{Date, HistoricalSeries, Observation};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::LoaderError;
use crate::fetcher::{HistoryFetcher, NoopFetcher};

/// Default directory holding `<SYMBOL>_daily.csv` files.
pub const DEFAULT_DATA_DIR: &str = "data/raw";

/// File name suffix appended to the symbol.
pub const FILE_SUFFIX: &str = "_daily.csv";

/// Anything that can supply a history for a symbol.
///
/// Failures degrade to an empty series; callers decide whether that is
/// usable.
pub trait HistorySource {
    /// Load the history for `symbol`.
    fn load_history(&self, symbol: &str) -> HistoricalSeries;
}

/// One row of a daily price export. Other columns are ignored.
#[derive(Debug, Deserialize)]
struct DailyRow {
    #[serde(alias = "Date", alias = "timestamp")]
    date: String,
    #[serde(alias = "Close")]
    close: Option<f64>,
}

/// Reads daily closes from `<data_dir>/<SYMBOL>_daily.csv`.
///
/// A missing file is fetched once through the configured
/// [`HistoryFetcher`] and read again.
///
/// # Examples
/// ```
/// use adapter_loader::CsvHistorySource;
/// use std::path::Path;
///
/// let source = CsvHistorySource::new("data/raw");
/// assert_eq!(source.path_for("AAPL"), Path::new("data/raw/AAPL_daily.csv"));
/// ```
#[derive(Debug, Clone)]
pub struct CsvHistorySource<F: HistoryFetcher = NoopFetcher> {
    data_dir: PathBuf,
    fetcher: F,
}

impl CsvHistorySource<NoopFetcher> {
    /// Create a source over `data_dir` with no fetcher.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            fetcher: NoopFetcher,
        }
    }
}

impl Default for CsvHistorySource<NoopFetcher> {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR)
    }
}

impl<F: HistoryFetcher> CsvHistorySource<F> {
    /// Replace the fetcher.
    pub fn with_fetcher<G: HistoryFetcher>(self, fetcher: G) -> CsvHistorySource<G> {
        CsvHistorySource {
            data_dir: self.data_dir,
            fetcher,
        }
    }

    /// Data directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// File path for `symbol`.
    pub fn path_for(&self, symbol: &str) -> PathBuf {
        self.data_dir
            .join(format!("{}{}", symbol.trim(), FILE_SUFFIX))
    }

    /// Load `symbol`, fetching once if the file is missing.
    ///
    /// # Errors
    /// The error of the final attempt.
    pub fn try_load(&self, symbol: &str) -> Result<HistoricalSeries, LoaderError> {
        let path = self.path_for(symbol);
        match read_daily_csv(&path) {
            Err(LoaderError::NotFound(_)) => {
                info!(symbol, path = %path.display(), "History file not found; fetching");
                self.fetcher.fetch(symbol, &path)?;
                read_daily_csv(&path)
            }
            other => other,
        }
    }
}

impl<F: HistoryFetcher> HistorySource for CsvHistorySource<F> {
    fn load_history(&self, symbol: &str) -> HistoricalSeries {
        match self.try_load(symbol) {
            Ok(history) => history,
            Err(err) => {
                warn!(symbol, error = %err, "Could not load history; using empty series");
                HistoricalSeries::empty()
            }
        }
    }
}

/// Read and normalise one daily CSV file.
///
/// # Errors
/// - `NotFound` if `path` does not exist
/// - `Csv` for malformed rows or a missing `date`/`close` column
/// - `Parse` for an unrecognised date
pub fn read_daily_csv(path: &Path) -> Result<HistoricalSeries, LoaderError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(LoaderError::NotFound(path.to_path_buf()))
        }
        Err(err) => return Err(err.into()),
    };

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut observations = Vec::new();
    let mut dropped = 0usize;
    for (i, row) in reader.deserialize::<DailyRow>().enumerate() {
        let row = row?;
        // Header is line 1
        let line = i as u64 + 2;
        let ds = Date::parse(&row.date).map_err(|e| LoaderError::Parse {
            line,
            message: e.to_string(),
        })?;
        match row.close {
            Some(y) if y.is_finite() => observations.push(Observation::new(ds, y)),
            _ => dropped += 1,
        }
    }

    if dropped > 0 {
        warn!(path = %path.display(), dropped, "Dropped rows without a close");
    }

    let history = HistoricalSeries::new(observations).map_err(|e| LoaderError::Parse {
        line: 0,
        message: e.to_string(),
    })?;
    debug!(path = %path.display(), observations = history.len(), "Loaded history");
    Ok(history)
}
