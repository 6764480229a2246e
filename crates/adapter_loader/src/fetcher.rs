//! Remote history retrieval seam.

use std::path::Path;

use crate::error::LoaderError;

/// Obtains daily history for a symbol and writes it to `destination` in the
/// `date,...,close,...` CSV layout the source reads.
pub trait HistoryFetcher: Send + Sync {
    /// Fetch `symbol` into `destination`.
    fn fetch(&self, symbol: &str, destination: &Path) -> Result<(), LoaderError>;
}

/// Fetcher for offline use; always fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopFetcher;

impl HistoryFetcher for NoopFetcher {
    fn fetch(&self, symbol: &str, _destination: &Path) -> Result<(), LoaderError> {
        Err(LoaderError::Fetch(format!(
            "no fetcher configured for {}",
            symbol
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_fetcher_fails() {
        let err = NoopFetcher
            .fetch("AAPL", Path::new("/tmp/AAPL_daily.csv"))
            .unwrap_err();
        assert!(matches!(err, LoaderError::Fetch(ref m) if m.contains("AAPL")));
    }
}
