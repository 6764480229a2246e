//! Integration tests for the history source boundary.

use std::path::PathBuf;

use adapter_loader::{CsvHistorySource, HistorySource};

fn workspace_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/raw")
}

#[test]
fn test_bundled_demo_history() {
    let source = CsvHistorySource::new(workspace_data_dir());
    let history = source.try_load("DEMO").unwrap();
    assert_eq!(history.len(), 120);

    let dates: Vec<_> = history.observations().iter().map(|o| o.ds).collect();
    assert!(dates.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_source_as_trait_object() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("ABC_daily.csv"),
        "date,close\n2024-05-01,10.5\n2024-05-02,10.7\n",
    )
    .unwrap();

    let source: Box<dyn HistorySource> = Box::new(CsvHistorySource::new(dir.path()));
    let history = source.load_history("ABC");
    assert_eq!(history.last().unwrap().y, 10.7);
    assert!(source.load_history("MISSING").is_empty());
}
