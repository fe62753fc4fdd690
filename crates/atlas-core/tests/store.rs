use std::sync::Arc;

use atlas_core::{DashboardError, DashboardStore, PipelineOptions, StoreConfig};
use atlas_lookup::CountryTable;

fn write_sheet(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("members.csv");
    std::fs::write(&path, contents).expect("write sheet");
    path
}

#[test]
fn load_returns_the_same_snapshot() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_sheet(&dir, "Title,Wallet,Region\nAlice,9Wj,India\n");
    let table = CountryTable::embedded().expect("embedded table");
    let store = DashboardStore::open(&StoreConfig::new(&path), &table).expect("open store");

    let first = store.load();
    let second = store.load();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(first.total_builders, 1);
    assert_eq!(store.source(), path.as_path());
}

#[test]
fn sheet_is_not_read_again_after_open() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_sheet(&dir, "Title,Wallet,Region\nAlice,9Wj,India\n");
    let table = CountryTable::embedded().expect("embedded table");
    let store = DashboardStore::open(&StoreConfig::new(&path), &table).expect("open store");

    std::fs::write(&path, "Title,Wallet,Region\nA,1,X\nB,2,Y\n").expect("rewrite sheet");
    assert_eq!(store.load().total_builders, 1);
    std::fs::remove_file(&path).expect("remove sheet");
    assert_eq!(store.load().total_builders, 1);
}

#[test]
fn store_applies_configured_overlay() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_sheet(&dir, "Title,Wallet,Region\nAlice,9Wj,India\n");
    let table = CountryTable::embedded().expect("embedded table");
    let config = StoreConfig::new(&path).with_options(PipelineOptions::demo());
    let store = DashboardStore::open(&config, &table).expect("open store");
    assert_eq!(store.load().total_builders, 4);
}

#[test]
fn missing_sheet_fails_open() {
    let dir = tempfile::tempdir().expect("temp dir");
    let table = CountryTable::embedded().expect("embedded table");
    let err = DashboardStore::open(&StoreConfig::new(dir.path().join("absent.csv")), &table)
        .unwrap_err();
    assert!(matches!(err, DashboardError::Ingest(_)));
    assert!(err.to_string().contains("absent.csv"));
}

#[test]
fn clones_share_the_snapshot() {
    let store = DashboardStore::from_stats("inline", Default::default());
    let clone = store.clone();
    assert!(Arc::ptr_eq(&store.load(), &clone.load()));
}
