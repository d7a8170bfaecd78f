//! Unit tests for the last-buy-date store

use chrono::NaiveDate;
use std::path::PathBuf;
use zonetrix::db::LastBuyStore;

fn temp_store(name: &str) -> (LastBuyStore, PathBuf) {
    let path = std::env::temp_dir().join(format!(
        "zonetrix-last-buy-{}-{}.json",
        name,
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    (LastBuyStore::new(&path), path)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn test_missing_file_loads_empty() {
    let (store, path) = temp_store("missing");
    assert!(store.load().await.is_empty());
    let _ = std::fs::remove_file(path);
}

#[tokio::test]
async fn test_record_and_reload() {
    let (store, path) = temp_store("roundtrip");
    let day = date(2026, 3, 10);

    store
        .record_buys(&["SPY".to_string(), "QQQ".to_string()], day)
        .await
        .unwrap();

    let loaded = store.load().await;
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded.get("SPY"), Some(&day));
    assert_eq!(loaded.get("QQQ"), Some(&day));
    let _ = std::fs::remove_file(path);
}

#[tokio::test]
async fn test_later_buy_overwrites_earlier() {
    let (store, path) = temp_store("overwrite");

    store
        .record_buys(&["SPY".to_string()], date(2026, 2, 27))
        .await
        .unwrap();
    store
        .record_buys(&["SPY".to_string()], date(2026, 3, 10))
        .await
        .unwrap();

    let loaded = store.load().await;
    assert_eq!(loaded.get("SPY"), Some(&date(2026, 3, 10)));
    let _ = std::fs::remove_file(path);
}

#[tokio::test]
async fn test_corrupt_file_degrades_to_empty() {
    let (store, path) = temp_store("corrupt");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(store.load().await.is_empty());
    let _ = std::fs::remove_file(path);
}

#[tokio::test]
async fn test_recording_no_buys_writes_nothing() {
    let (store, path) = temp_store("noop");
    store.record_buys(&[], date(2026, 3, 10)).await.unwrap();
    assert!(!path.exists());
    let _ = std::fs::remove_file(path);
}
