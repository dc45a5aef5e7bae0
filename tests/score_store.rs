use std::fs;
use std::path::PathBuf;

use naturequiz::store::{parse_best, FileScoreStore, MemoryScoreStore, ScoreStore, BEST_SCORE_KEY};

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("naturequiz_test_{}", name));
    let _ = fs::remove_dir_all(&dir);
    dir
}

#[test]
fn test_memory_store_round_trip() {
    let mut store = MemoryScoreStore::new();
    assert_eq!(store.load_best(), 0);
    store.save_best(80).unwrap();
    assert_eq!(store.load_best(), 80);
    store.save_best(40).unwrap();
    assert_eq!(store.load_best(), 40);
}

#[test]
fn test_memory_store_malformed() {
    assert_eq!(MemoryScoreStore::with_raw("abc").load_best(), 0);
    assert_eq!(MemoryScoreStore::with_raw("").load_best(), 0);
    assert_eq!(MemoryScoreStore::with_raw("75").load_best(), 75);
}

#[test]
fn test_parse_best() {
    assert_eq!(parse_best("0"), 0);
    assert_eq!(parse_best(" 92\n"), 92);
    assert_eq!(parse_best("100"), 100);
    assert_eq!(parse_best("101"), 0);
    assert_eq!(parse_best("-5"), 0);
    assert_eq!(parse_best("12.5"), 0);
    assert_eq!(parse_best("ninety"), 0);
}

#[test]
fn test_file_store_round_trip() {
    let dir = temp_dir("file_round_trip");
    let mut store = FileScoreStore::new(&dir);

    assert_eq!(store.load_best(), 0);
    store.save_best(80).unwrap();
    assert_eq!(store.load_best(), 80);

    let raw = fs::read_to_string(dir.join(BEST_SCORE_KEY)).unwrap();
    assert_eq!(raw, "80");
    assert!(!dir.join(format!("{}.tmp", BEST_SCORE_KEY)).exists());

    // A fresh handle on the same directory sees the stored value
    assert_eq!(FileScoreStore::new(&dir).load_best(), 80);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_file_store_malformed_value() {
    let dir = temp_dir("file_malformed");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(BEST_SCORE_KEY), "not a number").unwrap();

    let store = FileScoreStore::new(&dir);
    assert_eq!(store.load_best(), 0);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_file_store_clear() {
    let dir = temp_dir("file_clear");
    let mut store = FileScoreStore::new(&dir);
    store.save_best(55).unwrap();
    assert_eq!(store.load_best(), 55);

    store.clear().unwrap();
    assert_eq!(store.load_best(), 0);
    // Clearing twice is fine
    store.clear().unwrap();

    let _ = fs::remove_dir_all(&dir);
}
