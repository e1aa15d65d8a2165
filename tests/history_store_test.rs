//! Tests for the persisted recent-question history

use chrono::{Duration, TimeZone, Utc};
use sign_lookup::{HistoryError, HistoryStore, RecentQuestion};

mod common;
use common::create_test_dir;

fn at(minute: i64) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 10, 12, 0, 0).unwrap() + Duration::minutes(minute)
}

#[tokio::test]
async fn test_missing_file_lists_empty() {
    let dir = create_test_dir();
    let store = HistoryStore::open(dir.path().join("recent.json"), 20);

    assert!(store.list().await.is_empty());
    assert!(store.try_list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_add_normalizes_and_orders_most_recent_first() {
    let dir = create_test_dir();
    let store = HistoryStore::open(dir.path().join("recent.json"), 20);

    store.add_at("  Hello ", at(0)).await;
    store.add_at("please", at(1)).await;

    assert_eq!(
        store.list().await,
        vec![
            RecentQuestion::new("please", at(1)),
            RecentQuestion::new("hello", at(0)),
        ]
    );
}

#[tokio::test]
async fn test_re_adding_moves_word_to_front_without_duplicates() {
    let dir = create_test_dir();
    let store = HistoryStore::open(dir.path().join("recent.json"), 20);

    store.add_at("hello", at(0)).await;
    store.add_at("thanks", at(1)).await;
    store.add_at("HELLO", at(2)).await;

    let words: Vec<_> = store.list().await.into_iter().map(|q| q.word).collect();
    assert_eq!(words, vec!["hello", "thanks"]);
    assert_eq!(store.list().await[0].timestamp, at(2));
}

#[tokio::test]
async fn test_history_is_bounded() {
    let dir = create_test_dir();
    let store = HistoryStore::open(dir.path().join("recent.json"), 3);

    for (i, word) in ["a", "b", "c", "d", "e"].iter().enumerate() {
        store.add_at(word, at(i as i64)).await;
    }

    let words: Vec<_> = store.list().await.into_iter().map(|q| q.word).collect();
    assert_eq!(words, vec!["e", "d", "c"]);
}

#[tokio::test]
async fn test_blank_words_are_ignored() {
    let dir = create_test_dir();
    let path = dir.path().join("recent.json");
    let store = HistoryStore::open(&path, 20);

    store.add("   ").await;

    assert!(store.list().await.is_empty());
    assert!(!path.exists());
}

#[tokio::test]
async fn test_remove_is_case_insensitive() {
    let dir = create_test_dir();
    let store = HistoryStore::open(dir.path().join("recent.json"), 20);

    store.add_at("hello", at(0)).await;
    store.add_at("thanks", at(1)).await;

    assert!(store.remove(" Hello").await);
    assert!(!store.remove("hello").await);

    let words: Vec<_> = store.list().await.into_iter().map(|q| q.word).collect();
    assert_eq!(words, vec!["thanks"]);
}

#[tokio::test]
async fn test_clear_removes_file_and_tolerates_missing_file() {
    let dir = create_test_dir();
    let path = dir.path().join("recent.json");
    let store = HistoryStore::open(&path, 20);

    store.clear().await;
    store.add("hello").await;
    assert!(path.exists());

    store.clear().await;
    assert!(!path.exists());
    assert!(store.list().await.is_empty());
}

#[tokio::test]
async fn test_history_survives_reopen() {
    let dir = create_test_dir();
    let path = dir.path().join("nested").join("recent.json");

    HistoryStore::open(&path, 20).add_at("hello", at(0)).await;

    let reopened = HistoryStore::open(&path, 20);
    assert_eq!(
        reopened.list().await,
        vec![RecentQuestion::new("hello", at(0))]
    );
}

#[tokio::test]
async fn test_persisted_format_uses_millisecond_timestamps() {
    let dir = create_test_dir();
    let path = dir.path().join("recent.json");
    let store = HistoryStore::open(&path, 20);

    store.add_at("hello", at(0)).await;

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        raw,
        serde_json::json!([{ "word": "hello", "timestamp": at(0).timestamp_millis() }])
    );
}

#[tokio::test]
async fn test_corrupt_file_reads_empty_and_is_replaced() {
    let dir = create_test_dir();
    let path = dir.path().join("recent.json");
    std::fs::write(&path, "{not json").unwrap();
    let store = HistoryStore::open(&path, 20);

    assert!(matches!(
        store.try_list().await,
        Err(HistoryError::Corrupt { .. })
    ));
    assert!(store.list().await.is_empty());

    store.add_at("hello", at(0)).await;
    assert_eq!(store.list().await, vec![RecentQuestion::new("hello", at(0))]);
}

#[tokio::test]
async fn test_concurrent_adds_keep_every_word() {
    let dir = create_test_dir();
    let store = HistoryStore::open(dir.path().join("recent.json"), 20);

    let tasks: Vec<_> = (0..10)
        .map(|i| {
            let store = store.clone();
            tokio::spawn(async move { store.try_add(&format!("word{i}")).await })
        })
        .collect();
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    assert_eq!(store.list().await.len(), 10);
}

#[tokio::test]
async fn test_unwritable_location_is_silent() {
    let dir = create_test_dir();
    // A regular file where the parent directory should be
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "").unwrap();
    let store = HistoryStore::open(blocker.join("recent.json"), 20);

    store.add("hello").await;
    assert!(store.try_add("hello").await.is_err());
    assert!(store.list().await.is_empty());
}

#[tokio::test]
async fn test_independent_stores_on_one_path_write_safely() {
    let dir = create_test_dir();
    let path = dir.path().join("recent.json");

    // Separately opened stores share the file but not the lock
    let tasks: Vec<_> = (0..8)
        .map(|i| {
            let store = HistoryStore::open(&path, 20);
            tokio::spawn(async move { store.try_add(&format!("word{i}")).await })
        })
        .collect();
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let store = HistoryStore::open(&path, 20);
    let questions = store.try_list().await.expect("file must stay parseable");
    assert!(!questions.is_empty());

    let leftovers: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .filter(|name| name != "recent.json")
        .collect();
    assert!(leftovers.is_empty(), "temp files left behind: {leftovers:?}");
}
