use crate::{FileSessionStore, MemorySessionStore, SessionStore};

use tempfile::TempDir;

#[test]
fn test_memory_store_starts_empty() {
    let store = MemorySessionStore::new();
    assert_eq!(store.token(), None);
}

#[test]
fn test_memory_store_round_trip_and_clear() {
    let store = MemorySessionStore::with_token("old");
    store.store_token("new").unwrap();
    assert_eq!(store.token(), Some("new".to_string()));

    store.clear().unwrap();
    store.clear().unwrap();
    assert_eq!(store.token(), None);
}

#[test]
fn test_file_store_persists_across_opens() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.json");

    let store = FileSessionStore::open(&path);
    assert_eq!(store.token(), None);
    store.store_token("persisted").unwrap();

    let reopened = FileSessionStore::open(&path);
    assert_eq!(reopened.token(), Some("persisted".to_string()));
}

#[test]
fn test_file_store_clear_removes_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.json");

    let store = FileSessionStore::open(&path);
    store.store_token("abc").unwrap();
    assert!(path.exists());

    store.clear().unwrap();
    assert!(!path.exists());
    assert_eq!(store.token(), None);

    // Clearing an absent session succeeds
    store.clear().unwrap();
}

#[test]
fn test_file_store_corrupt_file_is_no_session() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "not json").unwrap();

    let store = FileSessionStore::open(&path);

    assert_eq!(store.token(), None);
    assert_eq!(store.path(), path.as_path());
}
