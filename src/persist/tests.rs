#![allow(clippy::unwrap_used)]

use super::*;

// ── FileStore ─────────────────────────────────────────────────

#[test]
fn test_file_store_missing_key() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path().to_path_buf()).unwrap();
    assert_eq!(store.get("transactions").unwrap(), None);
}

#[test]
fn test_file_store_set_then_get() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::open(dir.path().to_path_buf()).unwrap();
    store.set("transactions", "[]").unwrap();
    assert_eq!(store.get("transactions").unwrap().as_deref(), Some("[]"));
}

#[test]
fn test_file_store_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::open(dir.path().to_path_buf()).unwrap();
    store.set("k", "first").unwrap();
    store.set("k", "second").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("second"));
}

#[test]
fn test_file_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut store = FileStore::open(dir.path().to_path_buf()).unwrap();
        store.set("transactions", r#"[{"id":1}]"#).unwrap();
    }
    let store = FileStore::open(dir.path().to_path_buf()).unwrap();
    assert_eq!(
        store.get("transactions").unwrap().as_deref(),
        Some(r#"[{"id":1}]"#)
    );
}

#[test]
fn test_file_store_creates_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("a").join("b");
    let mut store = FileStore::open(nested).unwrap();
    store.set("k", "v").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
}

#[test]
fn test_file_store_unicode_value() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::open(dir.path().to_path_buf()).unwrap();
    store.set("k", "café ¥1,000 日本語").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("café ¥1,000 日本語"));
}

// ── MemoryStore ───────────────────────────────────────────────

#[test]
fn test_memory_store_clones_share_state() {
    let a = MemoryStore::new();
    let mut b = a.clone();
    b.set("k", "v").unwrap();
    assert_eq!(a.get("k").unwrap().as_deref(), Some("v"));
}

#[test]
fn test_memory_store_missing_key() {
    let store = MemoryStore::new();
    assert_eq!(store.get("nope").unwrap(), None);
}
