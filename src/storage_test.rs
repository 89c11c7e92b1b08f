use super::*;

use std::sync::atomic::{AtomicUsize, Ordering};

fn scratch_path(name: &str) -> PathBuf {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir()
        .join(format!("wardenboard-storage-{}-{n}", std::process::id()))
        .join(name)
}

// =============================================================================
// MemoryTokenStore
// =============================================================================

#[test]
fn memory_store_round_trips_and_clears() {
    let store = MemoryTokenStore::new();
    assert_eq!(store.load().unwrap(), None);
    store.save("abc").unwrap();
    assert_eq!(store.load().unwrap().as_deref(), Some("abc"));
    store.clear().unwrap();
    assert_eq!(store.load().unwrap(), None);
}

#[test]
fn memory_store_can_be_pre_seeded() {
    let store = MemoryTokenStore::with_token("seeded");
    assert_eq!(store.load().unwrap().as_deref(), Some("seeded"));
}

// =============================================================================
// FileTokenStore
// =============================================================================

#[test]
fn file_store_missing_file_is_empty() {
    let store = FileTokenStore::new(scratch_path("absent.json"));
    assert_eq!(store.load().unwrap(), None);
    store.clear().unwrap();
}

#[test]
fn file_store_creates_parent_directories() {
    let path = scratch_path("nested/session.json");
    let store = FileTokenStore::new(&path);
    store.save("tok-1").unwrap();
    assert!(path.exists());
    assert_eq!(store.load().unwrap().as_deref(), Some("tok-1"));

    store.save("tok-2").unwrap();
    assert_eq!(store.load().unwrap().as_deref(), Some("tok-2"));

    store.clear().unwrap();
    assert!(!path.exists());
    assert_eq!(store.load().unwrap(), None);
}

#[test]
fn file_store_rejects_corrupt_contents() {
    let path = scratch_path("corrupt.json");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "not json").unwrap();

    let store = FileTokenStore::new(&path);
    assert!(matches!(store.load(), Err(StorageError::Format(_))));
    store.clear().unwrap();
}

#[test]
fn file_store_treats_empty_token_as_absent() {
    let path = scratch_path("empty.json");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, r#"{"token":""}"#).unwrap();
    assert_eq!(FileTokenStore::new(&path).load().unwrap(), None);
}
