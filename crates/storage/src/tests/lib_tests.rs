use super::*;

#[tokio::test]
async fn missing_key_reads_as_none() {
    let storage = Storage::new("sqlite::memory:").await.expect("db");
    let value = storage.get("onboarding_complete").await.expect("read");
    assert_eq!(value, None);
}

#[tokio::test]
async fn set_then_get_returns_latest_value() {
    let storage = Storage::new("sqlite::memory:").await.expect("db");
    storage.set("flag", "false").await.expect("first write");
    storage.set("flag", "true").await.expect("overwrite");
    assert_eq!(
        storage.get("flag").await.expect("read").as_deref(),
        Some("true")
    );
}

#[tokio::test]
async fn remove_deletes_entry_and_is_idempotent() {
    let storage = Storage::new("sqlite::memory:").await.expect("db");
    storage.set("flag", "true").await.expect("write");
    storage.remove("flag").await.expect("remove");
    storage.remove("flag").await.expect("remove again");
    assert_eq!(storage.get("flag").await.expect("read"), None);
}

#[tokio::test]
async fn health_check_succeeds_for_live_pool() {
    let storage = Storage::new("sqlite::memory:").await.expect("db");
    storage.health_check().await.expect("health check");
}

#[tokio::test]
async fn creates_database_file_when_missing() {
    let temp_root = tempfile::tempdir().expect("tempdir");
    let db_path = temp_root.path().join("nested").join("client.db");
    let database_url = format!("sqlite://{}", db_path.to_string_lossy().replace('\\', "/"));

    let storage = Storage::new(&database_url).await.expect("db");
    drop(storage);

    assert!(
        db_path.exists(),
        "database file should exist: {}",
        db_path.display()
    );
}

#[tokio::test]
async fn memory_store_round_trips_values() {
    let store = MemoryStore::new();
    assert_eq!(store.get("k").await.expect("read"), None);
    store.set("k", "v").await.expect("write");
    assert_eq!(store.get("k").await.expect("read").as_deref(), Some("v"));
    store.remove("k").await.expect("remove");
    assert_eq!(store.get("k").await.expect("read"), None);
}

#[test]
fn sqlite_path_ignores_memory_urls() {
    assert_eq!(sqlite_path("sqlite::memory:"), None);
    assert_eq!(sqlite_path("sqlite://file:shared?mode=memory&cache=shared"), None);
    assert_eq!(
        sqlite_path("sqlite://./data/client.db?mode=rwc"),
        Some(PathBuf::from("./data/client.db"))
    );
}
