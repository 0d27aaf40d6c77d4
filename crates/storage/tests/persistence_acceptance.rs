use storage::{KeyValueStore, Storage};

#[tokio::test]
async fn values_survive_reopening_the_database() {
    let temp_root = tempfile::tempdir().expect("tempdir");
    let db_path = temp_root.path().join("client.db");
    let database_url = format!("sqlite://{}", db_path.to_string_lossy().replace('\\', "/"));

    {
        let storage = Storage::new(&database_url).await.expect("open");
        storage
            .set("onboarding_complete", "true")
            .await
            .expect("write flag");
        storage.pool().close().await;
    }

    let reopened = Storage::new(&database_url).await.expect("reopen");
    let value = reopened.get("onboarding_complete").await.expect("read");
    assert_eq!(value.as_deref(), Some("true"));
}

#[tokio::test]
async fn store_is_usable_through_trait_object() {
    let storage = Storage::new("sqlite::memory:").await.expect("db");
    let store: std::sync::Arc<dyn KeyValueStore> = std::sync::Arc::new(storage);
    store.set("a", "1").await.expect("write");
    assert_eq!(store.get("a").await.expect("read").as_deref(), Some("1"));
}
