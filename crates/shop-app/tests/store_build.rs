use shop_storage::{build_store, Store};
use shop_types::ports::key_value_store::KeyValueStore;

#[cfg(feature = "sqlite")]
#[tokio::test]
async fn builds_sqlite_store_from_url() {
    // Use a temp DB path for isolation.
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("shop-test.db");
    let url = format!("sqlite://{}", db_path.display());

    let store: Store = build_store(Some(&url)).await.expect("build store");
    assert_eq!(store.backend_name(), "sqlite");
    assert!(store.get("order-none").await.expect("get").is_none());
    store.set("order-1", "{}".into()).await.expect("set");
    assert!(store.remove("order-1").await.expect("remove"));
}

#[cfg(feature = "memory")]
#[tokio::test]
async fn builds_memory_store_without_url() {
    let store: Store = build_store(None).await.expect("build store");
    assert_eq!(store.backend_name(), "memory");
    assert!(store.get("order-none").await.expect("get").is_none());
}
