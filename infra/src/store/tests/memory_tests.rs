//! Tests for the in-memory document store

use kg_core::repositories::DocumentStore;
use serde_json::json;

use crate::store::InMemoryDocumentStore;

#[tokio::test]
async fn test_set_and_get_nested_paths() {
    let store = InMemoryDocumentStore::new();

    store.set("/users/admin/roles", json!(["admin"])).await.unwrap();

    assert_eq!(
        store.get("/users").await.unwrap(),
        Some(json!({"admin": {"roles": ["admin"]}}))
    );
    assert_eq!(store.get("/users/bob").await.unwrap(), None);
}

#[tokio::test]
async fn test_prepopulated_document() {
    let store = InMemoryDocumentStore::with_document(json!({"dbVersion": "0"}));

    assert!(store.exists("/dbVersion").await.unwrap());
    store.set("/dbVersion", json!("1")).await.unwrap();
    assert_eq!(store.snapshot().await, json!({"dbVersion": "1"}));
}
