//! Unit tests for the credential repository

use serde_json::json;

use crate::domain::entities::user::{UserMap, UserRecord};
use crate::errors::{DomainError, InitError};
use crate::repositories::credential::CredentialRepository;
use crate::repositories::document::MockDocumentStore;

#[tokio::test]
async fn test_empty_store_reports_nothing() {
    let store = MockDocumentStore::new();
    let repo = CredentialRepository::new(&store);

    assert!(repo.version().await.unwrap().is_none());
    assert!(repo.users().await.unwrap().is_none());
    assert!(repo.signing_key().await.unwrap().is_none());
}

#[tokio::test]
async fn test_users_roundtrip_through_store_layout() {
    let store = MockDocumentStore::new();
    let repo = CredentialRepository::new(&store);

    let mut users = UserMap::new();
    users.insert("admin".to_string(), UserRecord::admin("pw"));
    repo.set_users(&users).await.unwrap();

    assert_eq!(
        store.document(),
        json!({"users": {"admin": {"password": "pw", "hashed": false, "roles": ["admin"]}}})
    );
    assert_eq!(repo.users().await.unwrap(), Some(users));
}

#[tokio::test]
async fn test_non_string_key_is_corrupt() {
    let store = MockDocumentStore::with_document(json!({"privateKey": 42}));
    let repo = CredentialRepository::new(&store);

    let err = repo.signing_key().await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Init(InitError::CorruptRecord { ref path, .. }) if path == "/privateKey"
    ));
}

#[tokio::test]
async fn test_malformed_users_are_corrupt() {
    let store = MockDocumentStore::with_document(json!({"users": ["admin"]}));
    let repo = CredentialRepository::new(&store);

    let err = repo.users().await.unwrap_err();
    assert!(err.is_initialization_failure());
}

#[tokio::test]
async fn test_storage_outage_propagates() {
    let store = MockDocumentStore::new();
    store.set_unavailable(true);
    let repo = CredentialRepository::new(&store);

    assert!(matches!(
        repo.version().await,
        Err(DomainError::Storage { .. })
    ));
    assert!(matches!(
        repo.set_signing_key("k").await,
        Err(DomainError::Storage { .. })
    ));
}
