//! Bootstrap against a real file across process restarts

use std::sync::Arc;

use kg_core::domain::entities::IssueOptions;
use kg_core::errors::{DomainError, InitError};
use kg_core::services::{AuthService, KeySource, ManualClock};
use kg_infra::JsonFileStore;
use kg_shared::{AuthConfig, KeyOverrides};
use tempfile::TempDir;

const T0: i64 = 1_700_000_000;

fn config() -> AuthConfig {
    AuthConfig::default().with_overrides(KeyOverrides {
        default_password: Some("admin-pw".to_string()),
        ..KeyOverrides::default()
    })
}

#[tokio::test]
async fn test_tokens_survive_restart_with_seeded_key() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    let clock = Arc::new(ManualClock::new(T0));

    let token = {
        let store = JsonFileStore::open(&path).await.unwrap();
        let service = AuthService::initialize(&store, &config(), clock.clone())
            .await
            .unwrap();
        assert_eq!(service.key_source(), KeySource::Persisted);
        service
            .login("admin", "admin-pw", IssueOptions::default())
            .unwrap()
    };

    let store = JsonFileStore::open(&path).await.unwrap();
    let restarted = AuthService::initialize(&store, &config(), clock)
        .await
        .unwrap();

    let claims = restarted.verify(&token).unwrap();
    assert_eq!(claims.user, "admin");
}

#[tokio::test]
async fn test_revocations_reset_on_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    let clock = Arc::new(ManualClock::new(T0));

    let token = {
        let store = JsonFileStore::open(&path).await.unwrap();
        let service = AuthService::initialize(&store, &config(), clock.clone())
            .await
            .unwrap();
        let token = service
            .login("admin", "admin-pw", IssueOptions::default())
            .unwrap();
        assert!(service.logout(&token));
        token
    };

    let store = JsonFileStore::open(&path).await.unwrap();
    let restarted = AuthService::initialize(&store, &config(), clock)
        .await
        .unwrap();

    assert!(restarted.is_allowed(&token));
}

#[tokio::test]
async fn test_foreign_version_on_disk_aborts() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, br#"{"dbVersion": "2"}"#).unwrap();

    let store = JsonFileStore::open(&path).await.unwrap();
    let err = AuthService::initialize(&store, &config(), Arc::new(ManualClock::new(T0)))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        DomainError::Init(InitError::VersionMismatch { .. })
    ));
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        r#"{"dbVersion": "2"}"#
    );
}
