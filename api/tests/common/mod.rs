//! Shared fixtures for API tests

use std::sync::Arc;

use kg_core::services::{AuthService, ManualClock};
use kg_infra::InMemoryDocumentStore;
use kg_shared::{AuthConfig, KeyOverrides};

pub const T0: i64 = 1_700_000_000;
pub const ADMIN_PASSWORD: &str = "admin-pw";

/// A freshly bootstrapped service with a known admin password and a frozen clock
pub async fn auth_service() -> (Arc<AuthService>, Arc<ManualClock>) {
    let store = InMemoryDocumentStore::new();
    let config = AuthConfig::default().with_overrides(KeyOverrides {
        default_password: Some(ADMIN_PASSWORD.to_string()),
        ..KeyOverrides::default()
    });
    let clock = Arc::new(ManualClock::new(T0));

    let auth = AuthService::initialize(&store, &config, clock.clone())
        .await
        .expect("bootstrap should succeed");

    (Arc::new(auth), clock)
}
