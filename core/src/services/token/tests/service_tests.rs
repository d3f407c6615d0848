//! Tests for token issuance and verification

use std::collections::BTreeSet;
use std::sync::Arc;

use kg_shared::AuthConfig;

use crate::domain::entities::token::IssueOptions;
use crate::errors::{DomainError, TokenError};
use crate::services::clock::{Clock, ManualClock};
use crate::services::token::{SigningKey, TokenService, TokenServiceConfig};

const T0: i64 = 1_700_000_000;

fn create_service(secret: &str) -> (TokenService, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(T0));
    let key = SigningKey::from_secret(secret).unwrap();
    let service = TokenService::new(key, TokenServiceConfig::default(), clock.clone());
    (service, clock)
}

fn admin_roles() -> BTreeSet<String> {
    BTreeSet::from(["admin".to_string()])
}

#[test]
fn test_issue_and_verify_roundtrip() {
    let (service, _) = create_service("secret");

    let token = service
        .issue("admin", &admin_roles(), IssueOptions::default())
        .unwrap();
    let claims = service.verify(&token).unwrap();

    assert_eq!(claims.user, "admin");
    assert_eq!(claims.roles, admin_roles());
    assert_eq!(claims.iat, T0);
    assert_eq!(claims.exp, T0 + 86_400);
}

#[test]
fn test_payload_uses_user_and_roles_claims() {
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};

    let (service, _) = create_service("secret");
    let token = service
        .issue("admin", &admin_roles(), IssueOptions::default())
        .unwrap();

    let payload = token.split('.').nth(1).unwrap();
    let json: serde_json::Value =
        serde_json::from_slice(&URL_SAFE_NO_PAD.decode(payload).unwrap()).unwrap();

    assert_eq!(json["user"], "admin");
    assert_eq!(json["roles"], serde_json::json!(["admin"]));
    assert_eq!(json["iat"], T0);
    assert_eq!(json["exp"], T0 + 86_400);
}

#[test]
fn test_expiry_boundary() {
    let (service, clock) = create_service("secret");
    let token = service
        .issue("admin", &admin_roles(), IssueOptions::expires_in(60))
        .unwrap();

    clock.set(T0 + 59);
    assert!(service.verify(&token).is_ok());

    clock.set(T0 + 60);
    assert!(matches!(
        service.verify(&token),
        Err(DomainError::Token(TokenError::TokenExpired))
    ));

    clock.set(T0 + 61);
    assert!(matches!(
        service.verify(&token),
        Err(DomainError::Token(TokenError::TokenExpired))
    ));
}

#[test]
fn test_configured_default_expiry() {
    let clock = Arc::new(ManualClock::new(T0));
    let config = TokenServiceConfig {
        default_expiry_seconds: 300,
        ..TokenServiceConfig::default()
    };
    let service = TokenService::new(SigningKey::from_secret("k").unwrap(), config, clock.clone());

    let token = service
        .issue("bob", &BTreeSet::new(), IssueOptions::default())
        .unwrap();
    assert_eq!(service.verify(&token).unwrap().exp, clock.now() + 300);
}

#[test]
fn test_default_expiry_matches_auth_config() {
    let from_auth = TokenServiceConfig::from(&AuthConfig::default());
    assert_eq!(
        from_auth.default_expiry_seconds,
        TokenServiceConfig::default().default_expiry_seconds
    );
}

#[test]
fn test_foreign_key_is_rejected() {
    let (issuer, _) = create_service("first-secret");
    let (verifier, _) = create_service("second-secret");

    let token = issuer
        .issue("admin", &admin_roles(), IssueOptions::default())
        .unwrap();

    assert!(matches!(
        verifier.verify(&token),
        Err(DomainError::Token(TokenError::InvalidSignature))
    ));
}

#[test]
fn test_garbage_is_rejected() {
    let (service, _) = create_service("secret");

    for token in ["", "not-a-token", "a.b.c"] {
        assert!(matches!(
            service.verify(token),
            Err(DomainError::Token(TokenError::InvalidTokenFormat))
        ));
    }
}

#[test]
fn test_token_without_exp_is_rejected() {
    use jsonwebtoken::{encode, EncodingKey, Header};

    let (service, _) = create_service("secret");
    let token = encode(
        &Header::default(),
        &serde_json::json!({"user": "admin", "roles": ["admin"], "iat": T0}),
        &EncodingKey::from_secret(b"secret"),
    )
    .unwrap();

    assert!(service.verify(&token).is_err());
}
