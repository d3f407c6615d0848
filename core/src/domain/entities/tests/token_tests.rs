//! Unit tests for token entities

use std::collections::BTreeSet;

use crate::domain::entities::token::{Claims, IssueOptions, DEFAULT_TOKEN_EXPIRY_SECONDS};

fn roles(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|r| r.to_string()).collect()
}

#[test]
fn test_claims_expiry_is_relative_to_issuance() {
    let claims = Claims::new("alice", roles(&["admin"]), 1_000, 60);

    assert_eq!(claims.user, "alice");
    assert_eq!(claims.iat, 1_000);
    assert_eq!(claims.exp, 1_060);
    assert!(claims.has_role("admin"));
    assert!(!claims.has_role("viewer"));
}

#[test]
fn test_claims_expire_at_exp() {
    let claims = Claims::new("alice", BTreeSet::new(), 0, 10);

    assert!(!claims.is_expired_at(9));
    assert!(claims.is_expired_at(10));
    assert!(claims.is_expired_at(11));
}

#[test]
fn test_claims_wire_format() {
    let claims = Claims::new("admin", roles(&["admin"]), 100, 50);
    let json = serde_json::to_value(&claims).unwrap();

    assert_eq!(
        json,
        serde_json::json!({"user": "admin", "roles": ["admin"], "iat": 100, "exp": 150})
    );
}

#[test]
fn test_issue_options() {
    assert_eq!(IssueOptions::default().expires_in, None);
    assert_eq!(IssueOptions::expires_in(30).expires_in, Some(30));
    assert_eq!(DEFAULT_TOKEN_EXPIRY_SECONDS, 24 * 60 * 60);
}
