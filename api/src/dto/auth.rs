use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub username: String,

    pub password: String,

    /// Token lifetime in seconds; the configured default when absent
    #[validate(range(min = 1))]
    #[serde(default)]
    pub expires_in: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeResponse {
    pub user: String,
    pub roles: BTreeSet<String>,
    pub exp: i64,
}
