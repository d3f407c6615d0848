//! Shared error envelope returned by every API endpoint
//!
//! Every failure is rendered as `{"error": {"code": <status>, "message": <text>}}`.

use serde::{Deserialize, Serialize};

/// Inner error object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// HTTP status code mirrored in the body
    pub code: u16,

    /// Human-readable message
    pub message: String,
}

/// Standard error response structure used across all API endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            error: ErrorBody {
                code,
                message: message.into(),
            },
        }
    }

    /// Rejection returned when a route requires authentication
    pub fn not_authenticated() -> Self {
        Self::new(403, "Not Authenticated")
    }
}
