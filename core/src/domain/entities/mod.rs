//! Domain entities representing core business objects.

pub mod token;
pub mod user;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use token::{Claims, IssueOptions, DEFAULT_TOKEN_EXPIRY_SECONDS};
pub use user::{UserMap, UserRecord, ADMIN_ROLE, ADMIN_USERNAME};
