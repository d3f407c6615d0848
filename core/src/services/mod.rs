//! Business services containing domain logic and use cases.

pub mod auth;
pub mod clock;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthService, SCHEMA_VERSION};
pub use clock::{Clock, ManualClock, SystemClock};
pub use token::{
    KeySource, RevocationList, RevocationSweepConfig, RevocationSweeper, SigningKey, SweepResult,
    TokenService, TokenServiceConfig,
};
