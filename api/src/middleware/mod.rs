pub mod authenticate;
pub mod require;

pub use authenticate::{AuthContext, Authenticate, OptionalAuth};
pub use require::RequireAuth;
