//! Authentication route handlers
//!
//! - Login (username and secret for a token)
//! - Logout (revoke the presented token)
//! - Me (echo the authenticated identity)

pub mod login;
pub mod logout;
pub mod me;

pub use login::login;
pub use logout::logout;
pub use me::me;
