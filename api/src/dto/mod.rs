pub mod auth;

pub use auth::{LoginRequest, LoginResponse, LogoutResponse, MeResponse};
