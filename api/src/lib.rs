//! # KeyGate API
//!
//! actix-web surface over `kg_core`: the `Authenticate` and `RequireAuth`
//! middleware pair, the login/logout/me routes and the application factory.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod telemetry;

pub use app::{create_app, AppState};
