//! HTTP middleware implementations
//!
//! Bearer-token authentication and per-method permission checks.

mod auth;
mod helpers;


pub use auth::{AuthMiddleware, AuthMiddlewareService, authenticated_user};
pub use helpers::{extract_bearer_token, is_public_route, is_self_route, permission_for_method};
