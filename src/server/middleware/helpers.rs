//! Helper functions for middleware

use actix_web::http::Method;
use actix_web::http::header::{AUTHORIZATION, HeaderMap};

/// Extract the bearer token from the Authorization header
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

/// Check if a route is public (doesn't require authentication)
pub fn is_public_route(path: &str) -> bool {
    const PUBLIC_ROUTES: &[&str] = &["/health"];

    PUBLIC_ROUTES
        .iter()
        .any(|&route| path == route || path.starts_with(&format!("{}/", route)))
}

/// Check if a route answers questions about the caller itself
pub fn is_self_route(path: &str) -> bool {
    path.starts_with("/auth/")
}

/// Permission an entity route requires for an HTTP method
pub fn permission_for_method(method: &Method) -> Option<&'static str> {
    match *method {
        Method::GET => Some("data:read"),
        Method::POST => Some("data:write"),
        Method::PATCH => Some("data:update"),
        Method::DELETE => Some("data:delete"),
        _ => None,
    }
}
