//! Authentication and authorization types

use serde::Serialize;

/// Authorization result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthzResult {
    /// Whether authorization was successful
    pub allowed: bool,
    /// Required permissions that were checked
    pub required_permissions: Vec<String>,
    /// Reason for denial (if not allowed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl AuthzResult {
    pub fn allow(permission: &str) -> Self {
        Self {
            allowed: true,
            required_permissions: vec![permission.to_string()],
            reason: None,
        }
    }

    pub fn deny(permission: &str, reason: impl Into<String>) -> Self {
        Self {
            allowed: false,
            required_permissions: vec![permission.to_string()],
            reason: Some(reason.into()),
        }
    }
}
