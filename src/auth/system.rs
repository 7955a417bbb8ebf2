//! Core authentication system implementation

use super::permissions::{Authorization, PermissionChecker, PermissionResolver};
use super::token::{HydraTokenValidator, TokenData, TokenValidator};
use super::types::AuthzResult;
use crate::config::AuthConfig;
use crate::utils::error::{GatewayError, Result};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Main authentication system
///
/// Bearer tokens are introspected by the [`TokenValidator`]; permissions are
/// answered by the [`PermissionChecker`].
#[derive(Clone)]
pub struct AuthSystem {
    /// Whether tokens and permissions are enforced
    pub(super) enabled: bool,
    /// Token introspection
    pub(super) validator: Arc<dyn TokenValidator>,
    /// Permission resolution
    pub(super) checker: Arc<dyn PermissionChecker>,
}

impl AuthSystem {
    /// Create the Hydra/Keto backed authentication system
    pub fn new(config: &AuthConfig) -> Result<Self> {
        info!("Initializing authentication system");

        let validator = Arc::new(HydraTokenValidator::new(&config.hydra)?);
        let checker = Arc::new(PermissionResolver::from_config(&config.keto)?);

        info!(
            namespace = %config.keto.namespace,
            enabled = config.enabled,
            "Authentication system initialized successfully"
        );
        Ok(Self::with_components(config.enabled, validator, checker))
    }

    /// Assemble from explicit components
    pub fn with_components(
        enabled: bool,
        validator: Arc<dyn TokenValidator>,
        checker: Arc<dyn PermissionChecker>,
    ) -> Self {
        Self {
            enabled,
            validator,
            checker,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn checker(&self) -> Arc<dyn PermissionChecker> {
        self.checker.clone()
    }

    /// Authorization use case over this system's checker
    pub fn authorization(&self) -> Authorization {
        Authorization::new(self.checker.clone())
    }

    /// Authenticate a bearer token
    pub async fn authenticate(&self, token: &str) -> Result<TokenData> {
        if !self.enabled {
            return Ok(TokenData::anonymous());
        }
        if token.trim().is_empty() {
            return Err(GatewayError::auth("Missing bearer token"));
        }

        let token_data = self.validator.introspect_token(token).await.map_err(|e| {
            warn!("Token rejected: {}", e);
            e
        })?;

        debug!(username = %token_data.username, "Request authenticated");
        Ok(token_data)
    }

    /// Authorize a user for a single permission
    pub async fn authorize(&self, username: &str, permission: &str) -> AuthzResult {
        if !self.enabled {
            return AuthzResult::allow(permission);
        }

        if self
            .authorization()
            .check_user_access(username, permission)
            .await
        {
            AuthzResult::allow(permission)
        } else {
            AuthzResult::deny(
                permission,
                format!("User '{}' lacks permission '{}'", username, permission),
            )
        }
    }
}
