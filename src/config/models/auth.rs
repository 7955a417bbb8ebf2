//! Authentication and authorization configuration

use super::*;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Require a bearer token and a permission check on protected routes
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Relation-tuple store (Ory Keto) settings
    #[serde(default)]
    pub keto: KetoConfig,
    /// OAuth2 token introspection (Ory Hydra) settings
    #[serde(default)]
    pub hydra: HydraConfig,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            keto: KetoConfig::default(),
            hydra: HydraConfig::default(),
        }
    }
}

impl AuthConfig {
    /// Validate authentication configuration
    pub fn validate(&self) -> Result<(), String> {
        self.keto.validate()?;
        self.hydra.validate()
    }
}

/// Relation-tuple store settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KetoConfig {
    /// Base URL of the read API
    #[serde(default = "default_keto_read_url")]
    pub read_url: String,
    /// Base URL of the write API (tuples are written out of band)
    #[serde(default = "default_keto_write_url")]
    pub write_url: String,
    /// Namespace every query is scoped to
    #[serde(default = "default_keto_namespace")]
    pub namespace: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_keto_timeout")]
    pub timeout_secs: u64,
}

impl Default for KetoConfig {
    fn default() -> Self {
        Self {
            read_url: default_keto_read_url(),
            write_url: default_keto_write_url(),
            namespace: default_keto_namespace(),
            timeout_secs: default_keto_timeout(),
        }
    }
}

impl KetoConfig {
    /// Validate relation-tuple store settings
    pub fn validate(&self) -> Result<(), String> {
        if !crate::utils::is_valid_url(&self.read_url) {
            return Err(format!("Invalid Keto read URL: {}", self.read_url));
        }
        if !crate::utils::is_valid_url(&self.write_url) {
            return Err(format!("Invalid Keto write URL: {}", self.write_url));
        }
        if self.namespace.trim().is_empty() {
            return Err("Keto namespace cannot be empty".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("Keto timeout cannot be 0".to_string());
        }
        Ok(())
    }
}

/// OAuth2 server settings used for token introspection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HydraConfig {
    /// Admin API base URL (hosts the introspection endpoint)
    #[serde(default = "default_hydra_admin_url")]
    pub admin_url: String,
    /// Public API base URL
    #[serde(default = "default_hydra_public_url")]
    pub public_url: String,
    /// OAuth2 client id
    #[serde(default)]
    pub client_id: Option<String>,
    /// OAuth2 client secret
    #[serde(default, skip_serializing)]
    pub client_secret: Option<String>,
    /// Introspection timeout in seconds
    #[serde(default = "default_introspection_timeout")]
    pub timeout_secs: u64,
}

impl Default for HydraConfig {
    fn default() -> Self {
        Self {
            admin_url: default_hydra_admin_url(),
            public_url: default_hydra_public_url(),
            client_id: None,
            client_secret: None,
            timeout_secs: default_introspection_timeout(),
        }
    }
}

impl HydraConfig {
    /// Validate OAuth2 settings
    pub fn validate(&self) -> Result<(), String> {
        if !crate::utils::is_valid_url(&self.admin_url) {
            return Err(format!("Invalid Hydra admin URL: {}", self.admin_url));
        }
        if !crate::utils::is_valid_url(&self.public_url) {
            return Err(format!("Invalid Hydra public URL: {}", self.public_url));
        }
        if self.timeout_secs == 0 {
            return Err("Hydra timeout cannot be 0".to_string());
        }
        if self.client_id.is_some() != self.client_secret.is_some() {
            return Err("OAuth2 client id and secret must be set together".to_string());
        }
        Ok(())
    }
}

/// Log warnings for settings that are unsafe outside development
pub fn warn_insecure_config(auth: &AuthConfig, environment: &str) {
    if !auth.enabled {
        warn!(
            environment,
            "Authorization is DISABLED: every request runs as the anonymous principal"
        );
    }
    if environment == "production" && auth.keto.read_url.starts_with("http://") {
        warn!(
            url = %auth.keto.read_url,
            "Keto read API is reached over plain HTTP in production"
        );
    }
}
