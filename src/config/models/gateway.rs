//! Main gateway configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Main gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Deployment environment (`development`, `test`, `production`)
    #[serde(default = "default_environment")]
    pub environment: String,
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            environment: default_environment(),
            server: ServerConfig::default(),
            storage: StorageConfig::default(),
            auth: AuthConfig::default(),
        }
    }
}

impl GatewayConfig {
    /// Whether this is a development or test deployment
    pub fn is_development(&self) -> bool {
        matches!(self.environment.as_str(), "development" | "test")
    }
}
