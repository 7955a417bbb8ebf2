//! Configuration management for the gateway
//!
//! This module handles loading, validation, and management of all gateway configuration.

mod loader;
pub mod models;

pub use models::*;

use crate::utils::error::{GatewayError, Result};
use std::path::Path;
use tracing::{debug, info, warn};

/// Main configuration struct for the gateway
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Gateway configuration
    pub gateway: GatewayConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| GatewayError::Config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_yaml(&content)?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse and validate configuration from a YAML document
    pub fn from_yaml(content: &str) -> Result<Self> {
        let gateway: GatewayConfig = serde_yaml::from_str(content)
            .map_err(|e| GatewayError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { gateway };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables on top of the defaults
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut gateway = GatewayConfig::default();
        gateway.apply_env()?;

        let config = Self { gateway };
        config.validate()?;
        Ok(config)
    }

    /// Load the file if it exists, fall back to defaults otherwise, then
    /// apply environment overrides
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let mut gateway = if tokio::fs::try_exists(path).await.unwrap_or(false) {
            Self::from_file(path).await?.gateway
        } else {
            warn!(
                "Configuration file {:?} not found, using defaults and environment",
                path
            );
            GatewayConfig::default()
        };

        gateway.apply_env()?;

        let config = Self { gateway };
        config.validate()?;
        Ok(config)
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.gateway.server
    }

    /// Get storage configuration
    pub fn storage(&self) -> &StorageConfig {
        &self.gateway.storage
    }

    /// Get auth configuration
    pub fn auth(&self) -> &AuthConfig {
        &self.gateway.auth
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.gateway
            .server
            .validate()
            .map_err(|e| GatewayError::Config(format!("Server config error: {}", e)))?;

        self.gateway
            .storage
            .database
            .validate()
            .map_err(|e| GatewayError::Config(format!("Storage config error: {}", e)))?;

        self.gateway
            .auth
            .validate()
            .map_err(|e| GatewayError::Config(format!("Auth config error: {}", e)))?;

        crate::config::models::auth::warn_insecure_config(
            &self.gateway.auth,
            &self.gateway.environment,
        );

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.gateway)
            .map_err(|e| GatewayError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_config_from_file() {
        let config_content = r#"
environment: "production"

server:
  host: "0.0.0.0"
  port: 9090

storage:
  database:
    url: "sqlite://data/gateway.db?mode=rwc"

auth:
  keto:
    read_url: "http://keto:4466"
    namespace: "resource-server"
  hydra:
    admin_url: "http://hydra:4445"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(config_content.as_bytes()).unwrap();

        let config = Config::from_file(temp_file.path()).await.unwrap();

        assert_eq!(config.server().host, "0.0.0.0");
        assert_eq!(config.server().port, 9090);
        assert_eq!(config.auth().keto.read_url, "http://keto:4466");
        assert_eq!(config.auth().keto.namespace, "resource-server");
        assert_eq!(config.auth().keto.timeout_secs, 5);
        assert_eq!(config.auth().hydra.admin_url, "http://hydra:4445");
        assert!(!config.storage().database.is_in_memory());
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = Config::from_yaml("{}").unwrap();
        assert_eq!(config.auth().keto.read_url, "http://localhost:4466");
        assert_eq!(config.server().port, 8080);
    }

    #[test]
    fn test_invalid_yaml_is_config_error() {
        let result = Config::from_yaml("server: [unterminated");
        assert!(matches!(result, Err(GatewayError::Config(_))));
    }

    #[test]
    fn test_invalid_values_fail_validation() {
        let result = Config::from_yaml(
            r#"
auth:
  keto:
    namespace: ""
"#,
        );
        assert!(matches!(result, Err(GatewayError::Config(msg)) if msg.contains("Auth config error")));
    }

    #[tokio::test]
    async fn test_missing_file_is_config_error() {
        let result = Config::from_file("/definitely/not/here/gateway.yaml").await;
        assert!(matches!(result, Err(GatewayError::Config(_))));
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization_hides_secret() {
        let mut config = Config::default();
        config.gateway.auth.hydra.client_id = Some("gateway".to_string());
        config.gateway.auth.hydra.client_secret = Some("very-secret".to_string());

        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("gateway"));
        assert!(!yaml.contains("very-secret"));
    }
}
