//! Configuration loading utilities
//!
//! Environment overrides use the variable names the Keto/Hydra deployment
//! already exports (`KETO_READ_URL`, `HYDRA_ADMIN_URL`, ...).

use super::models::*;
use crate::utils::error::{GatewayError, Result};
use std::env;
use std::str::FromStr;
use tracing::debug;

impl GatewayConfig {
    /// Apply overrides from the process environment
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_overrides(|key| env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        debug!("Applying configuration overrides from environment");

        if let Some(environment) = lookup("ENVIRONMENT") {
            self.environment = environment;
        }

        // Server configuration
        if let Some(host) = lookup("GATEWAY_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("GATEWAY_PORT") {
            self.server.port = parse_var("GATEWAY_PORT", &port)?;
        }

        // Database configuration
        if let Some(url) = lookup("DATABASE_URL") {
            self.storage.database.url = url;
        }

        // Relation-tuple store
        if let Some(url) = lookup("KETO_READ_URL") {
            self.auth.keto.read_url = url;
        }
        if let Some(url) = lookup("KETO_WRITE_URL") {
            self.auth.keto.write_url = url;
        }
        if let Some(namespace) = lookup("KETO_NAMESPACE") {
            self.auth.keto.namespace = namespace;
        }
        if let Some(timeout) = lookup("KETO_TIMEOUT_SECS") {
            self.auth.keto.timeout_secs = parse_var("KETO_TIMEOUT_SECS", &timeout)?;
        }

        // OAuth2 server
        if let Some(url) = lookup("HYDRA_ADMIN_URL") {
            self.auth.hydra.admin_url = url;
        }
        if let Some(url) = lookup("HYDRA_PUBLIC_URL") {
            self.auth.hydra.public_url = url;
        }
        if let Some(client_id) = lookup("OAUTH2_CLIENT_ID") {
            self.auth.hydra.client_id = Some(client_id);
        }
        if let Some(secret) = lookup("OAUTH2_CLIENT_SECRET") {
            self.auth.hydra.client_secret = Some(secret);
        }

        if let Some(enabled) = lookup("AUTH_ENABLED") {
            self.auth.enabled = parse_var("AUTH_ENABLED", &enabled)?;
        }

        Ok(())
    }
}

fn parse_var<T>(name: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| GatewayError::Config(format!("Invalid {}: {}", name, e)))
}
