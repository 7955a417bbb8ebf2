//! OAuth2 token introspection against Ory Hydra

use super::types::{IntrospectionResponse, TokenData, TokenValidator};
use crate::config::HydraConfig;
use crate::utils::error::{GatewayError, Result};
use crate::utils::join_url;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

/// Introspects tokens through the Hydra admin API
#[derive(Debug, Clone)]
pub struct HydraTokenValidator {
    introspect_url: String,
    client_id: Option<String>,
    client_secret: Option<String>,
    client: reqwest::Client,
}

impl HydraTokenValidator {
    pub fn new(config: &HydraConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GatewayError::config(format!("Failed to build Hydra HTTP client: {}", e)))?;

        Ok(Self {
            introspect_url: join_url(&config.admin_url, "admin/oauth2/introspect"),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            client,
        })
    }

    pub fn introspect_url(&self) -> &str {
        &self.introspect_url
    }
}

#[async_trait]
impl TokenValidator for HydraTokenValidator {
    async fn introspect_token(&self, token: &str) -> Result<TokenData> {
        let mut request = self
            .client
            .post(&self.introspect_url)
            .form(&[("token", token)]);

        if let Some(client_id) = &self.client_id {
            request = request.basic_auth(client_id, self.client_secret.as_ref());
        }

        let response = request
            .send()
            .await
            .map_err(|e| GatewayError::network(format!("Token introspection failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Token introspection rejected");
            return Err(GatewayError::auth(format!(
                "Token introspection returned {}",
                status
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| GatewayError::network(format!("Failed to read introspection body: {}", e)))?;
        let parsed: IntrospectionResponse = serde_json::from_slice(&body)
            .map_err(|e| GatewayError::parsing(format!("Invalid introspection response: {}", e)))?;

        if !parsed.active {
            return Err(GatewayError::auth("Token is not active"));
        }

        let token_data = parsed.into_token_data();
        if token_data.username.is_empty() {
            return Err(GatewayError::auth("Token has no subject"));
        }

        debug!(username = %token_data.username, "Token introspected");
        Ok(token_data)
    }
}
