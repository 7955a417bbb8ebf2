//! Token types

use crate::utils::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Validated access-token information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenData {
    /// Subject (user id at the identity provider)
    pub sub: String,
    /// Username used as the subject of relation tuples
    pub username: String,
    /// Granted OAuth2 scopes
    pub scopes: Vec<String>,
    pub active: bool,
    /// Expiry as a unix timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
}

impl TokenData {
    /// Principal used when authorization is disabled
    pub fn anonymous() -> Self {
        Self {
            sub: "anonymous".to_string(),
            username: "anonymous".to_string(),
            scopes: Vec::new(),
            active: true,
            expires_at: None,
        }
    }

    pub fn has_scope(&self, scope: &str) -> bool {
        self.scopes.iter().any(|s| s == scope)
    }
}

/// Validates and introspects bearer tokens
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenValidator: Send + Sync {
    /// Resolve a token to its data; inactive or unknown tokens are errors
    async fn introspect_token(&self, token: &str) -> Result<TokenData>;
}

/// RFC 7662 introspection response
#[derive(Debug, Deserialize)]
pub(crate) struct IntrospectionResponse {
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub exp: Option<i64>,
}

impl IntrospectionResponse {
    pub(crate) fn into_token_data(self) -> TokenData {
        let sub = self.sub.unwrap_or_default();
        let username = self
            .username
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| sub.clone());
        let scopes = self
            .scope
            .map(|scope| scope.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default();

        TokenData {
            sub,
            username,
            scopes,
            active: self.active,
            expires_at: self.exp,
        }
    }
}
