//! Read-side client for the relation-tuple store

use super::error::KetoError;
use super::types::{CheckResponse, ListTuplesResponse, Relation, RelationTuple, TupleFilter};
use crate::config::KetoConfig;
use crate::utils::error::{GatewayError, Result};
use crate::utils::join_url;
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Source of relation tuples
///
/// Both operations are total: a failed query yields the fail-closed value
/// (no tuples, not allowed) instead of an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RelationTupleSource: Send + Sync {
    /// List tuples matching the filter
    async fn list_tuples(&self, filter: &TupleFilter) -> Vec<RelationTuple>;

    /// Ask the store whether a single tuple holds
    async fn check_tuple(
        &self,
        namespace: &str,
        object: &str,
        relation: &Relation,
        subject_id: &str,
    ) -> bool;
}

/// HTTP client for the Keto read API
#[derive(Debug, Clone)]
pub struct KetoClient {
    read_url: String,
    client: reqwest::Client,
}

impl KetoClient {
    /// Create a client from configuration
    pub fn new(config: &KetoConfig) -> Result<Self> {
        Self::with_timeout(&config.read_url, Duration::from_secs(config.timeout_secs))
    }

    /// Create a client for a read API base URL with a per-request timeout
    pub fn with_timeout(read_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::config(format!("Failed to build Keto HTTP client: {}", e)))?;

        info!("Keto client initialized for {}", read_url);
        Ok(Self {
            read_url: read_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Base URL of the read API
    pub fn read_url(&self) -> &str {
        &self.read_url
    }

    async fn fetch_tuples(
        &self,
        filter: &TupleFilter,
    ) -> std::result::Result<Vec<RelationTuple>, KetoError> {
        let url = join_url(&self.read_url, "relation-tuples");

        let response = self
            .client
            .get(&url)
            .query(&filter.to_query())
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(KetoError::Status(response.status().as_u16()));
        }

        let body = response.bytes().await?;
        let parsed: ListTuplesResponse = serde_json::from_slice(&body)?;

        Ok(parsed
            .relation_tuples
            .into_iter()
            .map(RelationTuple::from)
            .collect())
    }

    async fn fetch_check(
        &self,
        namespace: &str,
        object: &str,
        relation: &Relation,
        subject_id: &str,
    ) -> std::result::Result<bool, KetoError> {
        let url = join_url(&self.read_url, "relation-tuples/check");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("namespace", namespace),
                ("object", object),
                ("relation", relation.as_str()),
                ("subject_id", subject_id),
            ])
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(KetoError::Status(response.status().as_u16()));
        }

        let body = response.bytes().await?;
        let parsed: CheckResponse = serde_json::from_slice(&body)?;
        Ok(parsed.allowed)
    }
}

fn log_failure(operation: &str, err: &KetoError) {
    match err {
        KetoError::Status(status) => {
            warn!(status = *status, "Keto {} returned non-success status", operation)
        }
        other => error!("Keto {} failed: {}", operation, other),
    }
}

#[async_trait]
impl RelationTupleSource for KetoClient {
    async fn list_tuples(&self, filter: &TupleFilter) -> Vec<RelationTuple> {
        match self.fetch_tuples(filter).await {
            Ok(tuples) => {
                info!(
                    namespace = %filter.namespace,
                    count = tuples.len(),
                    "Retrieved relation tuples"
                );
                tuples
            }
            Err(e) => {
                log_failure("list", &e);
                Vec::new()
            }
        }
    }

    async fn check_tuple(
        &self,
        namespace: &str,
        object: &str,
        relation: &Relation,
        subject_id: &str,
    ) -> bool {
        match self.fetch_check(namespace, object, relation, subject_id).await {
            Ok(allowed) => {
                debug!(
                    "Permission check {}:{}#{}@{} -> {}",
                    namespace, object, relation, subject_id, allowed
                );
                allowed
            }
            Err(e) => {
                log_failure("check", &e);
                false
            }
        }
    }
}
