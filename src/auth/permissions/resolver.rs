//! Keto-backed permission resolution

use super::checker::PermissionChecker;
use crate::auth::keto::{KetoClient, Relation, RelationTupleSource, TupleFilter, role_object};
use crate::config::KetoConfig;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info};

/// Resolves permissions from relation tuples
///
/// Effective permissions are the union of direct `granted` tuples and the
/// grants of every role the user is a `member` of. Roles are expanded one
/// level deep; a role that is itself a member of another role contributes
/// only its own grants.
#[derive(Clone)]
pub struct PermissionResolver {
    source: Arc<dyn RelationTupleSource>,
    namespace: String,
}

impl PermissionResolver {
    pub fn new(source: Arc<dyn RelationTupleSource>, namespace: impl Into<String>) -> Self {
        Self {
            source,
            namespace: namespace.into(),
        }
    }

    /// Create a resolver backed by a [`KetoClient`]
    pub fn from_config(config: &KetoConfig) -> Result<Self> {
        let client = KetoClient::new(config)?;
        Ok(Self::new(Arc::new(client), config.namespace.clone()))
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Permissions granted to a role, stored as the subjects of its
    /// `granted` tuples
    async fn role_permissions(&self, role_name: &str) -> Vec<String> {
        let filter = TupleFilter::new(&self.namespace)
            .object(role_object(role_name))
            .relation(Relation::Granted);

        self.source
            .list_tuples(&filter)
            .await
            .into_iter()
            .map(|tuple| tuple.subject_id)
            .filter(|subject| !subject.is_empty())
            .collect()
    }
}

impl std::fmt::Debug for PermissionResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PermissionResolver")
            .field("namespace", &self.namespace)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl PermissionChecker for PermissionResolver {
    async fn check_permission(&self, username: &str, permission: &str) -> bool {
        let allowed = self
            .source
            .check_tuple(&self.namespace, permission, &Relation::Granted, username)
            .await;

        debug!(username, permission, allowed, "Checked permission");
        allowed
    }

    async fn get_user_permissions(&self, username: &str) -> HashSet<String> {
        let filter = TupleFilter::new(&self.namespace).subject_id(username);
        let tuples = self.source.list_tuples(&filter).await;

        let mut permissions = HashSet::new();
        let mut expanded_roles = HashSet::new();

        for tuple in &tuples {
            match (&tuple.relation, tuple.role_name()) {
                (Relation::Granted, None) if !tuple.object.is_empty() => {
                    permissions.insert(tuple.object.clone());
                }
                (Relation::Member, Some(role)) => {
                    if expanded_roles.insert(role.to_string()) {
                        permissions.extend(self.role_permissions(role).await);
                    }
                }
                _ => {}
            }
        }

        info!(
            username,
            roles = expanded_roles.len(),
            count = permissions.len(),
            "Resolved user permissions"
        );
        permissions
    }

    async fn get_user_roles(&self, username: &str) -> Vec<String> {
        let filter = TupleFilter::new(&self.namespace)
            .subject_id(username)
            .relation(Relation::Member);

        let roles: Vec<String> = self
            .source
            .list_tuples(&filter)
            .await
            .iter()
            .filter_map(|tuple| tuple.role_name().map(str::to_string))
            .collect();

        info!(username, count = roles.len(), "Resolved user roles");
        roles
    }
}
