//! Authorization use case

use super::checker::PermissionChecker;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

/// Request-facing authorization questions over any [`PermissionChecker`]
#[derive(Clone)]
pub struct Authorization {
    checker: Arc<dyn PermissionChecker>,
}

impl Authorization {
    pub fn new(checker: Arc<dyn PermissionChecker>) -> Self {
        Self { checker }
    }

    /// Whether the user holds the permission (point check)
    pub async fn check_user_access(&self, username: &str, required_permission: &str) -> bool {
        self.checker
            .check_permission(username, required_permission)
            .await
    }

    /// The requested scopes the user actually holds
    ///
    /// Keeps request order and drops repeats.
    pub async fn get_user_authorized_scopes(
        &self,
        username: &str,
        requested_scopes: &[String],
    ) -> Vec<String> {
        let permissions = self.checker.get_user_permissions(username).await;

        let mut seen = HashSet::new();
        let scopes: Vec<String> = requested_scopes
            .iter()
            .filter(|scope| permissions.contains(scope.as_str()))
            .filter(|scope| seen.insert(scope.as_str()))
            .cloned()
            .collect();

        debug!(
            username,
            requested = requested_scopes.len(),
            granted = scopes.len(),
            "Filtered authorized scopes"
        );
        scopes
    }
}
