//! Permission checking port

use async_trait::async_trait;
use std::collections::HashSet;

/// Answers permission questions about a user
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PermissionChecker: Send + Sync {
    /// Point check of a single permission
    async fn check_permission(&self, username: &str, permission: &str) -> bool;

    /// Effective permission set of a user
    async fn get_user_permissions(&self, username: &str) -> HashSet<String>;

    /// Roles the user is a member of, in store order
    async fn get_user_roles(&self, username: &str) -> Vec<String>;
}
