//! Permission resolution against a Keto stub

#[cfg(test)]
mod tests {
    use crate::common::keto::unreachable_config;
    use crate::common::{KetoStub, tuple};
    use resource_gateway::auth::{Authorization, PermissionChecker, PermissionResolver};
    use serde_json::json;
    use std::collections::HashSet;
    use std::sync::Arc;
    use wiremock::ResponseTemplate;

    fn set(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_direct_grants_only() {
        let keto = KetoStub::start().await;
        keto.user_tuples(
            "bob",
            vec![
                tuple("data:read", "granted", "bob"),
                tuple("data:update", "granted", "bob"),
            ],
        )
        .await;

        let permissions = keto.resolver().get_user_permissions("bob").await;
        assert_eq!(permissions, set(&["data:read", "data:update"]));
    }

    #[tokio::test]
    async fn test_direct_grant_plus_admin_role() {
        let keto = KetoStub::start().await;
        keto.user_tuples(
            "alice",
            vec![
                tuple("data:read", "granted", "alice"),
                tuple("role:admin", "member", "alice"),
            ],
        )
        .await;
        keto.role_grants("admin", &["data:write", "data:delete"], 1)
            .await;

        let permissions = keto.resolver().get_user_permissions("alice").await;
        assert_eq!(permissions, set(&["data:read", "data:write", "data:delete"]));
    }

    #[tokio::test]
    async fn test_role_grants_overlapping_direct_grants_are_deduplicated() {
        let keto = KetoStub::start().await;
        keto.user_tuples(
            "carol",
            vec![
                tuple("data:read", "granted", "carol"),
                tuple("role:viewer", "member", "carol"),
                tuple("role:viewer", "member", "carol"),
            ],
        )
        .await;
        // Repeated membership still costs one sub-query
        keto.role_grants("viewer", &["data:read", "data:export"], 1)
            .await;

        let permissions = keto.resolver().get_user_permissions("carol").await;
        assert_eq!(permissions, set(&["data:read", "data:export"]));
    }

    #[tokio::test]
    async fn test_empty_store() {
        let keto = KetoStub::start().await;
        keto.user_tuples("nobody", vec![]).await;
        keto.user_memberships("nobody", vec![]).await;

        let resolver = keto.resolver();
        assert!(resolver.get_user_permissions("nobody").await.is_empty());
        assert!(resolver.get_user_roles("nobody").await.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_store_fails_closed() {
        let resolver = PermissionResolver::from_config(&unreachable_config()).unwrap();

        assert!(resolver.get_user_permissions("alice").await.is_empty());
        assert!(resolver.get_user_roles("alice").await.is_empty());
        assert!(!resolver.check_permission("alice", "data:read").await);
    }

    #[tokio::test]
    async fn test_failed_role_expansion_keeps_direct_grants() {
        let keto = KetoStub::start().await;
        keto.user_tuples(
            "dave",
            vec![
                tuple("data:read", "granted", "dave"),
                tuple("role:broken", "member", "dave"),
                tuple("role:editor", "member", "dave"),
            ],
        )
        .await;
        keto.role_grants_status("broken", 500).await;
        keto.role_grants("editor", &["data:update"], 1).await;

        let permissions = keto.resolver().get_user_permissions("dave").await;
        assert_eq!(permissions, set(&["data:read", "data:update"]));
    }

    #[tokio::test]
    async fn test_nested_roles_are_not_followed() {
        let keto = KetoStub::start().await;
        keto.user_tuples("erin", vec![tuple("role:lead", "member", "erin")])
            .await;
        // `lead` lists another role among its grants; only the literal
        // subjects count and `role:staff` itself is never queried
        keto.role_grants("lead", &["data:approve", "role:staff"], 1)
            .await;
        keto.role_grants("staff", &["data:read"], 0).await;

        let permissions = keto.resolver().get_user_permissions("erin").await;
        assert!(permissions.contains("data:approve"));
        assert!(!permissions.contains("data:read"));
    }

    #[tokio::test]
    async fn test_resolution_is_idempotent() {
        let keto = KetoStub::start().await;
        keto.user_tuples(
            "alice",
            vec![
                tuple("data:read", "granted", "alice"),
                tuple("role:admin", "member", "alice"),
            ],
        )
        .await;
        keto.role_grants("admin", &["data:write"], 2).await;

        let resolver = keto.resolver();
        let first = resolver.get_user_permissions("alice").await;
        let second = resolver.get_user_permissions("alice").await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_roles_strip_prefix_and_keep_store_order() {
        let keto = KetoStub::start().await;
        keto.user_memberships(
            "frank",
            vec![
                tuple("role:viewer", "member", "frank"),
                tuple("group:ops", "member", "frank"),
                tuple("role:admin", "member", "frank"),
                tuple("role:viewer", "member", "frank"),
            ],
        )
        .await;

        let roles = keto.resolver().get_user_roles("frank").await;
        assert_eq!(roles, vec!["viewer", "admin", "viewer"]);
    }

    #[tokio::test]
    async fn test_check_permission_statuses() {
        let keto = KetoStub::start().await;
        keto.allow("data:read", "alice", true).await;
        keto.allow("data:write", "alice", false).await;
        keto.check("data:delete", "alice", ResponseTemplate::new(403))
            .await;
        keto.check(
            "data:update",
            "alice",
            ResponseTemplate::new(500).set_body_json(json!({ "allowed": true })),
        )
        .await;

        let resolver = keto.resolver();
        assert!(resolver.check_permission("alice", "data:read").await);
        assert!(!resolver.check_permission("alice", "data:write").await);
        assert!(!resolver.check_permission("alice", "data:delete").await);
        assert!(!resolver.check_permission("alice", "data:update").await);
    }

    #[tokio::test]
    async fn test_check_permission_does_not_expand_roles() {
        let keto = KetoStub::start().await;
        keto.user_tuples("alice", vec![tuple("role:admin", "member", "alice")])
            .await;
        keto.role_grants("admin", &["data:write"], 0).await;
        keto.allow("data:write", "alice", false).await;

        assert!(!keto.resolver().check_permission("alice", "data:write").await);
    }

    #[tokio::test]
    async fn test_authorized_scopes_follow_request_order() {
        let keto = KetoStub::start().await;
        keto.user_tuples(
            "alice",
            vec![
                tuple("data:read", "granted", "alice"),
                tuple("role:admin", "member", "alice"),
            ],
        )
        .await;
        keto.role_grants("admin", &["data:write"], 1).await;

        let authorization = Authorization::new(Arc::new(keto.resolver()));
        let requested = vec![
            "data:write".to_string(),
            "data:delete".to_string(),
            "data:read".to_string(),
            "data:write".to_string(),
        ];

        let scopes = authorization
            .get_user_authorized_scopes("alice", &requested)
            .await;
        assert_eq!(scopes, vec!["data:write", "data:read"]);
    }
}
