//! Resolve a user's permissions and roles against a running Keto
//!
//! Needs Keto's read API (default `http://localhost:4466`, override with
//! `KETO_READ_URL`) with tuples loaded into the configured namespace.
//!
//! ```text
//! cargo run --example keto_usage -- alice
//! ```

use resource_gateway::auth::{Authorization, PermissionChecker, PermissionResolver};
use resource_gateway::config::Config;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let username = std::env::args().nth(1).unwrap_or_else(|| "alice".to_string());
    let config = Config::from_env()?;
    let keto = &config.auth().keto;

    println!("Keto read API: {}", keto.read_url);
    println!("Namespace:     {}", keto.namespace);
    println!();

    let resolver = Arc::new(PermissionResolver::from_config(keto)?);

    // Direct grants plus one level of role membership
    let mut permissions: Vec<String> = resolver
        .get_user_permissions(&username)
        .await
        .into_iter()
        .collect();
    permissions.sort();
    println!("User '{}' has {} permissions:", username, permissions.len());
    for permission in &permissions {
        println!("  - {}", permission);
    }

    let roles = resolver.get_user_roles(&username).await;
    println!("\nUser '{}' has {} roles:", username, roles.len());
    for role in &roles {
        println!("  - {}", role);
    }

    // Point checks only see direct grants
    println!("\nPoint checks:");
    for permission in ["data:read", "data:write", "data:update", "data:delete"] {
        let allowed = resolver.check_permission(&username, permission).await;
        let status = if allowed { "ALLOWED" } else { "DENIED " };
        println!("  {}  {}", status, permission);
    }

    let requested = ["data:read".to_string(), "data:delete".to_string()];
    let scopes = Authorization::new(resolver)
        .get_user_authorized_scopes(&username, &requested)
        .await;
    println!("\nAuthorized scopes out of {:?}: {:?}", requested, scopes);

    Ok(())
}
