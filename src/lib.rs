//! # Resource Gateway
//!
//! A resource server whose authorization decisions come from Ory Keto
//! relation tuples. Bearer tokens are introspected against Ory Hydra; the
//! caller's permissions are resolved from direct grants and one level of
//! role membership. Every resolution failure fails closed.
//!
//! ## Resolving permissions
//!
//! ```rust,no_run
//! use resource_gateway::auth::{PermissionChecker, PermissionResolver};
//! use resource_gateway::config::KetoConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let resolver = PermissionResolver::from_config(&KetoConfig::default())?;
//!
//!     let permissions = resolver.get_user_permissions("alice").await;
//!     let allowed = resolver.check_permission("alice", "data:read").await;
//!     println!("{:?} / read allowed: {}", permissions, allowed);
//!     Ok(())
//! }
//! ```
//!
//! ## Serving the API
//!
//! ```rust,no_run
//! use resource_gateway::Config;
//! use resource_gateway::server::run_server;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config/gateway.yaml").await?;
//!     run_server(config).await?;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod config;
pub mod core;
pub mod server;
pub mod storage;
pub mod utils;

// Re-export main types
pub use auth::{AuthSystem, Authorization, PermissionChecker, PermissionResolver};
pub use config::Config;
pub use utils::error::{GatewayError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
