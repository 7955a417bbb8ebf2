//! Authentication and authorization system
//!
//! - **keto**: relation-tuple store client
//! - **permissions**: permission resolution and the authorization use case
//! - **token**: bearer token introspection

pub mod keto;
pub mod permissions;
mod system;
pub mod token;
mod types;

pub use permissions::{Authorization, PermissionChecker, PermissionResolver};
pub use system::AuthSystem;
pub use token::{TokenData, TokenValidator};
pub use types::AuthzResult;
