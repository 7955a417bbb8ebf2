//! Permission resolution
//!
//! [`PermissionResolver`] turns relation tuples into a user's effective
//! permissions and answers point checks; [`Authorization`] builds the
//! request-level questions on top of any [`PermissionChecker`].

mod authorization;
mod checker;
mod resolver;

pub use authorization::Authorization;
#[cfg(test)]
pub use checker::MockPermissionChecker;
pub use checker::PermissionChecker;
pub use resolver::PermissionResolver;
