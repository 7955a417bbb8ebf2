// Module declarations
mod access;
mod connection;
mod team_ops;
mod types;
mod user_ops;

// Re-export public types
pub use types::{DatabaseBackendType, SeaOrmDatabase};
