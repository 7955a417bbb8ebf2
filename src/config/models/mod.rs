//! Configuration data models
//!
//! This module defines all configuration structures used throughout the gateway.

pub mod auth;
pub mod gateway;
pub mod server;
pub mod storage;

// Re-export all configuration types
pub use auth::*;
pub use gateway::*;
pub use server::*;
pub use storage::*;

/// Default values for configuration
pub fn default_host() -> String {
    "127.0.0.1".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8080
}

/// Default request timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

/// Default timeout for calls to the relation-tuple store, in seconds
pub fn default_keto_timeout() -> u64 {
    5
}

/// Default timeout for token introspection calls, in seconds
pub fn default_introspection_timeout() -> u64 {
    5
}

pub fn default_keto_read_url() -> String {
    "http://localhost:4466".to_string()
}

pub fn default_keto_write_url() -> String {
    "http://localhost:4467".to_string()
}

pub fn default_keto_namespace() -> String {
    "fastapi-resource-server".to_string()
}

pub fn default_hydra_admin_url() -> String {
    "http://localhost:4445".to_string()
}

pub fn default_hydra_public_url() -> String {
    "http://localhost:4444".to_string()
}

pub fn default_database_url() -> String {
    "sqlite::memory:".to_string()
}

pub fn default_max_connections() -> u32 {
    5
}

pub fn default_connection_timeout() -> u64 {
    5
}

pub fn default_environment() -> String {
    "development".to_string()
}

pub(crate) fn default_true() -> bool {
    true
}
