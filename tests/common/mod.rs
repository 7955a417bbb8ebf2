//! Common test utilities for resource-gateway
//!
//! - [`keto::KetoStub`]: a wiremock server speaking Keto's read API
//! - [`hydra::HydraStub`]: a wiremock server answering token introspection
//! - [`database::TestDatabase`]: isolated in-memory SQLite

pub mod database;
pub mod hydra;
pub mod keto;

// Re-export commonly used items
pub use database::TestDatabase;
pub use hydra::HydraStub;
pub use keto::{KetoStub, tuple};

/// Assert that a result is Ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Assert that a result is Err
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(v) => panic!("Expected Err, got Ok: {:?}", v),
            Err(e) => e,
        }
    };
}
