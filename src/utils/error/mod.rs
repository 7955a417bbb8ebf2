//! Error handling for the gateway
//!
//! This module defines the error taxonomy used by configuration, storage,
//! token validation and the HTTP surface. The permission-resolution core never
//! produces these errors: it resolves every failure to a fail-closed value.

mod helpers;
mod response;
mod types;

pub use response::{ErrorDetail, ErrorResponse};
pub use types::{GatewayError, Result};
