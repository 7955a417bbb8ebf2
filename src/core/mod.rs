//! Core functionality for the Gateway
//!
//! Entity models and the data-management use case.

pub mod data;
pub mod models;
