//! Storage layer for the Gateway
//!
//! This module provides data persistence for the managed entities.

/// Database storage module
pub mod database;

pub use database::Database;
