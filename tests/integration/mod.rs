//! Integration tests for resource-gateway
//!
//! These tests drive real components over real HTTP; only the remote
//! services are replaced by wiremock servers.

pub mod data_management_tests;
pub mod http_flow_tests;
pub mod keto_resolution_tests;
