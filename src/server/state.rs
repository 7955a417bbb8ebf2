//! Application state shared across HTTP handlers

use crate::auth::AuthSystem;
use crate::config::Config;
use crate::core::data::DataManager;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// All fields are wrapped in Arc so cloning per worker is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Gateway configuration (shared read-only)
    pub config: Arc<Config>,
    /// Authentication system
    pub auth: Arc<AuthSystem>,
    /// Data manager for the REST channel
    pub data: Arc<dyn DataManager>,
}

impl AppState {
    pub fn new(config: Config, auth: AuthSystem, data: Arc<dyn DataManager>) -> Self {
        Self {
            config: Arc::new(config),
            auth: Arc::new(auth),
            data,
        }
    }
}
