//! Test database utilities
//!
//! Each [`TestDatabase`] is a separate in-memory SQLite database with the
//! schema already migrated.

use resource_gateway::config::DatabaseConfig;
use resource_gateway::core::data::DbAccess;
use resource_gateway::storage::Database;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct TestDatabase {
    inner: Arc<Database>,
}

impl TestDatabase {
    pub async fn new() -> Self {
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            connection_timeout: 5,
            auto_migrate: true,
        };

        let db = Database::new(&config)
            .await
            .expect("Failed to create in-memory test database");

        Self {
            inner: Arc::new(db),
        }
    }

    pub fn db(&self) -> &Database {
        &self.inner
    }

    /// The database as the repository port
    pub fn repository(&self) -> Arc<dyn DbAccess> {
        self.inner.clone()
    }
}
