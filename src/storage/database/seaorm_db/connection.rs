use crate::config::DatabaseConfig;
use crate::utils::error::{GatewayError, Result};
use sea_orm::*;
use sea_orm_migration::MigratorTrait;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::super::entities;
use super::super::migration::Migrator;
use super::types::{DatabaseBackendType, SeaOrmDatabase};

impl SeaOrmDatabase {
    /// Connect and, when configured, create missing tables
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let db = Self::try_connect(config).await?;
        let backend_type = DatabaseBackendType::from_url(&config.url);
        info!("Database connection established ({:?})", backend_type);

        let database = Self { db, backend_type };
        if config.auto_migrate {
            database.migrate().await?;
        }
        Ok(database)
    }

    /// Try to connect to a database
    async fn try_connect(config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(config.url.clone());

        // Every pooled connection to `sqlite::memory:` opens its own empty
        // database, so the pool must hold exactly one long-lived connection.
        if config.is_in_memory() {
            opt.max_connections(1)
                .min_connections(1)
                .idle_timeout(Duration::from_secs(u32::MAX as u64))
                .max_lifetime(Duration::from_secs(u32::MAX as u64));
        } else {
            opt.max_connections(config.max_connections)
                .min_connections(1)
                .idle_timeout(Duration::from_secs(600))
                .max_lifetime(Duration::from_secs(3600));
        }

        opt.connect_timeout(Duration::from_secs(config.connection_timeout))
            .acquire_timeout(Duration::from_secs(30))
            .sqlx_logging(true)
            .sqlx_logging_level(log::LevelFilter::Debug);

        Database::connect(opt).await.map_err(GatewayError::Database)
    }

    /// Get the current backend type
    pub fn backend_type(&self) -> DatabaseBackendType {
        self.backend_type
    }

    /// Run database migrations
    pub async fn migrate(&self) -> Result<()> {
        info!("Running database migrations...");
        Migrator::up(&self.db, None).await.map_err(|e| {
            warn!("Migration failed: {}", e);
            GatewayError::Database(e)
        })?;
        info!("Database migrations completed successfully");
        Ok(())
    }

    /// Health check
    pub async fn health_check(&self) -> Result<()> {
        debug!("Performing database health check");

        let _result = entities::Team::find()
            .limit(1)
            .all(&self.db)
            .await
            .map_err(GatewayError::Database)?;

        debug!("Database health check passed");
        Ok(())
    }
}

/// Map write failures caused by bad input to validation errors
pub(super) fn map_write_error(err: DbErr) -> GatewayError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            GatewayError::validation(format!("Unique constraint violated: {}", detail))
        }
        Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
            GatewayError::validation(format!("Referenced record does not exist: {}", detail))
        }
        _ => GatewayError::Database(err),
    }
}
