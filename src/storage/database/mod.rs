//! Database storage implementation using SeaORM
//!
//! Users and teams live in two relational tables; [`Database`] implements
//! the [`DbAccess`](crate::core::data::DbAccess) port over them.

/// Database entities module
pub mod entities;
/// Database migration module
pub mod migration;
/// SeaORM database implementation module
pub mod seaorm_db;

// Re-export the main database interface
pub use seaorm_db::DatabaseBackendType;
pub use seaorm_db::SeaOrmDatabase as Database;
