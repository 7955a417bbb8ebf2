//! Entity store port

use crate::core::models::{
    EntityKind, EntityRecord, NewRecord, Pagination, RecordChanges, RecordKey, User,
};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Relational entity store
///
/// Reads, updates and deletes of a missing record fail with `NotFound`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DbAccess: Send + Sync {
    async fn create_record(&self, record: NewRecord) -> Result<EntityRecord>;

    async fn read_record(&self, kind: EntityKind, key: &RecordKey) -> Result<EntityRecord>;

    /// Page of records ordered by name
    async fn list_records(
        &self,
        kind: EntityKind,
        pagination: &Pagination,
    ) -> Result<Vec<EntityRecord>>;

    async fn update_record(
        &self,
        kind: EntityKind,
        key: &RecordKey,
        changes: RecordChanges,
    ) -> Result<EntityRecord>;

    async fn delete_record(&self, kind: EntityKind, key: &RecordKey) -> Result<()>;

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>>;
}
