//! Data-management requests and responses

use crate::core::models::{
    EntityKind, EntityRecord, NewRecord, OperationKind, Pagination, RecordChanges, RecordKey,
};
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::Serialize;

/// What to do with an entity table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataOperation {
    Create(NewRecord),
    Read(RecordKey),
    List(Pagination),
    Update(RecordKey, RecordChanges),
    Delete(RecordKey),
}

impl DataOperation {
    /// Operation class used for allow-listing; listing is a read
    pub fn kind(&self) -> OperationKind {
        match self {
            DataOperation::Create(_) => OperationKind::Create,
            DataOperation::Read(_) | DataOperation::List(_) => OperationKind::Read,
            DataOperation::Update(..) => OperationKind::Update,
            DataOperation::Delete(_) => OperationKind::Delete,
        }
    }
}

/// A data-management request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataRequest {
    pub entity: EntityKind,
    pub operation: DataOperation,
}

impl DataRequest {
    pub fn new(entity: EntityKind, operation: DataOperation) -> Self {
        Self { entity, operation }
    }

    pub fn create(record: NewRecord) -> Self {
        Self::new(record.kind(), DataOperation::Create(record))
    }

    pub fn read(entity: EntityKind, key: RecordKey) -> Self {
        Self::new(entity, DataOperation::Read(key))
    }

    pub fn list(entity: EntityKind, pagination: Pagination) -> Self {
        Self::new(entity, DataOperation::List(pagination))
    }

    pub fn update(entity: EntityKind, key: RecordKey, changes: RecordChanges) -> Self {
        Self::new(entity, DataOperation::Update(key, changes))
    }

    pub fn delete(entity: EntityKind, key: RecordKey) -> Self {
        Self::new(entity, DataOperation::Delete(key))
    }
}

/// Outcome of a data-management request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DataResponse {
    Record(EntityRecord),
    Records(Vec<EntityRecord>),
    Deleted { message: String },
}

impl DataResponse {
    pub fn deleted() -> Self {
        DataResponse::Deleted {
            message: "Record deleted successfully".to_string(),
        }
    }
}

/// Data-management use case
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DataManager: Send + Sync {
    async fn process(&self, request: DataRequest) -> Result<DataResponse>;
}
