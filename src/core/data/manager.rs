//! Data-management use case over the entity store

use super::repository::DbAccess;
use super::types::{DataManager, DataOperation, DataRequest, DataResponse};
use crate::core::models::{EntityKind, NewRecord, RecordKey};
use crate::utils::error::{GatewayError, Result};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Business rules on top of [`DbAccess`]
///
/// Creation attributes that reference other records by a human-readable
/// handle are resolved to ids here: a user's `team_name` becomes `team_id`,
/// a team's `manager_email` becomes `manager_id`.
#[derive(Clone)]
pub struct DataManagerImpl {
    db: Arc<dyn DbAccess>,
}

impl DataManagerImpl {
    pub fn new(db: Arc<dyn DbAccess>) -> Self {
        Self { db }
    }

    async fn resolve_references(&self, record: NewRecord) -> Result<NewRecord> {
        record.validate()?;

        match record {
            NewRecord::User(mut user) => {
                if let Some(team_name) = user.team_name.take() {
                    let team = self
                        .db
                        .read_record(EntityKind::Teams, &RecordKey::Name(team_name.clone()))
                        .await
                        .map_err(|e| {
                            if e.is_not_found() {
                                GatewayError::validation(format!(
                                    "Team with name '{}' does not exist.",
                                    team_name
                                ))
                            } else {
                                e
                            }
                        })?;
                    debug!("Resolved team '{}' to {}", team_name, team.id());
                    user.team_id = Some(team.id());
                }
                Ok(NewRecord::User(user))
            }
            NewRecord::Team(mut team) => {
                if let Some(email) = team.manager_email.take() {
                    let manager = self.db.find_user_by_email(&email).await?.ok_or_else(|| {
                        GatewayError::validation(format!(
                            "User with email '{}' does not exist.",
                            email
                        ))
                    })?;
                    debug!("Resolved manager '{}' to {}", email, manager.id);
                    team.manager_id = Some(manager.id);
                }
                Ok(NewRecord::Team(team))
            }
        }
    }
}

fn ensure_kind(expected: EntityKind, actual: EntityKind) -> Result<()> {
    if expected != actual {
        return Err(GatewayError::validation(format!(
            "Attributes for '{}' sent to '{}'",
            actual, expected
        )));
    }
    Ok(())
}

#[async_trait]
impl DataManager for DataManagerImpl {
    async fn process(&self, request: DataRequest) -> Result<DataResponse> {
        let entity = request.entity;
        debug!(
            entity = %entity,
            operation = %request.operation.kind(),
            "Processing data request"
        );

        match request.operation {
            DataOperation::Create(record) => {
                ensure_kind(entity, record.kind())?;
                let record = self.resolve_references(record).await?;
                let created = self.db.create_record(record).await?;
                info!("Created {} record {}", entity, created.id());
                Ok(DataResponse::Record(created))
            }
            DataOperation::Read(key) => {
                let record = self.db.read_record(entity, &key).await?;
                Ok(DataResponse::Record(record))
            }
            DataOperation::List(pagination) => {
                let records = self.db.list_records(entity, &pagination).await?;
                Ok(DataResponse::Records(records))
            }
            DataOperation::Update(key, changes) => {
                ensure_kind(entity, changes.kind())?;
                changes.validate()?;
                let updated = self.db.update_record(entity, &key, changes).await?;
                info!("Updated {} record {}", entity, updated.id());
                Ok(DataResponse::Record(updated))
            }
            DataOperation::Delete(key) => {
                self.db.delete_record(entity, &key).await?;
                info!("Deleted {} record with {}", entity, key);
                Ok(DataResponse::deleted())
            }
        }
    }
}
