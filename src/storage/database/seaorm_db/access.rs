use crate::core::data::DbAccess;
use crate::core::models::{
    EntityKind, EntityRecord, NewRecord, Pagination, RecordChanges, RecordKey, User,
};
use crate::utils::error::{GatewayError, Result};
use async_trait::async_trait;

use super::types::SeaOrmDatabase;

#[async_trait]
impl DbAccess for SeaOrmDatabase {
    async fn create_record(&self, record: NewRecord) -> Result<EntityRecord> {
        match record {
            NewRecord::User(user) => Ok(EntityRecord::User(self.create_user(&user).await?)),
            NewRecord::Team(team) => Ok(EntityRecord::Team(self.create_team(&team).await?)),
        }
    }

    async fn read_record(&self, kind: EntityKind, key: &RecordKey) -> Result<EntityRecord> {
        match kind {
            EntityKind::Users => Ok(EntityRecord::User(self.find_user(key).await?)),
            EntityKind::Teams => Ok(EntityRecord::Team(self.find_team(key).await?)),
        }
    }

    async fn list_records(
        &self,
        kind: EntityKind,
        pagination: &Pagination,
    ) -> Result<Vec<EntityRecord>> {
        let records = match kind {
            EntityKind::Users => self
                .list_users(pagination)
                .await?
                .into_iter()
                .map(EntityRecord::User)
                .collect(),
            EntityKind::Teams => self
                .list_teams(pagination)
                .await?
                .into_iter()
                .map(EntityRecord::Team)
                .collect(),
        };
        Ok(records)
    }

    async fn update_record(
        &self,
        kind: EntityKind,
        key: &RecordKey,
        changes: RecordChanges,
    ) -> Result<EntityRecord> {
        match (kind, changes) {
            (EntityKind::Users, RecordChanges::User(changes)) => {
                Ok(EntityRecord::User(self.update_user(key, &changes).await?))
            }
            (EntityKind::Teams, RecordChanges::Team(changes)) => {
                Ok(EntityRecord::Team(self.update_team(key, &changes).await?))
            }
            (kind, _) => Err(GatewayError::validation(format!(
                "Attributes do not match table '{}'",
                kind
            ))),
        }
    }

    async fn delete_record(&self, kind: EntityKind, key: &RecordKey) -> Result<()> {
        match kind {
            EntityKind::Users => self.delete_user(key).await,
            EntityKind::Teams => self.delete_team(key).await,
        }
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        SeaOrmDatabase::find_user_by_email(self, email).await
    }
}
