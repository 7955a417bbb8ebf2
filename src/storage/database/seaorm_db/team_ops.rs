use crate::core::models::{NewTeam, Pagination, RecordKey, SortOrder, Team, TeamChanges};
use crate::utils::error::{GatewayError, Result};
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, team};
use super::connection::map_write_error;
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    async fn find_team_model(&self, key: &RecordKey) -> Result<team::Model> {
        let query = match key {
            RecordKey::Id(id) => entities::Team::find_by_id(*id),
            RecordKey::Name(name) => entities::Team::find().filter(team::Column::Name.eq(name.as_str())),
        };

        query
            .one(&self.db)
            .await
            .map_err(GatewayError::Database)?
            .ok_or_else(|| {
                GatewayError::not_found(format!("Record with {} not found in table 'teams'.", key))
            })
    }

    /// Find team by id or name
    pub async fn find_team(&self, key: &RecordKey) -> Result<Team> {
        debug!("Finding team by {}", key);
        Ok(self.find_team_model(key).await?.to_domain_team())
    }

    /// Page of teams ordered by name
    pub async fn list_teams(&self, pagination: &Pagination) -> Result<Vec<Team>> {
        let query = match pagination.order {
            SortOrder::Asc => entities::Team::find().order_by_asc(team::Column::Name),
            SortOrder::Desc => entities::Team::find().order_by_desc(team::Column::Name),
        };

        let models = query
            .offset(pagination.offset)
            .limit(pagination.limit)
            .all(&self.db)
            .await
            .map_err(GatewayError::Database)?;

        Ok(models.iter().map(team::Model::to_domain_team).collect())
    }

    /// Create a new team
    pub async fn create_team(&self, team: &NewTeam) -> Result<Team> {
        debug!("Creating team: {}", team.name);

        let model = team::Model::from_new_team(team)
            .insert(&self.db)
            .await
            .map_err(map_write_error)?;

        Ok(model.to_domain_team())
    }

    /// Apply a partial update
    pub async fn update_team(&self, key: &RecordKey, changes: &TeamChanges) -> Result<Team> {
        debug!("Updating team by {}", key);

        let mut active_model: team::ActiveModel = self.find_team_model(key).await?.into();

        if let Some(name) = &changes.name {
            active_model.name = Set(name.clone());
        }
        if let Some(description) = &changes.description {
            active_model.description = Set(Some(description.clone()));
        }
        if let Some(manager_id) = changes.manager_id {
            active_model.manager_id = Set(Some(manager_id));
        }
        active_model.updated_at = Set(Some(chrono::Utc::now().into()));

        let model = active_model
            .update(&self.db)
            .await
            .map_err(map_write_error)?;

        Ok(model.to_domain_team())
    }

    /// Delete a team; its members keep existing without a team
    pub async fn delete_team(&self, key: &RecordKey) -> Result<()> {
        debug!("Deleting team by {}", key);

        let model = self.find_team_model(key).await?;
        model
            .delete(&self.db)
            .await
            .map_err(GatewayError::Database)?;

        Ok(())
    }
}
