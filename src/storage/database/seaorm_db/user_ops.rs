use crate::core::models::{NewUser, Pagination, RecordKey, SortOrder, User, UserChanges};
use crate::utils::error::{GatewayError, Result};
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, user};
use super::connection::map_write_error;
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    async fn find_user_model(&self, key: &RecordKey) -> Result<user::Model> {
        let query = match key {
            RecordKey::Id(id) => entities::User::find_by_id(*id),
            RecordKey::Name(name) => entities::User::find().filter(user::Column::Name.eq(name.as_str())),
        };

        query
            .one(&self.db)
            .await
            .map_err(GatewayError::Database)?
            .ok_or_else(|| {
                GatewayError::not_found(format!("Record with {} not found in table 'users'.", key))
            })
    }

    /// Find user by id or name
    pub async fn find_user(&self, key: &RecordKey) -> Result<User> {
        debug!("Finding user by {}", key);
        Ok(self.find_user_model(key).await?.to_domain_user())
    }

    /// Find user by email
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        debug!("Finding user by email: {}", email);

        let user_model = entities::User::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(GatewayError::Database)?;

        Ok(user_model.map(|model| model.to_domain_user()))
    }

    /// Page of users ordered by name
    pub async fn list_users(&self, pagination: &Pagination) -> Result<Vec<User>> {
        debug!("Listing users: {:?}", pagination);

        let query = match pagination.order {
            SortOrder::Asc => entities::User::find().order_by_asc(user::Column::Name),
            SortOrder::Desc => entities::User::find().order_by_desc(user::Column::Name),
        };

        let models = query
            .offset(pagination.offset)
            .limit(pagination.limit)
            .all(&self.db)
            .await
            .map_err(GatewayError::Database)?;

        Ok(models.iter().map(user::Model::to_domain_user).collect())
    }

    /// Create a new user
    pub async fn create_user(&self, user: &NewUser) -> Result<User> {
        debug!("Creating user: {}", user.name);

        let model = user::Model::from_new_user(user)
            .insert(&self.db)
            .await
            .map_err(map_write_error)?;

        Ok(model.to_domain_user())
    }

    /// Apply a partial update
    pub async fn update_user(&self, key: &RecordKey, changes: &UserChanges) -> Result<User> {
        debug!("Updating user by {}", key);

        let mut active_model: user::ActiveModel = self.find_user_model(key).await?.into();

        if let Some(name) = &changes.name {
            active_model.name = Set(name.clone());
        }
        if let Some(email) = &changes.email {
            active_model.email = Set(email.clone());
        }
        if let Some(location) = &changes.location {
            active_model.location = Set(Some(location.clone()));
        }
        if let Some(team_id) = changes.team_id {
            active_model.team_id = Set(Some(team_id));
        }
        active_model.updated_at = Set(Some(chrono::Utc::now().into()));

        let model = active_model
            .update(&self.db)
            .await
            .map_err(map_write_error)?;

        Ok(model.to_domain_user())
    }

    /// Delete a user
    pub async fn delete_user(&self, key: &RecordKey) -> Result<()> {
        debug!("Deleting user by {}", key);

        let model = self.find_user_model(key).await?;
        model
            .delete(&self.db)
            .await
            .map_err(GatewayError::Database)?;

        Ok(())
    }
}
