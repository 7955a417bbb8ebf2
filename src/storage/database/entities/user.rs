use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::models::{NewUser, User};

/// User database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// User ID (UUID)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Display name (not unique)
    pub name: String,

    /// Email address (unique)
    #[sea_orm(unique)]
    pub email: String,

    pub location: Option<String>,

    /// Team the user belongs to
    pub team_id: Option<Uuid>,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,

    /// Last update timestamp
    pub updated_at: Option<DateTimeWithTimeZone>,
}

/// User entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Team membership
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::TeamId",
        to = "super::team::Column::Id",
        on_delete = "SetNull"
    )]
    Team,
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// Conversion methods between SeaORM model and our domain model
impl Model {
    /// Convert SeaORM model to domain user model
    pub fn to_domain_user(&self) -> User {
        User {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            location: self.location.clone(),
            team_id: self.team_id,
            created_at: self.created_at.naive_utc().and_utc(),
            updated_at: self.updated_at.map(|dt| dt.naive_utc().and_utc()),
        }
    }

    /// Build the active model for a new user
    pub fn from_new_user(user: &NewUser) -> ActiveModel {
        ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(user.name.clone()),
            email: Set(user.email.clone()),
            location: Set(user.location.clone()),
            team_id: Set(user.team_id),
            created_at: Set(chrono::Utc::now().into()),
            updated_at: Set(None),
        }
    }
}
