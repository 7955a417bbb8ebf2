use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::models::{NewTeam, Team};

/// Team database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "teams")]
pub struct Model {
    /// Team ID (UUID)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Team name (unique)
    #[sea_orm(unique)]
    pub name: String,

    pub description: Option<String>,

    /// Managing user
    pub manager_id: Option<Uuid>,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,

    /// Last update timestamp
    pub updated_at: Option<DateTimeWithTimeZone>,
}

/// Team entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Team members
    #[sea_orm(has_many = "super::user::Entity")]
    Users,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert SeaORM model to domain team model
    pub fn to_domain_team(&self) -> Team {
        Team {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            manager_id: self.manager_id,
            created_at: self.created_at.naive_utc().and_utc(),
            updated_at: self.updated_at.map(|dt| dt.naive_utc().and_utc()),
        }
    }

    /// Build the active model for a new team
    pub fn from_new_team(team: &NewTeam) -> ActiveModel {
        ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(team.name.clone()),
            description: Set(team.description.clone()),
            manager_id: Set(team.manager_id),
            created_at: Set(chrono::Utc::now().into()),
            updated_at: Set(None),
        }
    }
}
