//! Entity kinds, keys and type-erased records

use super::team::{NewTeam, Team, TeamChanges};
use super::user::{NewUser, User, UserChanges};
use crate::utils::error::{GatewayError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Managed entity tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Users,
    Teams,
}

impl EntityKind {
    pub const ALL: [EntityKind; 2] = [EntityKind::Users, EntityKind::Teams];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Users => "users",
            EntityKind::Teams => "teams",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "users" => Ok(EntityKind::Users),
            "teams" => Ok(EntityKind::Teams),
            other => Err(GatewayError::bad_request(format!(
                "Table '{}' does not exist.",
                other
            ))),
        }
    }
}

/// CRUD operation classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    Create,
    Read,
    Update,
    Delete,
}

impl OperationKind {
    pub const ALL: [OperationKind; 4] = [
        OperationKind::Create,
        OperationKind::Read,
        OperationKind::Update,
        OperationKind::Delete,
    ];
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OperationKind::Create => "create",
            OperationKind::Read => "read",
            OperationKind::Update => "update",
            OperationKind::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// Identifies a single record by id or by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordKey {
    Id(Uuid),
    Name(String),
}

impl RecordKey {
    /// Interpret a path segment: a UUID is an id, anything else a name
    pub fn parse(segment: &str) -> Self {
        match Uuid::parse_str(segment) {
            Ok(id) => RecordKey::Id(id),
            Err(_) => RecordKey::Name(segment.to_string()),
        }
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKey::Id(id) => write!(f, "id '{}'", id),
            RecordKey::Name(name) => write!(f, "name '{}'", name),
        }
    }
}

/// A stored record of any entity kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EntityRecord {
    User(User),
    Team(Team),
}

impl EntityRecord {
    pub fn kind(&self) -> EntityKind {
        match self {
            EntityRecord::User(_) => EntityKind::Users,
            EntityRecord::Team(_) => EntityKind::Teams,
        }
    }

    pub fn id(&self) -> Uuid {
        match self {
            EntityRecord::User(user) => user.id,
            EntityRecord::Team(team) => team.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            EntityRecord::User(user) => &user.name,
            EntityRecord::Team(team) => &team.name,
        }
    }
}

/// Attributes of a record to create
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewRecord {
    User(NewUser),
    Team(NewTeam),
}

impl NewRecord {
    /// Decode creation attributes for an entity kind
    pub fn from_json(kind: EntityKind, value: serde_json::Value) -> Result<Self> {
        let record = match kind {
            EntityKind::Users => NewRecord::User(decode_attributes(value)?),
            EntityKind::Teams => NewRecord::Team(decode_attributes(value)?),
        };
        record.validate()?;
        Ok(record)
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            NewRecord::User(_) => EntityKind::Users,
            NewRecord::Team(_) => EntityKind::Teams,
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            NewRecord::User(user) => user.validate(),
            NewRecord::Team(team) => team.validate(),
        }
    }
}

/// Partial update of a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordChanges {
    User(UserChanges),
    Team(TeamChanges),
}

impl RecordChanges {
    /// Decode update attributes for an entity kind
    pub fn from_json(kind: EntityKind, value: serde_json::Value) -> Result<Self> {
        let changes = match kind {
            EntityKind::Users => RecordChanges::User(decode_attributes(value)?),
            EntityKind::Teams => RecordChanges::Team(decode_attributes(value)?),
        };
        changes.validate()?;
        Ok(changes)
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            RecordChanges::User(_) => EntityKind::Users,
            RecordChanges::Team(_) => EntityKind::Teams,
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            RecordChanges::User(changes) => changes.validate(),
            RecordChanges::Team(changes) => changes.validate(),
        }
    }
}

fn decode_attributes<T: serde::de::DeserializeOwned>(value: serde_json::Value) -> Result<T> {
    serde_json::from_value(value)
        .map_err(|e| GatewayError::validation(format!("Invalid attributes: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_key_parse() {
        let id = Uuid::new_v4();
        assert_eq!(RecordKey::parse(&id.to_string()), RecordKey::Id(id));
        assert_eq!(
            RecordKey::parse("platform"),
            RecordKey::Name("platform".to_string())
        );
    }

    #[test]
    fn test_entity_kind_from_str() {
        assert_eq!("users".parse::<EntityKind>().unwrap(), EntityKind::Users);
        assert_eq!("teams".parse::<EntityKind>().unwrap(), EntityKind::Teams);
        assert!("projects".parse::<EntityKind>().is_err());
    }

    #[test]
    fn test_new_record_from_json() {
        let record = NewRecord::from_json(
            EntityKind::Teams,
            json!({"name": "platform", "manager_email": "lead@example.com"}),
        )
        .unwrap();
        assert_eq!(record.kind(), EntityKind::Teams);

        let missing_email = NewRecord::from_json(EntityKind::Users, json!({"name": "alice"}));
        assert!(matches!(missing_email, Err(GatewayError::Validation(_))));
    }

    #[test]
    fn test_record_changes_from_json() {
        let changes =
            RecordChanges::from_json(EntityKind::Users, json!({"location": "Berlin"})).unwrap();
        assert_eq!(
            changes,
            RecordChanges::User(UserChanges {
                location: Some("Berlin".to_string()),
                ..UserChanges::default()
            })
        );

        let bad = RecordChanges::from_json(EntityKind::Teams, json!({"name": ""}));
        assert!(bad.is_err());
    }
}
