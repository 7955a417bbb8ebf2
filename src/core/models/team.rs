//! Team models for the Gateway

use crate::utils::error::{GatewayError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Team record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: Uuid,
    /// Team name (unique)
    pub name: String,
    pub description: Option<String>,
    /// User managing the team
    pub manager_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Attributes of a team to create
///
/// `manager_email` is resolved to `manager_id` before the record is stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTeam {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub manager_id: Option<Uuid>,
    #[serde(default)]
    pub manager_email: Option<String>,
}

impl NewTeam {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(GatewayError::validation("Team name cannot be empty"));
        }
        if self.manager_id.is_some() && self.manager_email.is_some() {
            return Err(GatewayError::validation(
                "Only one of 'manager_id' or 'manager_email' should be provided.",
            ));
        }
        Ok(())
    }
}

/// Partial update of a team; `None` leaves a field unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamChanges {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub manager_id: Option<Uuid>,
}

impl TeamChanges {
    pub fn validate(&self) -> Result<()> {
        if self.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err(GatewayError::validation("Team name cannot be empty"));
        }
        Ok(())
    }
}
