//! User models for the Gateway

use crate::utils::error::{GatewayError, Result};
use crate::utils::is_valid_email;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    /// Email address (unique)
    pub email: String,
    pub location: Option<String>,
    pub team_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Attributes of a user to create
///
/// `team_name` (or its alias `team`) is resolved to `team_id` before the
/// record is stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub team_id: Option<Uuid>,
    #[serde(default, alias = "team")]
    pub team_name: Option<String>,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(GatewayError::validation("User name cannot be empty"));
        }
        if !is_valid_email(&self.email) {
            return Err(GatewayError::validation(format!(
                "Invalid email address: '{}'",
                self.email
            )));
        }
        if self.team_id.is_some() && self.team_name.is_some() {
            return Err(GatewayError::validation(
                "Only one of 'team_id' or 'team_name' should be provided.",
            ));
        }
        Ok(())
    }
}

/// Partial update of a user; `None` leaves a field unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserChanges {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub team_id: Option<Uuid>,
}

impl UserChanges {
    pub fn validate(&self) -> Result<()> {
        if self.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err(GatewayError::validation("User name cannot be empty"));
        }
        if let Some(email) = &self.email {
            if !is_valid_email(email) {
                return Err(GatewayError::validation(format!(
                    "Invalid email address: '{}'",
                    email
                )));
            }
        }
        Ok(())
    }
}
