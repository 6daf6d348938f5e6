//! Activity-log entries sent to the API after session events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::Display;
use uuid::Uuid;

use crate::identity::{Identity, Role};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ActivityAction {
    Login,
    Logout,
    CompanySelected,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub id: String,
    pub user_email: String,
    pub role: Role,
    pub action: ActivityAction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    pub at: DateTime<Utc>,
}

impl ActivityEntry {
    pub fn new(identity: &Identity, action: ActivityAction) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_email: identity.email().to_string(),
            role: identity.role(),
            action,
            detail: None,
            at: Utc::now(),
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}
