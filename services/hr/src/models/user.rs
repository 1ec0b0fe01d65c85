//! User model and related functionality

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User entity
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Condensed user projection embedded in other responses
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    id: i64,
    username: String,
    email: String,
}

impl UserSummary {
    /// User identifier
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Login name
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Contact email address
    pub fn email(&self) -> &str {
        &self.email
    }
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
        }
    }
}
