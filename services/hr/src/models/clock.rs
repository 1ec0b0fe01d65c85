//! Clock entry model and related functionality

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationErrors};

use super::user::{User, UserSummary};

/// Clock entry entity
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ClockEntry {
    pub id: i64,
    pub time: DateTime<Utc>,
    pub status: bool,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Clock-in/out request payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClockEntryInput {
    pub time: Option<DateTime<Utc>>,
    pub status: Option<bool>,
}

// Nothing to enforce beyond optionality; the service fills in the current
// instant and toggles the status for whatever the client leaves out.
impl Validate for ClockEntryInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Ok(())
    }
}

/// Clock entry response payload
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClockEntryResponse {
    id: i64,
    time: DateTime<Utc>,
    status: bool,
    owner: UserSummary,
    created_at: DateTime<Utc>,
}

impl ClockEntryResponse {
    /// Project a persisted entry and its owner into the response shape.
    pub fn new(entry: &ClockEntry, owner: &User) -> Self {
        Self {
            id: entry.id,
            time: entry.time,
            status: entry.status,
            owner: UserSummary::from(owner),
            created_at: entry.created_at,
        }
    }

    /// Entry identifier
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Instant the entry was recorded for
    pub fn time(&self) -> DateTime<Utc> {
        self.time
    }

    /// Clocked in (`true`) or clocked out (`false`)
    pub fn status(&self) -> bool {
        self.status
    }

    /// User the entry belongs to
    pub fn owner(&self) -> &UserSummary {
        &self.owner
    }

    /// Persistence timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: 42,
            username: "jdoe".to_string(),
            email: "jdoe@example.com".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn empty_input_validates_clean() {
        let input = ClockEntryInput::default();
        assert!(input.validate().is_ok());
    }

    #[test]
    fn input_accepts_an_empty_body() {
        let input: ClockEntryInput = serde_json::from_str("{}").unwrap();
        assert!(input.time.is_none());
        assert!(input.status.is_none());
    }

    #[test]
    fn input_accepts_explicit_fields() {
        let input: ClockEntryInput =
            serde_json::from_str(r#"{"time": "2026-02-10T09:00:00Z", "status": true}"#).unwrap();
        assert!(input.time.is_some());
        assert_eq!(input.status, Some(true));
    }

    #[test]
    fn response_projects_entry_and_owner() {
        let owner = sample_user();
        let entry = ClockEntry {
            id: 7,
            time: Utc::now(),
            status: true,
            user_id: owner.id,
            created_at: Utc::now(),
        };

        let response = ClockEntryResponse::new(&entry, &owner);

        assert_eq!(response.id(), 7);
        assert_eq!(response.time(), entry.time);
        assert!(response.status());
        assert_eq!(response.owner().id(), 42);
        assert_eq!(response.owner().username(), "jdoe");
        assert_eq!(response.created_at(), entry.created_at);
    }

    #[test]
    fn response_serializes_in_wire_casing() {
        let owner = sample_user();
        let entry = ClockEntry {
            id: 7,
            time: Utc::now(),
            status: false,
            user_id: owner.id,
            created_at: Utc::now(),
        };

        let value = serde_json::to_value(ClockEntryResponse::new(&entry, &owner)).unwrap();

        assert!(value.get("createdAt").is_some());
        assert_eq!(value["owner"]["username"], "jdoe");
        assert_eq!(value["status"], false);
    }
}
