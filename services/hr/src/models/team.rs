//! Team model and related functionality

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::user::{User, UserSummary};

/// Team entity
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub manager_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request to create a new team
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamRequest {
    #[validate(
        required(message = "Team name is required"),
        custom(function = "crate::validation::validate_team_name")
    )]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 1, message = "Manager id must be a positive number"))]
    pub manager_id: Option<i64>,
}

/// Request to update an existing team
///
/// Every field is individually omissible; rules only run over what the
/// client sends.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeamRequest {
    #[validate(custom(function = "crate::validation::validate_team_name"))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 1, message = "Manager id must be a positive number"))]
    pub manager_id: Option<i64>,
}

/// Team response payload
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamResponse {
    id: i64,
    name: String,
    description: Option<String>,
    manager: Option<UserSummary>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TeamResponse {
    /// Project a persisted team and its optional manager into the response shape.
    pub fn new(team: &Team, manager: Option<&User>) -> Self {
        Self {
            id: team.id,
            name: team.name.clone(),
            description: team.description.clone(),
            manager: manager.map(UserSummary::from),
            created_at: team.created_at,
            updated_at: team.updated_at,
        }
    }

    /// Team identifier
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Team name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Free-form description, if any
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Managing user, if one is assigned
    pub fn manager(&self) -> Option<&UserSummary> {
        self.manager.as_ref()
    }

    /// Persistence timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Last modification timestamp
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::validation;

    fn sample_team() -> Team {
        Team {
            id: 3,
            name: "Platform".to_string(),
            description: Some("Keeps the lights on".to_string()),
            manager_id: Some(42),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn sample_manager() -> User {
        User {
            id: 42,
            username: "jdoe".to_string(),
            email: "jdoe@example.com".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn update_with_all_fields_unset_validates_clean() {
        let request = UpdateTeamRequest::default();
        assert!(validation::check(&request).is_ok());
    }

    #[test]
    fn create_without_name_is_rejected() {
        let request = CreateTeamRequest::default();

        let report = validation::check(&request).expect_err("name must be required");

        assert_eq!(report.len(), 1);
        assert_eq!(report.violations()[0].field, "name");
        assert_eq!(report.violations()[0].message, "Team name is required");
    }

    #[test]
    fn create_with_blank_name_is_rejected() {
        let request = CreateTeamRequest {
            name: Some("   ".to_string()),
            ..Default::default()
        };

        let report = validation::check(&request).expect_err("blank name must be rejected");

        assert_eq!(report.len(), 1);
        assert_eq!(report.violations()[0].message, "Team name is required");
    }

    #[test]
    fn name_length_violations_cite_the_breached_bound() {
        let short = CreateTeamRequest {
            name: Some("A".to_string()),
            ..Default::default()
        };
        let report = validation::check(&short).expect_err("one character is too short");
        assert_eq!(
            report.violations()[0].message,
            "Team name must be at least 2 characters long"
        );

        let long = CreateTeamRequest {
            name: Some("x".repeat(101)),
            ..Default::default()
        };
        let report = validation::check(&long).expect_err("101 characters is too long");
        assert_eq!(
            report.violations()[0].message,
            "Team name must be at most 100 characters long"
        );
    }

    #[test]
    fn non_positive_manager_id_is_rejected_in_wire_casing() {
        let request = UpdateTeamRequest {
            manager_id: Some(0),
            ..Default::default()
        };

        let report = validation::check(&request).expect_err("zero is not a valid id");

        assert_eq!(report.len(), 1);
        assert_eq!(report.violations()[0].field, "managerId");
        assert_eq!(
            report.violations()[0].message,
            "Manager id must be a positive number"
        );
    }

    #[test]
    fn update_rules_only_run_over_present_fields() {
        let request = UpdateTeamRequest {
            description: Some("New description".to_string()),
            ..Default::default()
        };

        assert!(validation::check(&request).is_ok());
    }

    #[test]
    fn request_deserializes_from_wire_casing() {
        let request: CreateTeamRequest =
            serde_json::from_str(r#"{"name": "Platform", "managerId": 42}"#).unwrap();

        assert_eq!(request.name.as_deref(), Some("Platform"));
        assert_eq!(request.manager_id, Some(42));
        assert!(request.description.is_none());
    }

    #[test]
    fn response_nests_the_manager_summary() {
        let team = sample_team();
        let manager = sample_manager();

        let response = TeamResponse::new(&team, Some(&manager));

        assert_eq!(response.id(), 3);
        assert_eq!(response.name(), "Platform");
        assert_eq!(response.description(), Some("Keeps the lights on"));
        assert_eq!(response.manager().map(|m| m.id()), Some(42));
    }

    #[test]
    fn response_without_manager_serializes_null() {
        let team = Team {
            manager_id: None,
            description: None,
            ..sample_team()
        };

        let value = serde_json::to_value(TeamResponse::new(&team, None)).unwrap();

        assert!(value["manager"].is_null());
        assert!(value["description"].is_null());
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
    }
}
