//! Flag domain models.
//!
//! A flag is a named role-like entity. Its privilege set is always a subset of
//! privileges that were assignable at assignment time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Flag domain model. The identifier is the natural primary key and the join
/// key of the privilege association.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flag {
    pub identifier: String,
    pub title: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

/// Request to create a flag. Requested privilege identifiers that do not
/// exist or are not assignable are dropped without error; the response carries
/// the granted subset.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateFlagRequest {
    #[validate(length(min = 1, max = 50, message = "Identifier must be 1-50 characters"))]
    pub identifier: String,
    #[validate(length(min = 1, max = 100, message = "Title must be 1-100 characters"))]
    pub title: String,
    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: Option<String>,
    #[serde(default)]
    pub privileges: Vec<String>,
}

/// Flag wire representation: the flag row plus the identifiers of the
/// privileges currently granted to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlagResponse {
    pub flag: Flag,
    pub privileges: Vec<String>,
}

impl FlagResponse {
    pub fn new(flag: Flag, privileges: Vec<String>) -> Self {
        Self { flag, privileges }
    }
}

/// Updatable flag fields, taken from query-string parameters. `privileges` is
/// a comma-separated identifier list re-run through the resolver; the
/// identifier itself and the timestamps are not updatable.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct UpdateFlagParams {
    pub title: Option<String>,
    pub description: Option<String>,
    pub privileges: Option<String>,
}

impl UpdateFlagParams {
    /// Splits the comma-separated `privileges` parameter into identifiers,
    /// preserving order and duplicates.
    pub fn requested_privileges(&self) -> Option<Vec<String>> {
        self.privileges
            .as_ref()
            .map(|raw| raw.split(',').map(|s| s.trim().to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_validation() {
        let request = CreateFlagRequest {
            identifier: "mod".to_string(),
            title: "Moderator".to_string(),
            description: None,
            privileges: vec!["can_ban".to_string()],
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_request_validation_empty_identifier() {
        let request = CreateFlagRequest {
            identifier: String::new(),
            title: "Moderator".to_string(),
            description: None,
            privileges: vec![],
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_request_privileges_default_empty() {
        let request: CreateFlagRequest =
            serde_json::from_str(r#"{"identifier":"mod","title":"Moderator"}"#).unwrap();
        assert!(request.privileges.is_empty());
    }

    #[test]
    fn test_requested_privileges_split() {
        let params = UpdateFlagParams {
            title: None,
            description: None,
            privileges: Some("can_ban, can_edit,can_ban".to_string()),
        };
        assert_eq!(
            params.requested_privileges().unwrap(),
            vec!["can_ban", "can_edit", "can_ban"]
        );
    }

    #[test]
    fn test_requested_privileges_absent() {
        let params = UpdateFlagParams::default();
        assert!(params.requested_privileges().is_none());
    }

    #[test]
    fn test_flag_response_shape() {
        let flag = Flag {
            identifier: "mod".to_string(),
            title: "Moderator".to_string(),
            description: Some("Community moderator".to_string()),
            created_at: Utc::now(),
            last_updated: Utc::now(),
        };
        let response = FlagResponse::new(flag, vec!["can_ban".to_string()]);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["flag"]["identifier"], "mod");
        assert_eq!(json["privileges"][0], "can_ban");
    }
}
