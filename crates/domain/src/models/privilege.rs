//! Privilege domain models.
//!
//! A privilege is a named capability. Its `assignable` field controls whether
//! it may be granted to a flag: non-assignable privileges are silently dropped
//! from requested grants by the resolver.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Privilege domain model. The identifier is the natural primary key and the
/// join key of the flag association.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Privilege {
    pub identifier: String,
    pub assignable: bool,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

/// Request to create a privilege. `assignable` defaults to true, matching the
/// column default.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePrivilegeRequest {
    #[validate(length(min = 1, max = 50, message = "Identifier must be 1-50 characters"))]
    pub identifier: String,
    pub assignable: Option<bool>,
}

/// Privilege wire representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrivilegeResponse {
    pub identifier: String,
    pub assignable: bool,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl From<Privilege> for PrivilegeResponse {
    fn from(privilege: Privilege) -> Self {
        Self {
            identifier: privilege.identifier,
            assignable: privilege.assignable,
            created_at: privilege.created_at,
            last_updated: privilege.last_updated,
        }
    }
}

/// Updatable privilege fields, taken from query-string parameters.
/// The identifier is the primary key and cannot be changed.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct UpdatePrivilegeParams {
    pub assignable: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn privilege(identifier: &str, assignable: bool) -> Privilege {
        Privilege {
            identifier: identifier.to_string(),
            assignable,
            created_at: Utc::now(),
            last_updated: Utc::now(),
        }
    }

    #[test]
    fn test_privilege_response_from() {
        let p = privilege("can_moderate", true);
        let response: PrivilegeResponse = p.clone().into();
        assert_eq!(response.identifier, "can_moderate");
        assert!(response.assignable);
    }

    #[test]
    fn test_create_request_validation() {
        let request = CreatePrivilegeRequest {
            identifier: "can_ban".to_string(),
            assignable: Some(false),
        };
        assert!(request.validate().is_ok());

        let request = CreatePrivilegeRequest {
            identifier: String::new(),
            assignable: None,
        };
        assert!(request.validate().is_err());
    }
}
