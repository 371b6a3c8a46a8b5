//! Reply domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A comment on a report, authored by a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reply {
    pub id: i32,
    pub user_id: Uuid,
    pub report_id: i32,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

/// Request to create a reply. Both `user` and `report` must resolve or the
/// request fails with not-found and no row is written.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReplyRequest {
    pub user: Uuid,
    pub report: i32,
    #[validate(length(min = 1, max = 2000, message = "Content must be 1-2000 characters"))]
    pub content: String,
}

/// Reply wire representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplyResponse {
    pub id: i32,
    pub user_id: Uuid,
    pub report_id: i32,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl From<Reply> for ReplyResponse {
    fn from(reply: Reply) -> Self {
        Self {
            id: reply.id,
            user_id: reply.user_id,
            report_id: reply.report_id,
            content: reply.content,
            created_at: reply.created_at,
            last_updated: reply.last_updated,
        }
    }
}

/// Updatable reply fields. The author and the report cannot be changed.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct UpdateReplyParams {
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_validation() {
        let request = CreateReplyRequest {
            user: Uuid::new_v4(),
            report: 1,
            content: "A prefeitura já foi notificada.".to_string(),
        };
        assert!(request.validate().is_ok());

        let request = CreateReplyRequest {
            user: Uuid::new_v4(),
            report: 1,
            content: String::new(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_reply_response_from() {
        let reply = Reply {
            id: 3,
            user_id: Uuid::new_v4(),
            report_id: 42,
            content: "Obrigado pelo aviso".to_string(),
            created_at: Utc::now(),
            last_updated: Utc::now(),
        };
        let response: ReplyResponse = reply.clone().into();
        assert_eq!(response.id, 3);
        assert_eq!(response.user_id, reply.user_id);
        assert_eq!(response.report_id, 42);
    }
}
