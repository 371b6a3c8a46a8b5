//! Notification domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A typed message addressed to a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: i32,
    pub user_id: Uuid,
    pub notiftype: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

/// Request to create a notification. `user_id` must reference an existing
/// user or the request fails with not-found.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateNotificationRequest {
    pub user_id: Uuid,
    #[validate(length(min = 1, max = 50, message = "Notification type must be 1-50 characters"))]
    pub notiftype: String,
    #[validate(length(min = 1, max = 2000, message = "Content must be 1-2000 characters"))]
    pub content: String,
}

/// Notification wire representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationResponse {
    pub id: i32,
    pub user_id: Uuid,
    pub notiftype: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl From<Notification> for NotificationResponse {
    fn from(notification: Notification) -> Self {
        Self {
            id: notification.id,
            user_id: notification.user_id,
            notiftype: notification.notiftype,
            content: notification.content,
            created_at: notification.created_at,
            last_updated: notification.last_updated,
        }
    }
}

/// Updatable notification fields, taken from query-string parameters.
/// Re-pointing `user_id` is allowed but the target user must exist.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct UpdateNotificationParams {
    pub notiftype: Option<String>,
    pub content: Option<String>,
    pub user_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_validation() {
        let request = CreateNotificationRequest {
            user_id: Uuid::new_v4(),
            notiftype: "report_reply".to_string(),
            content: "Sua denúncia recebeu uma resposta.".to_string(),
        };
        assert!(request.validate().is_ok());

        let request = CreateNotificationRequest {
            user_id: Uuid::new_v4(),
            notiftype: String::new(),
            content: String::new(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_notification_response_from() {
        let notification = Notification {
            id: 9,
            user_id: Uuid::new_v4(),
            notiftype: "system".to_string(),
            content: "Bem-vindo ao Aedem".to_string(),
            created_at: Utc::now(),
            last_updated: Utc::now(),
        };
        let response: NotificationResponse = notification.clone().into();
        assert_eq!(response.id, 9);
        assert_eq!(response.notiftype, "system");
        assert_eq!(response.user_id, notification.user_id);
    }
}
