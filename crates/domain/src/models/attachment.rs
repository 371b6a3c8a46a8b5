//! Attachment domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A link attached to exactly one report. Deleted together with its report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    pub id: i32,
    pub report_id: i32,
    pub attachment_addr: String,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

/// Request to create an attachment. `report` must reference an existing
/// report or the request fails with not-found.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAttachmentRequest {
    pub report: i32,
    #[validate(custom(function = "shared::validation::validate_attachment_addr"))]
    pub attachment_addr: String,
}

/// Attachment wire representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttachmentResponse {
    pub id: i32,
    pub report_id: i32,
    pub attachment_addr: String,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl From<Attachment> for AttachmentResponse {
    fn from(attachment: Attachment) -> Self {
        Self {
            id: attachment.id,
            report_id: attachment.report_id,
            attachment_addr: attachment.attachment_addr,
            created_at: attachment.created_at,
            last_updated: attachment.last_updated,
        }
    }
}

/// Updatable attachment fields. The owning report is fixed at creation.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct UpdateAttachmentParams {
    pub attachment_addr: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_validation() {
        let request = CreateAttachmentRequest {
            report: 1,
            attachment_addr: "https://cdn.example.com/photo.jpg".to_string(),
        };
        assert!(request.validate().is_ok());

        let request = CreateAttachmentRequest {
            report: 1,
            attachment_addr: "photo.jpg".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_attachment_response_from() {
        let attachment = Attachment {
            id: 7,
            report_id: 42,
            attachment_addr: "https://cdn.example.com/photo.jpg".to_string(),
            created_at: Utc::now(),
            last_updated: Utc::now(),
        };
        let response: AttachmentResponse = attachment.into();
        assert_eq!(response.id, 7);
        assert_eq!(response.report_id, 42);
    }
}
