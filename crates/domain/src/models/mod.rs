//! Domain models for Aedem.

pub mod attachment;
pub mod flag;
pub mod news;
pub mod notification;
pub mod privilege;
pub mod reply;
pub mod report;
pub mod user;

pub use attachment::{Attachment, AttachmentResponse, CreateAttachmentRequest, UpdateAttachmentParams};
pub use flag::{CreateFlagRequest, Flag, FlagResponse, UpdateFlagParams};
pub use news::{CreateNewsRequest, News, NewsResponse, UpdateNewsParams};
pub use notification::{
    CreateNotificationRequest, Notification, NotificationResponse, UpdateNotificationParams,
};
pub use privilege::{CreatePrivilegeRequest, Privilege, PrivilegeResponse, UpdatePrivilegeParams};
pub use reply::{CreateReplyRequest, Reply, ReplyResponse, UpdateReplyParams};
pub use report::{CreateReportRequest, Report, ReportResponse, UpdateReportParams};
pub use user::{CreateUserRequest, UpdateUserParams, User, UserResponse};
