//! Database entity definitions.
//!
//! Entities are direct mappings to database rows; each converts into its
//! domain model via `From`.

pub mod attachment;
pub mod flag;
pub mod news;
pub mod notification;
pub mod privilege;
pub mod reply;
pub mod report;
pub mod user;

pub use attachment::AttachmentEntity;
pub use flag::FlagEntity;
pub use news::NewsEntity;
pub use notification::NotificationEntity;
pub use privilege::PrivilegeEntity;
pub use reply::ReplyEntity;
pub use report::ReportEntity;
pub use user::UserEntity;
