//! Repository implementations for database operations.

pub mod attachment;
pub mod flag;
pub mod news;
pub mod notification;
pub mod privilege;
pub mod reply;
pub mod report;
pub mod user;

pub use attachment::AttachmentRepository;
pub use flag::FlagRepository;
pub use news::NewsRepository;
pub use notification::NotificationRepository;
pub use privilege::PrivilegeRepository;
pub use reply::ReplyRepository;
pub use report::{NewReport, ReportRepository};
pub use user::{NewUser, UserRepository};
