//! HTTP route handlers.

pub mod attachments;
pub mod flags;
pub mod health;
pub mod news;
pub mod notifications;
pub mod privileges;
pub mod replies;
pub mod reports;
pub mod users;
