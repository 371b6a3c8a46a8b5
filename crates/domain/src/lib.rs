//! Domain layer for the Aedem backend.
//!
//! This crate contains:
//! - Domain models and request/response DTOs
//! - The privilege resolution service

pub mod models;
pub mod services;
