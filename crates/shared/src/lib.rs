//! Shared utilities and common types for the Aedem backend.
//!
//! This crate provides functionality used across all other crates:
//! - Password hashing with Argon2id (explicit salt, stored alongside the hash)
//! - Common validation logic

pub mod password;
pub mod validation;
