//! Domain services.

pub mod privileges;
