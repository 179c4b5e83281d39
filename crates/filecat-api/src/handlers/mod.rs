//! HTTP handlers

pub mod file_categories;
pub mod health;
