//! # Filecat Infrastructure
//!
//! PostgreSQL adapters for the category store, the user reference index,
//! and the activity-log writer.

pub mod database;
