//! Database adapters

pub mod connection;
pub mod postgres;

pub use postgres::{PgActivityLog, PgCategoryRepository, PgUserReferenceIndex};
