//! # Filecat Core - Domain Module
//!
//! Domain entities for the file-category registry.

pub mod actor;
pub mod file_category;

// Re-export all entities and enums
pub use actor::{Actor, Role};
pub use file_category::{
    CategoryPatch, CategoryStatus, CategoryWithCount, FileCategory, NewCategory,
};
