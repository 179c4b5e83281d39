//! # Filecat Core
//!
//! Domain entities, the listing query engine, repository traits, and the
//! category service for the file-category registry.

pub mod domain;
pub mod error;
pub mod query;
pub mod repositories;
pub mod services;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
