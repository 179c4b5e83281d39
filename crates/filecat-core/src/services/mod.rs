//! Domain services (business logic)

pub mod category_service;

pub use category_service::{CategoryPage, CategoryService};
