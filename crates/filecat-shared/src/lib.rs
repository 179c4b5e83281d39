//! # Filecat Shared
//!
//! Configuration, constants, common types, and telemetry bootstrap
//! shared across the file-category registry crates.

pub mod config;
pub mod constants;
pub mod telemetry;
pub mod types;
