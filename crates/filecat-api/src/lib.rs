//! # Filecat API
//!
//! HTTP handlers, DTOs, caller-identity extraction, and the uniform
//! error envelope.

pub mod auth;
pub mod dto;
pub mod handlers;
pub mod response;
pub mod state;
