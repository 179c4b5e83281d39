//! Caller identity and role guard
//!
//! The server runs behind a gateway that has already verified the
//! caller's token; identity arrives through trusted headers. No token
//! handling happens here, and elevated-role checks run as an explicit
//! guard before the core operation is invoked.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::StatusCode;

use crate::response::ErrorResponse;
use filecat_core::domain::{Actor, Role};

pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_ROLE_HEADER: &str = "x-user-role";

/// Verified caller, extracted from gateway-injected headers.
#[derive(Debug, Clone)]
pub struct CallerIdentity(pub Actor);

impl<S> FromRequestParts<S> for CallerIdentity
where
    S: Send + Sync,
{
    type Rejection = ErrorResponse;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty());
        let role = parts
            .headers
            .get(USER_ROLE_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(Role::from_str);

        match (user_id, role) {
            (Some(id), Some(role)) => Ok(CallerIdentity(Actor {
                id: id.to_string(),
                role,
            })),
            _ => Err(ErrorResponse::new(
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Authentication required",
            )),
        }
    }
}

/// Admin or superadmin only.
pub fn require_admin(caller: &CallerIdentity) -> Result<(), ErrorResponse> {
    if caller.0.role.is_elevated() {
        Ok(())
    } else {
        Err(ErrorResponse::new(
            StatusCode::FORBIDDEN,
            "FORBIDDEN",
            "Admin access required",
        ))
    }
}
