//! Caller identity, resolved by the upstream identity layer before any
//! operation here is invoked. The core performs no token handling.

use serde::{Deserialize, Serialize};

/// Caller role enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
    Superadmin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
            Role::Superadmin => "superadmin",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "user" => Some(Role::User),
            "admin" => Some(Role::Admin),
            "superadmin" => Some(Role::Superadmin),
            _ => None,
        }
    }

    /// Admin and superadmin may mutate the catalog.
    pub fn is_elevated(&self) -> bool {
        matches!(self, Role::Admin | Role::Superadmin)
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::User
    }
}

/// Verified caller passed into mutating operations, used for activity
/// attribution.
#[derive(Debug, Clone)]
pub struct Actor {
    pub id: String,
    pub role: Role,
}
