//! Activity log port (fire-and-forget)

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use filecat_shared::constants::ENTITY_TYPE_FILE_CATEGORY;

#[derive(Debug, Clone, Serialize)]
pub struct ActivityEntry {
    pub actor: String,
    pub action: String,
    pub entity_type: String,
    pub entity_id: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
}

impl ActivityEntry {
    pub fn file_category(actor: &str, action: &str, entity_id: Uuid, description: String) -> Self {
        Self {
            actor: actor.to_string(),
            action: action.to_string(),
            entity_type: ENTITY_TYPE_FILE_CATEGORY.to_string(),
            entity_id: entity_id.to_string(),
            description,
            timestamp: Utc::now(),
        }
    }
}

/// Recording must never block or fail the triggering request; adapters
/// hand the entry off to a background writer.
pub trait ActivityLog: Send + Sync {
    fn record(&self, entry: ActivityEntry);
}
