// ============================================================================
// Filecat Infrastructure - PostgreSQL Activity Log Writer
// File: crates/filecat-infrastructure/src/database/postgres/activity_log_impl.rs
// ============================================================================
//! Fire-and-forget activity writer. Entries go onto a channel and a
//! background task persists them; a failed write is logged and dropped,
//! never surfaced to the triggering request.

use sqlx::PgPool;
use tokio::sync::mpsc;
use tracing::{info, warn};
use uuid::Uuid;

use filecat_core::repositories::{ActivityEntry, ActivityLog};

pub struct PgActivityLog {
    tx: mpsc::UnboundedSender<ActivityEntry>,
}

impl PgActivityLog {
    /// Spawn the background writer task and return the sending handle.
    pub fn spawn(pool: PgPool) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel::<ActivityEntry>();

        tokio::spawn(async move {
            while let Some(entry) = rx.recv().await {
                let result = sqlx::query(
                    "INSERT INTO activity_logs \
                     (id, actor, action, entity_type, entity_id, description, created_at) \
                     VALUES ($1, $2, $3, $4, $5, $6, $7)",
                )
                .bind(Uuid::new_v4())
                .bind(&entry.actor)
                .bind(&entry.action)
                .bind(&entry.entity_type)
                .bind(&entry.entity_id)
                .bind(&entry.description)
                .bind(entry.timestamp)
                .execute(&pool)
                .await;

                if let Err(e) = result {
                    warn!("Failed to write activity log entry '{}': {}", entry.action, e);
                }
            }
            info!("Activity log writer stopped");
        });

        Self { tx }
    }
}

impl ActivityLog for PgActivityLog {
    fn record(&self, entry: ActivityEntry) {
        if self.tx.send(entry).is_err() {
            warn!("Activity log writer is gone; entry dropped");
        }
    }
}
