// ============================================================================
// Filecat Infrastructure - PostgreSQL User Reference Index
// File: crates/filecat-infrastructure/src/database/postgres/reference_index_impl.rs
// ============================================================================
//! Read-only view over the user subsystem's assignment table. The
//! registry never writes to it.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use tracing::error;
use uuid::Uuid;

use filecat_core::error::DomainError;
use filecat_core::repositories::UserReferenceIndex;

pub struct PgUserReferenceIndex {
    pool: PgPool,
}

impl PgUserReferenceIndex {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserReferenceIndex for PgUserReferenceIndex {
    async fn count_references(&self, category_id: &Uuid) -> Result<i64, DomainError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM user_file_categories WHERE file_category_id = $1",
        )
        .bind(category_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error counting category references: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(count)
    }

    async fn count_many(
        &self,
        category_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, i64>, DomainError> {
        if category_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query(
            "SELECT file_category_id, COUNT(*) AS user_count \
             FROM user_file_categories \
             WHERE file_category_id = ANY($1) \
             GROUP BY file_category_id",
        )
        .bind(category_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error counting category references: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        let mut counts = HashMap::with_capacity(rows.len());
        for row in rows {
            let id: Uuid = row.get("file_category_id");
            let count: i64 = row.get("user_count");
            counts.insert(id, count);
        }
        Ok(counts)
    }
}
