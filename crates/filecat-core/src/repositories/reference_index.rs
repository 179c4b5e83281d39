//! User reference index trait (port)
//!
//! Read-only view onto the externally-owned user subsystem, answering how
//! many users reference a given category. The registry never mutates user
//! records.

use std::collections::HashMap;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserReferenceIndex: Send + Sync {
    async fn count_references(&self, category_id: &Uuid) -> Result<i64, DomainError>;
    /// Batched counts for a candidate set; ids with no references are
    /// absent from the map.
    async fn count_many(
        &self,
        category_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, i64>, DomainError>;
}
