//! Category repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::FileCategory;
use crate::error::DomainError;
use crate::query::{CategoryFilter, CategoryQuery};

/// Durable keyed storage of category records. The store owns code
/// uniqueness: concurrent writes racing on the same normalized code must
/// yield exactly one winner, the rest failing with the conflict error.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<FileCategory>, DomainError>;
    async fn find_by_code(&self, code: &str) -> Result<Option<FileCategory>, DomainError>;
    async fn insert(&self, category: &FileCategory) -> Result<FileCategory, DomainError>;
    async fn update(&self, category: &FileCategory) -> Result<FileCategory, DomainError>;
    /// Physical removal. `CategoryNotFound` if the id no longer resolves;
    /// `CategoryInUse` if the store rejects the delete because live
    /// references appeared after the service-side count check.
    async fn delete(&self, id: &Uuid) -> Result<(), DomainError>;
    /// One page of results for a store-resident sort key, plus the total
    /// match count.
    async fn list(&self, query: &CategoryQuery) -> Result<(Vec<FileCategory>, i64), DomainError>;
    /// The whole filtered candidate set, id-ascending. Used when sorting
    /// by the derived user count, which the store cannot order by.
    async fn list_filtered(&self, filter: &CategoryFilter)
        -> Result<Vec<FileCategory>, DomainError>;
}
