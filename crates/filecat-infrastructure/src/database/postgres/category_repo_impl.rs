// ============================================================================
// Filecat Infrastructure - PostgreSQL Category Repository
// File: crates/filecat-infrastructure/src/database/postgres/category_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::{error, info};
use uuid::Uuid;

use filecat_core::domain::{CategoryStatus, FileCategory};
use filecat_core::error::DomainError;
use filecat_core::query::{CategoryFilter, CategoryQuery};
use filecat_core::repositories::CategoryRepository;

pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct FileCategoryRow {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub status: String,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl From<FileCategoryRow> for FileCategory {
    fn from(row: FileCategoryRow) -> Self {
        FileCategory {
            id: row.id,
            code: row.code,
            name: row.name,
            description: row.description,
            status: CategoryStatus::from_str(&row.status).unwrap_or_default(),
            created_date: row.created_date,
            last_updated: row.last_updated,
        }
    }
}

const COLUMNS: &str = "id, code, name, description, status, created_date, last_updated";

/// ILIKE pattern for a case-insensitive substring match, with the LIKE
/// metacharacters escaped.
fn search_pattern(search: &str) -> String {
    let escaped = search
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

fn filter_binds(filter: &CategoryFilter) -> (Option<String>, Option<&'static str>) {
    (
        filter.search.as_deref().map(search_pattern),
        filter.status.map(|s| s.as_str()),
    )
}

/// ORDER BY clause for a store-resident sort key. Every ordering appends
/// `id ASC` so ties resolve deterministically. The derived user_count key
/// never reaches the store; its pages are assembled in the service.
fn order_clause(query: &CategoryQuery) -> String {
    let column = query.sort.column().unwrap_or("code");
    format!("ORDER BY {} {}, id ASC", column, query.order.as_sql())
}

const FILTER_CLAUSE: &str = "($1::text IS NULL OR code ILIKE $1 OR name ILIKE $1 \
     OR (description IS NOT NULL AND description ILIKE $1)) \
     AND ($2::text IS NULL OR status = $2)";

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<FileCategory>, DomainError> {
        let row: Option<FileCategoryRow> = sqlx::query_as(&format!(
            "SELECT {} FROM file_categories WHERE id = $1",
            COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding category by id: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<FileCategory>, DomainError> {
        // Codes are stored normalized, so an exact match suffices.
        let row: Option<FileCategoryRow> = sqlx::query_as(&format!(
            "SELECT {} FROM file_categories WHERE code = $1",
            COLUMNS
        ))
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding category by code: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn insert(&self, category: &FileCategory) -> Result<FileCategory, DomainError> {
        info!("Creating file category: {}", category.code);

        let row: FileCategoryRow = sqlx::query_as(&format!(
            "INSERT INTO file_categories (id, code, name, description, status, created_date, last_updated) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {}",
            COLUMNS
        ))
        .bind(category.id)
        .bind(&category.code)
        .bind(&category.name)
        .bind(&category.description)
        .bind(category.status.as_str())
        .bind(category.created_date)
        .bind(category.last_updated)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error creating category: {}", e);
            let msg = e.to_string();
            if msg.contains("unique") || msg.contains("duplicate") {
                DomainError::CategoryExists(category.code.clone())
            } else {
                DomainError::DatabaseError(msg)
            }
        })?;

        info!("File category created: {}", row.id);
        Ok(row.into())
    }

    async fn update(&self, category: &FileCategory) -> Result<FileCategory, DomainError> {
        let row: Option<FileCategoryRow> = sqlx::query_as(&format!(
            "UPDATE file_categories \
             SET code = $2, name = $3, description = $4, status = $5, last_updated = $6 \
             WHERE id = $1 \
             RETURNING {}",
            COLUMNS
        ))
        .bind(category.id)
        .bind(&category.code)
        .bind(&category.name)
        .bind(&category.description)
        .bind(category.status.as_str())
        .bind(category.last_updated)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error updating category: {}", e);
            let msg = e.to_string();
            if msg.contains("unique") || msg.contains("duplicate") {
                DomainError::CategoryExists(category.code.clone())
            } else {
                DomainError::DatabaseError(msg)
            }
        })?;

        row.map(|r| r.into())
            .ok_or_else(|| DomainError::CategoryNotFound(category.id.to_string()))
    }

    async fn delete(&self, id: &Uuid) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM file_categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error deleting category: {}", e);
                let msg = e.to_string();
                // The FK from the assignment table rejects a delete that
                // raced a new user assignment.
                if msg.contains("foreign key") {
                    DomainError::CategoryInUse(0)
                } else {
                    DomainError::DatabaseError(msg)
                }
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::CategoryNotFound(id.to_string()));
        }

        info!("File category deleted: {}", id);
        Ok(())
    }

    async fn list(&self, query: &CategoryQuery) -> Result<(Vec<FileCategory>, i64), DomainError> {
        let (pattern, status) = filter_binds(&query.filter);

        let total: i64 = sqlx::query_scalar::<_, i64>(&format!(
            "SELECT COUNT(*) FROM file_categories WHERE {}",
            FILTER_CLAUSE
        ))
        .bind(&pattern)
        .bind(status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error counting categories: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        let rows: Vec<FileCategoryRow> = sqlx::query_as(&format!(
            "SELECT {} FROM file_categories WHERE {} {} LIMIT $3 OFFSET $4",
            COLUMNS,
            FILTER_CLAUSE,
            order_clause(query)
        ))
        .bind(&pattern)
        .bind(status)
        .bind(query.limit())
        .bind(query.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing categories: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok((rows.into_iter().map(|r| r.into()).collect(), total))
    }

    async fn list_filtered(
        &self,
        filter: &CategoryFilter,
    ) -> Result<Vec<FileCategory>, DomainError> {
        let (pattern, status) = filter_binds(filter);

        let rows: Vec<FileCategoryRow> = sqlx::query_as(&format!(
            "SELECT {} FROM file_categories WHERE {} ORDER BY id ASC",
            COLUMNS, FILTER_CLAUSE
        ))
        .bind(&pattern)
        .bind(status)
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing categories: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }
}
