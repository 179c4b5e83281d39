//! Request/response DTOs
//!
//! Status strings are parsed here rather than typed in serde so that a
//! bad value comes back through the uniform validation envelope instead
//! of a deserializer rejection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use filecat_core::domain::{CategoryPatch, CategoryStatus, CategoryWithCount, NewCategory};
use filecat_core::error::DomainError;
use filecat_core::query::PageMeta;

/// Create request payload
#[derive(Debug, Deserialize)]
pub struct CreateFileCategoryRequest {
    pub code: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}

impl CreateFileCategoryRequest {
    pub fn into_new_category(self) -> Result<NewCategory, DomainError> {
        Ok(NewCategory {
            code: self.code,
            name: self.name,
            description: self.description,
            status: parse_status(self.status)?,
        })
    }
}

/// Update request payload; all fields optional, at least one required.
#[derive(Debug, Deserialize)]
pub struct UpdateFileCategoryRequest {
    pub code: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}

impl UpdateFileCategoryRequest {
    pub fn into_patch(self) -> Result<CategoryPatch, DomainError> {
        Ok(CategoryPatch {
            code: self.code,
            name: self.name,
            description: self.description,
            status: parse_status(self.status)?,
        })
    }
}

fn parse_status(raw: Option<String>) -> Result<Option<CategoryStatus>, DomainError> {
    match raw {
        None => Ok(None),
        Some(raw) => CategoryStatus::from_str(&raw).map(Some).ok_or_else(|| {
            DomainError::validation("status", "status must be 'active' or 'inactive'")
        }),
    }
}

/// Category DTO for responses
#[derive(Debug, Serialize)]
pub struct FileCategoryDto {
    pub id: String,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub status: String,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
    pub user_count: i64,
}

impl From<CategoryWithCount> for FileCategoryDto {
    fn from(row: CategoryWithCount) -> Self {
        Self {
            id: row.category.id.to_string(),
            code: row.category.code,
            name: row.category.name,
            description: row.category.description,
            status: row.category.status.as_str().to_string(),
            created_date: row.category.created_date,
            last_updated: row.category.last_updated,
            user_count: row.user_count,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FileCategoryListResponse {
    pub file_categories: Vec<FileCategoryDto>,
    pub pagination: PageMeta,
}

#[derive(Debug, Serialize)]
pub struct FileCategoryMutationResponse {
    pub message: String,
    pub file_category: FileCategoryDto,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use filecat_core::domain::{FileCategory, NewCategory};

    #[test]
    fn test_unknown_status_rejected() {
        let request = CreateFileCategoryRequest {
            code: "CHECKS".to_string(),
            name: None,
            description: None,
            status: Some("archived".to_string()),
        };
        assert!(request.into_new_category().is_err());
    }

    #[test]
    fn test_dto_serializes_iso_timestamps() {
        let category = FileCategory::new(NewCategory {
            code: "checks".to_string(),
            ..Default::default()
        })
        .unwrap();
        let dto = FileCategoryDto::from(CategoryWithCount {
            category,
            user_count: 2,
        });

        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["code"], "CHECKS");
        assert_eq!(value["status"], "active");
        assert_eq!(value["user_count"], 2);
        // chrono renders RFC 3339 / ISO-8601
        assert!(value["created_date"].as_str().unwrap().contains('T'));
    }
}
