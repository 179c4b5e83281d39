// ============================================================================
// Filecat Core - File Category Entity
// File: crates/filecat-core/src/domain/file_category.rs
// Description: File category entity and status enum
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use filecat_shared::types::new_id;

/// Category status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryStatus {
    Active,
    Inactive,
}

impl CategoryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryStatus::Active => "active",
            CategoryStatus::Inactive => "inactive",
        }
    }

    /// Only the exact lowercase forms are accepted.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "active" => Some(CategoryStatus::Active),
            "inactive" => Some(CategoryStatus::Inactive),
            _ => None,
        }
    }
}

impl Default for CategoryStatus {
    fn default() -> Self {
        CategoryStatus::Active
    }
}

/// File category entity
///
/// `code` is stored and compared in normalized uppercase form; uniqueness
/// across the live set is enforced by the store.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FileCategory {
    pub id: Uuid,

    #[validate(length(min = 1, max = 50, message = "Code must be between 1 and 50 characters"))]
    pub code: String,

    #[validate(length(max = 100, message = "Name must be at most 100 characters"))]
    pub name: String,

    pub description: Option<String>,

    pub status: CategoryStatus,

    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl FileCategory {
    /// Uppercase normalization applied to every code before storage or
    /// comparison.
    pub fn normalize_code(code: &str) -> String {
        code.trim().to_uppercase()
    }

    /// Create a new file category. The name defaults to the normalized code
    /// when omitted.
    pub fn new(input: NewCategory) -> Result<Self, validator::ValidationErrors> {
        let code = Self::normalize_code(&input.code);
        let name = input
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| code.clone());
        let now = Utc::now();

        let category = Self {
            id: new_id(),
            code,
            name,
            description: input.description.map(|d| d.trim().to_string()),
            status: input.status.unwrap_or_default(),
            created_date: now,
            last_updated: now,
        };

        category.validate()?;
        Ok(category)
    }

    /// Merge a partial field set into the entity. Unset fields are left
    /// untouched; `id` and `created_date` are immutable.
    pub fn apply(&mut self, patch: CategoryPatch) -> Result<(), validator::ValidationErrors> {
        if let Some(code) = patch.code {
            self.code = Self::normalize_code(&code);
        }
        if let Some(name) = patch.name {
            self.name = name.trim().to_string();
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(status) = patch.status {
            self.status = status;
        }

        self.validate()?;
        self.last_updated = Utc::now();
        Ok(())
    }
}

/// Input for category creation.
#[derive(Debug, Clone, Default)]
pub struct NewCategory {
    pub code: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<CategoryStatus>,
}

/// Partial field set for update. `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct CategoryPatch {
    pub code: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<CategoryStatus>,
}

impl CategoryPatch {
    pub fn is_empty(&self) -> bool {
        self.code.is_none()
            && self.name.is_none()
            && self.description.is_none()
            && self.status.is_none()
    }
}

/// A category joined with its live user count from the reference index.
/// The count is resolved at read time and never stored.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryWithCount {
    #[serde(flatten)]
    pub category: FileCategory,
    pub user_count: i64,
}
