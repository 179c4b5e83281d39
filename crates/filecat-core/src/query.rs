//! Listing query engine
//!
//! Turns raw listing parameters into a validated, deterministic query:
//! search/status filtering, a closed sort-field list, and offset-based
//! pagination. Sorting by the derived `user_count` field happens here in
//! memory, after the service has resolved counts for the filtered
//! candidate set; every ordering falls back to `id` ascending so repeated
//! queries over unchanged data return a stable order.

use serde::{Deserialize, Serialize};

use crate::domain::{CategoryStatus, CategoryWithCount};
use crate::error::DomainError;
use filecat_shared::constants::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Sortable fields, including the derived `user_count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Code,
    Name,
    Description,
    Status,
    CreatedDate,
    LastUpdated,
    Id,
    UserCount,
}

impl SortField {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "code" => Some(SortField::Code),
            "name" => Some(SortField::Name),
            "description" => Some(SortField::Description),
            "status" => Some(SortField::Status),
            "created_date" => Some(SortField::CreatedDate),
            "last_updated" => Some(SortField::LastUpdated),
            "id" => Some(SortField::Id),
            "user_count" => Some(SortField::UserCount),
            _ => None,
        }
    }

    /// Store column backing the sort key. `None` for `user_count`, which
    /// does not live in the store.
    pub fn column(&self) -> Option<&'static str> {
        match self {
            SortField::Code => Some("code"),
            SortField::Name => Some("name"),
            SortField::Description => Some("description"),
            SortField::Status => Some("status"),
            SortField::CreatedDate => Some("created_date"),
            SortField::LastUpdated => Some("last_updated"),
            SortField::Id => Some("id"),
            SortField::UserCount => None,
        }
    }
}

impl Default for SortField {
    fn default() -> Self {
        SortField::Code
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::Asc
    }
}

/// Raw listing parameters as they arrive from the caller. Everything is
/// kept as text so a malformed value surfaces as a field-scoped
/// validation failure instead of a deserializer rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<String>,
    pub per_page: Option<String>,
    pub search: Option<String>,
    pub status: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
}

/// Filter portion of a validated query.
#[derive(Debug, Clone, Default)]
pub struct CategoryFilter {
    pub search: Option<String>,
    pub status: Option<CategoryStatus>,
}

/// A fully validated listing query.
#[derive(Debug, Clone)]
pub struct CategoryQuery {
    pub filter: CategoryFilter,
    pub sort: SortField,
    pub order: SortOrder,
    pub page: i64,
    pub per_page: i64,
}

impl CategoryQuery {
    /// Row offset of the requested page. Saturates on a page number far
    /// past the end of the set, which then yields an empty page.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.per_page)
    }

    pub fn limit(&self) -> i64 {
        self.per_page
    }
}

impl ListParams {
    /// Validate the raw parameters. Out-of-range or unknown values fail
    /// rather than silently defaulting.
    pub fn validate(self) -> Result<CategoryQuery, DomainError> {
        let page = match self.page.as_deref() {
            None => DEFAULT_PAGE as i64,
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .map_err(|_| DomainError::validation("page", "page must be an integer"))?,
        };
        if page < 1 {
            return Err(DomainError::validation("page", "page must be greater than or equal to 1"));
        }

        let per_page = match self.per_page.as_deref() {
            None => DEFAULT_PAGE_SIZE as i64,
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .map_err(|_| DomainError::validation("per_page", "per_page must be an integer"))?,
        };
        if per_page < 1 || per_page > MAX_PAGE_SIZE as i64 {
            return Err(DomainError::validation(
                "per_page",
                "per_page must be between 1 and 100",
            ));
        }

        let status = match self.status.as_deref() {
            None => None,
            Some(raw) => Some(CategoryStatus::from_str(raw).ok_or_else(|| {
                DomainError::validation("status", "status must be 'active' or 'inactive'")
            })?),
        };

        let sort = match self.sort.as_deref() {
            None => SortField::default(),
            Some(raw) => SortField::from_str(raw).ok_or_else(|| {
                DomainError::validation("sort", &format!("unknown sort field: {}", raw))
            })?,
        };

        let order = match self.order.as_deref() {
            None => SortOrder::default(),
            Some(raw) => SortOrder::from_str(raw).ok_or_else(|| {
                DomainError::validation("order", "order must be 'asc' or 'desc'")
            })?,
        };

        let search = self
            .search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Ok(CategoryQuery {
            filter: CategoryFilter { search, status },
            sort,
            order,
            page,
            per_page,
        })
    }
}

/// Pagination metadata attached to every listing result.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PageMeta {
    pub page: i64,
    pub per_page: i64,
    pub total: i64,
    pub pages: i64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PageMeta {
    pub fn new(page: i64, per_page: i64, total: i64) -> Self {
        let pages = (total + per_page - 1) / per_page;
        Self {
            page,
            per_page,
            total,
            pages,
            has_next: page < pages,
            has_prev: page > 1,
        }
    }
}

/// Order the candidate set by live user count, tie-broken by `id`
/// ascending regardless of direction.
pub fn sort_by_user_count(rows: &mut [CategoryWithCount], order: SortOrder) {
    rows.sort_by(|a, b| {
        let by_count = match order {
            SortOrder::Asc => a.user_count.cmp(&b.user_count),
            SortOrder::Desc => b.user_count.cmp(&a.user_count),
        };
        by_count.then_with(|| a.category.id.cmp(&b.category.id))
    });
}

/// Slice one page out of an already-sorted candidate set.
pub fn page_slice(rows: Vec<CategoryWithCount>, query: &CategoryQuery) -> Vec<CategoryWithCount> {
    rows.into_iter()
        .skip(query.offset() as usize)
        .take(query.per_page as usize)
        .collect()
}
