// ============================================================================
// Filecat Core - Category Service
// File: crates/filecat-core/src/services/category_service.rs
// ============================================================================
//! Category registry orchestrator: validates input, normalizes codes,
//! applies the create/update/delete business rules, joins live user
//! counts, and emits activity records after successful mutations.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::{Actor, CategoryPatch, CategoryWithCount, FileCategory, NewCategory};
use crate::error::DomainError;
use crate::query::{self, ListParams, PageMeta, SortField};
use crate::repositories::{ActivityEntry, ActivityLog, CategoryRepository, UserReferenceIndex};

/// One page of listing results plus pagination metadata.
#[derive(Debug, Clone)]
pub struct CategoryPage {
    pub items: Vec<CategoryWithCount>,
    pub meta: PageMeta,
}

pub struct CategoryService {
    categories: Arc<dyn CategoryRepository>,
    references: Arc<dyn UserReferenceIndex>,
    activity: Arc<dyn ActivityLog>,
}

impl CategoryService {
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        references: Arc<dyn UserReferenceIndex>,
        activity: Arc<dyn ActivityLog>,
    ) -> Self {
        Self {
            categories,
            references,
            activity,
        }
    }

    /// List categories with filtering, sorting, and pagination. Counts are
    /// resolved live from the reference index for every returned row.
    pub async fn list(&self, params: ListParams) -> Result<CategoryPage, DomainError> {
        let query = params.validate()?;

        // The derived user_count key cannot be ordered by the store:
        // resolve counts for the whole filtered candidate set first, then
        // order and slice here.
        if query.sort == SortField::UserCount {
            let candidates = self.categories.list_filtered(&query.filter).await?;
            let ids: Vec<Uuid> = candidates.iter().map(|c| c.id).collect();
            let counts = self.references.count_many(&ids).await?;

            let mut rows: Vec<CategoryWithCount> = candidates
                .into_iter()
                .map(|category| {
                    let user_count = counts.get(&category.id).copied().unwrap_or(0);
                    CategoryWithCount {
                        category,
                        user_count,
                    }
                })
                .collect();

            query::sort_by_user_count(&mut rows, query.order);
            let total = rows.len() as i64;
            let items = query::page_slice(rows, &query);
            let meta = PageMeta::new(query.page, query.per_page, total);
            return Ok(CategoryPage { items, meta });
        }

        let (page_rows, total) = self.categories.list(&query).await?;
        let ids: Vec<Uuid> = page_rows.iter().map(|c| c.id).collect();
        let counts = self.references.count_many(&ids).await?;

        let items = page_rows
            .into_iter()
            .map(|category| {
                let user_count = counts.get(&category.id).copied().unwrap_or(0);
                CategoryWithCount {
                    category,
                    user_count,
                }
            })
            .collect();

        let meta = PageMeta::new(query.page, query.per_page, total);
        Ok(CategoryPage { items, meta })
    }

    /// Fetch a single category with its live user count.
    pub async fn get(&self, id: &Uuid) -> Result<CategoryWithCount, DomainError> {
        let category = self
            .categories
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::CategoryNotFound(id.to_string()))?;
        let user_count = self.references.count_references(id).await?;
        Ok(CategoryWithCount {
            category,
            user_count,
        })
    }

    /// Create a category. `user_count` is zero by construction, no user
    /// can reference a just-created id.
    pub async fn create(
        &self,
        input: NewCategory,
        actor: &Actor,
    ) -> Result<CategoryWithCount, DomainError> {
        let category = FileCategory::new(input)?;

        // Advisory pre-check for a friendly error; the store's unique
        // constraint settles concurrent racers.
        if self.categories.find_by_code(&category.code).await?.is_some() {
            warn!("Create rejected, code already exists: {}", category.code);
            return Err(DomainError::CategoryExists(category.code));
        }

        let created = self.categories.insert(&category).await?;
        info!("File category created: {} ({})", created.code, created.id);

        self.activity.record(ActivityEntry::file_category(
            &actor.id,
            "file_category_created",
            created.id,
            format!("Created file category: {}", created.code),
        ));

        Ok(CategoryWithCount {
            category: created,
            user_count: 0,
        })
    }

    /// Partial update. Provided fields are validated with the same rules
    /// as create; unset fields are left untouched.
    pub async fn update(
        &self,
        id: &Uuid,
        patch: CategoryPatch,
        actor: &Actor,
    ) -> Result<CategoryWithCount, DomainError> {
        if patch.is_empty() {
            return Err(DomainError::validation(
                "body",
                "At least one field must be provided for update",
            ));
        }

        let mut category = self
            .categories
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::CategoryNotFound(id.to_string()))?;

        // Uniqueness is re-checked against all other categories; the store
        // constraint still backstops a racing writer.
        if let Some(code) = patch.code.as_deref() {
            let normalized = FileCategory::normalize_code(code);
            if let Some(existing) = self.categories.find_by_code(&normalized).await? {
                if existing.id != *id {
                    warn!("Update rejected, code already exists: {}", normalized);
                    return Err(DomainError::CategoryExists(normalized));
                }
            }
        }

        category.apply(patch)?;
        let updated = self.categories.update(&category).await?;
        info!("File category updated: {} ({})", updated.code, updated.id);

        self.activity.record(ActivityEntry::file_category(
            &actor.id,
            "file_category_updated",
            updated.id,
            format!("Updated file category: {}", updated.code),
        ));

        let user_count = self.references.count_references(id).await?;
        Ok(CategoryWithCount {
            category: updated,
            user_count,
        })
    }

    /// Delete a category, gated on a zero live reference count.
    pub async fn delete(&self, id: &Uuid, actor: &Actor) -> Result<(), DomainError> {
        let category = self
            .categories
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::CategoryNotFound(id.to_string()))?;

        let user_count = self.references.count_references(id).await?;
        if user_count > 0 {
            return Err(DomainError::CategoryInUse(user_count));
        }

        // A user can be assigned between the count check and the delete;
        // the store rejects that case, and the count is re-read for the
        // message.
        match self.categories.delete(id).await {
            Ok(()) => {}
            Err(DomainError::CategoryInUse(_)) => {
                let count = self.references.count_references(id).await.unwrap_or(1);
                return Err(DomainError::CategoryInUse(count.max(1)));
            }
            Err(e) => return Err(e),
        }

        info!("File category deleted: {} ({})", category.code, id);
        self.activity.record(ActivityEntry::file_category(
            &actor.id,
            "file_category_deleted",
            *id,
            format!("Deleted file category: {}", category.code),
        ));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CategoryStatus, Role};
    use crate::query::{CategoryFilter, CategoryQuery, SortOrder};
    use crate::repositories::reference_index::MockUserReferenceIndex;
    use async_trait::async_trait;
    use std::cmp::Ordering;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryCategories {
        rows: Mutex<Vec<FileCategory>>,
    }

    impl InMemoryCategories {
        fn matches(filter: &CategoryFilter, category: &FileCategory) -> bool {
            if let Some(status) = filter.status {
                if category.status != status {
                    return false;
                }
            }
            if let Some(search) = &filter.search {
                let needle = search.to_lowercase();
                let hit = category.code.to_lowercase().contains(&needle)
                    || category.name.to_lowercase().contains(&needle)
                    || category
                        .description
                        .as_ref()
                        .map(|d| d.to_lowercase().contains(&needle))
                        .unwrap_or(false);
                if !hit {
                    return false;
                }
            }
            true
        }

        fn compare(sort: SortField, a: &FileCategory, b: &FileCategory) -> Ordering {
            match sort {
                SortField::Code => a.code.cmp(&b.code),
                SortField::Name => a.name.cmp(&b.name),
                SortField::Description => a.description.cmp(&b.description),
                SortField::Status => a.status.as_str().cmp(b.status.as_str()),
                SortField::CreatedDate => a.created_date.cmp(&b.created_date),
                SortField::LastUpdated => a.last_updated.cmp(&b.last_updated),
                SortField::Id | SortField::UserCount => a.id.cmp(&b.id),
            }
        }
    }

    #[async_trait]
    impl CategoryRepository for InMemoryCategories {
        async fn find_by_id(&self, id: &Uuid) -> Result<Option<FileCategory>, DomainError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .find(|c| c.id == *id)
                .cloned())
        }

        async fn find_by_code(&self, code: &str) -> Result<Option<FileCategory>, DomainError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .find(|c| c.code == code)
                .cloned())
        }

        async fn insert(&self, category: &FileCategory) -> Result<FileCategory, DomainError> {
            let mut rows = self.rows.lock().unwrap();
            if rows.iter().any(|c| c.code == category.code) {
                return Err(DomainError::CategoryExists(category.code.clone()));
            }
            rows.push(category.clone());
            Ok(category.clone())
        }

        async fn update(&self, category: &FileCategory) -> Result<FileCategory, DomainError> {
            let mut rows = self.rows.lock().unwrap();
            if rows
                .iter()
                .any(|c| c.id != category.id && c.code == category.code)
            {
                return Err(DomainError::CategoryExists(category.code.clone()));
            }
            let slot = rows
                .iter_mut()
                .find(|c| c.id == category.id)
                .ok_or_else(|| DomainError::CategoryNotFound(category.id.to_string()))?;
            *slot = category.clone();
            Ok(category.clone())
        }

        async fn delete(&self, id: &Uuid) -> Result<(), DomainError> {
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|c| c.id != *id);
            if rows.len() == before {
                return Err(DomainError::CategoryNotFound(id.to_string()));
            }
            Ok(())
        }

        async fn list(
            &self,
            query: &CategoryQuery,
        ) -> Result<(Vec<FileCategory>, i64), DomainError> {
            let rows = self.rows.lock().unwrap();
            let mut filtered: Vec<FileCategory> = rows
                .iter()
                .filter(|c| Self::matches(&query.filter, c))
                .cloned()
                .collect();
            filtered.sort_by(|a, b| {
                let ord = Self::compare(query.sort, a, b);
                let ord = match query.order {
                    SortOrder::Asc => ord,
                    SortOrder::Desc => ord.reverse(),
                };
                ord.then_with(|| a.id.cmp(&b.id))
            });
            let total = filtered.len() as i64;
            let page = filtered
                .into_iter()
                .skip(query.offset() as usize)
                .take(query.per_page as usize)
                .collect();
            Ok((page, total))
        }

        async fn list_filtered(
            &self,
            filter: &CategoryFilter,
        ) -> Result<Vec<FileCategory>, DomainError> {
            let rows = self.rows.lock().unwrap();
            let mut filtered: Vec<FileCategory> = rows
                .iter()
                .filter(|c| Self::matches(filter, c))
                .cloned()
                .collect();
            filtered.sort_by(|a, b| a.id.cmp(&b.id));
            Ok(filtered)
        }
    }

    #[derive(Default)]
    struct RecordingActivityLog {
        entries: Mutex<Vec<ActivityEntry>>,
    }

    impl ActivityLog for RecordingActivityLog {
        fn record(&self, entry: ActivityEntry) {
            self.entries.lock().unwrap().push(entry);
        }
    }

    fn admin() -> Actor {
        Actor {
            id: "admin-1".to_string(),
            role: Role::Admin,
        }
    }

    fn zero_counts() -> MockUserReferenceIndex {
        let mut references = MockUserReferenceIndex::new();
        references
            .expect_count_references()
            .returning(|_| Ok(0));
        references
            .expect_count_many()
            .returning(|_| Ok(HashMap::new()));
        references
    }

    fn service_with(
        references: MockUserReferenceIndex,
    ) -> (CategoryService, Arc<InMemoryCategories>, Arc<RecordingActivityLog>) {
        let repo = Arc::new(InMemoryCategories::default());
        let activity = Arc::new(RecordingActivityLog::default());
        let service = CategoryService::new(repo.clone(), Arc::new(references), activity.clone());
        (service, repo, activity)
    }

    fn new_category(code: &str) -> NewCategory {
        NewCategory {
            code: code.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_normalizes_and_defaults() {
        let (service, _, activity) = service_with(zero_counts());

        let created = service
            .create(
                NewCategory {
                    code: "travel_reports".to_string(),
                    name: Some("Travel Reports".to_string()),
                    ..Default::default()
                },
                &admin(),
            )
            .await
            .unwrap();

        assert_eq!(created.category.code, "TRAVEL_REPORTS");
        assert_eq!(created.category.status, CategoryStatus::Active);
        assert_eq!(created.user_count, 0);

        let entries = activity.entries.lock().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].action, "file_category_created");
        assert_eq!(entries[0].entity_type, "file_category");
        assert_eq!(entries[0].actor, "admin-1");
    }

    #[tokio::test]
    async fn test_create_duplicate_code_conflicts() {
        let (service, _, _) = service_with(zero_counts());

        service
            .create(new_category("travel_reports"), &admin())
            .await
            .unwrap();
        let result = service
            .create(new_category("TRAVEL_REPORTS"), &admin())
            .await;

        assert!(matches!(result, Err(DomainError::CategoryExists(_))));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_concurrent_creates_with_same_code_yield_one_winner() {
        let (service, repo, _) = service_with(zero_counts());
        let service = Arc::new(service);

        let a = tokio::spawn({
            let service = service.clone();
            async move { service.create(new_category("travel_reports"), &admin()).await }
        });
        let b = tokio::spawn({
            let service = service.clone();
            async move { service.create(new_category("TRAVEL_REPORTS"), &admin()).await }
        });

        let (a, b) = (a.await.unwrap(), b.await.unwrap());
        let successes = [&a, &b].iter().filter(|r| r.is_ok()).count();
        assert_eq!(successes, 1);
        assert!([a, b]
            .into_iter()
            .any(|r| matches!(r, Err(DomainError::CategoryExists(_)))));
        assert_eq!(repo.rows.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_invalid_code_never_touches_store() {
        let (service, repo, activity) = service_with(zero_counts());

        let result = service.create(new_category("   "), &admin()).await;

        assert!(matches!(result, Err(DomainError::Validation(_))));
        assert!(repo.rows.lock().unwrap().is_empty());
        assert!(activity.entries.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_missing_category() {
        let (service, _, _) = service_with(zero_counts());
        let result = service.get(&Uuid::new_v4()).await;
        assert!(matches!(result, Err(DomainError::CategoryNotFound(_))));
    }

    #[tokio::test]
    async fn test_get_attaches_live_count() {
        let mut references = MockUserReferenceIndex::new();
        references.expect_count_references().returning(|_| Ok(3));
        references
            .expect_count_many()
            .returning(|_| Ok(HashMap::new()));
        let (service, _, _) = service_with(references);

        let created = service
            .create(new_category("checks"), &admin())
            .await
            .unwrap();
        let fetched = service.get(&created.category.id).await.unwrap();

        assert_eq!(fetched.user_count, 3);
    }

    #[tokio::test]
    async fn test_update_empty_patch_rejected() {
        let (service, _, _) = service_with(zero_counts());
        let result = service
            .update(&Uuid::new_v4(), CategoryPatch::default(), &admin())
            .await;

        match result {
            Err(DomainError::Validation(details)) => {
                assert_eq!(
                    details[0].message,
                    "At least one field must be provided for update"
                );
            }
            _ => panic!("expected validation error"),
        }
    }

    #[tokio::test]
    async fn test_update_renormalizes_code() {
        let (service, _, _) = service_with(zero_counts());
        let created = service
            .create(new_category("OTHER"), &admin())
            .await
            .unwrap();

        let updated = service
            .update(
                &created.category.id,
                CategoryPatch {
                    code: Some("abc".to_string()),
                    ..Default::default()
                },
                &admin(),
            )
            .await
            .unwrap();

        assert_eq!(updated.category.code, "ABC");
    }

    #[tokio::test]
    async fn test_update_status_only_preserves_other_fields() {
        let (service, _, _) = service_with(zero_counts());
        let created = service
            .create(
                NewCategory {
                    code: "payroll".to_string(),
                    name: Some("Payroll".to_string()),
                    description: Some("Payroll reports".to_string()),
                    ..Default::default()
                },
                &admin(),
            )
            .await
            .unwrap();

        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        let updated = service
            .update(
                &created.category.id,
                CategoryPatch {
                    status: Some(CategoryStatus::Inactive),
                    ..Default::default()
                },
                &admin(),
            )
            .await
            .unwrap();

        assert_eq!(updated.category.code, "PAYROLL");
        assert_eq!(updated.category.name, "Payroll");
        assert_eq!(
            updated.category.description.as_deref(),
            Some("Payroll reports")
        );
        assert_eq!(updated.category.status, CategoryStatus::Inactive);
        assert_eq!(updated.category.created_date, created.category.created_date);
        assert!(updated.category.last_updated > created.category.last_updated);
    }

    #[tokio::test]
    async fn test_update_code_collision_with_other_category() {
        let (service, _, _) = service_with(zero_counts());
        service
            .create(new_category("CHECKS"), &admin())
            .await
            .unwrap();
        let other = service
            .create(new_category("OTHER"), &admin())
            .await
            .unwrap();

        let result = service
            .update(
                &other.category.id,
                CategoryPatch {
                    code: Some("checks".to_string()),
                    ..Default::default()
                },
                &admin(),
            )
            .await;

        assert!(matches!(result, Err(DomainError::CategoryExists(_))));
    }

    #[tokio::test]
    async fn test_update_own_code_is_not_a_collision() {
        let (service, _, _) = service_with(zero_counts());
        let created = service
            .create(new_category("checks"), &admin())
            .await
            .unwrap();

        let updated = service
            .update(
                &created.category.id,
                CategoryPatch {
                    code: Some("checks".to_string()),
                    ..Default::default()
                },
                &admin(),
            )
            .await
            .unwrap();

        assert_eq!(updated.category.code, "CHECKS");
    }

    #[tokio::test]
    async fn test_update_missing_category() {
        let (service, _, _) = service_with(zero_counts());
        let result = service
            .update(
                &Uuid::new_v4(),
                CategoryPatch {
                    name: Some("Renamed".to_string()),
                    ..Default::default()
                },
                &admin(),
            )
            .await;
        assert!(matches!(result, Err(DomainError::CategoryNotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_blocked_when_referenced() {
        let mut references = MockUserReferenceIndex::new();
        references.expect_count_references().returning(|_| Ok(5));
        references
            .expect_count_many()
            .returning(|_| Ok(HashMap::new()));
        let (service, repo, activity) = service_with(references);

        let created = service
            .create(new_category("personnel_files"), &admin())
            .await
            .unwrap();
        // Reset the create-side activity entry count baseline.
        let baseline = activity.entries.lock().unwrap().len();

        let result = service.delete(&created.category.id, &admin()).await;

        match result {
            Err(DomainError::CategoryInUse(count)) => {
                assert_eq!(count, 5);
            }
            _ => panic!("expected in-use error"),
        }
        assert_eq!(repo.rows.lock().unwrap().len(), 1);
        assert_eq!(activity.entries.lock().unwrap().len(), baseline);
    }

    #[tokio::test]
    async fn test_delete_unreferenced_succeeds() {
        let (service, repo, activity) = service_with(zero_counts());
        let created = service
            .create(new_category("pending_files"), &admin())
            .await
            .unwrap();

        service.delete(&created.category.id, &admin()).await.unwrap();

        assert!(repo.rows.lock().unwrap().is_empty());
        let entries = activity.entries.lock().unwrap();
        assert_eq!(entries.last().unwrap().action, "file_category_deleted");
    }

    #[tokio::test]
    async fn test_delete_missing_category() {
        let (service, _, _) = service_with(zero_counts());
        let result = service.delete(&Uuid::new_v4(), &admin()).await;
        assert!(matches!(result, Err(DomainError::CategoryNotFound(_))));
    }

    async fn seed_abg(service: &CategoryService) {
        for (code, name) in [("A1", "Alpha"), ("B1", "Beta"), ("G1", "Gamma")] {
            service
                .create(
                    NewCategory {
                        code: code.to_string(),
                        name: Some(name.to_string()),
                        ..Default::default()
                    },
                    &admin(),
                )
                .await
                .unwrap();
        }
    }

    #[tokio::test]
    async fn test_list_middle_page_by_name() {
        let (service, _, _) = service_with(zero_counts());
        seed_abg(&service).await;

        let page = service
            .list(ListParams {
                status: Some("active".to_string()),
                sort: Some("name".to_string()),
                order: Some("asc".to_string()),
                per_page: Some("1".to_string()),
                page: Some("2".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].category.name, "Beta");
        assert_eq!(page.meta.total, 3);
        assert_eq!(page.meta.pages, 3);
        assert!(page.meta.has_next);
        assert!(page.meta.has_prev);
    }

    #[tokio::test]
    async fn test_list_page_far_beyond_range_is_empty() {
        let (service, _, _) = service_with(zero_counts());
        seed_abg(&service).await;

        let page = service
            .list(ListParams {
                page: Some("100000000".to_string()),
                per_page: Some("100".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert!(page.items.is_empty());
        assert_eq!(page.meta.total, 3);
        assert!(!page.meta.has_next);
    }

    #[tokio::test]
    async fn test_list_search_matches_all_three_fields() {
        let (service, _, _) = service_with(zero_counts());
        service
            .create(
                NewCategory {
                    code: "1099".to_string(),
                    name: Some("Tax Forms".to_string()),
                    description: Some("Yearly filings".to_string()),
                    ..Default::default()
                },
                &admin(),
            )
            .await
            .unwrap();
        service
            .create(new_category("CHECKS"), &admin())
            .await
            .unwrap();

        for term in ["1099", "tax", "yearly"] {
            let page = service
                .list(ListParams {
                    search: Some(term.to_string()),
                    ..Default::default()
                })
                .await
                .unwrap();
            assert_eq!(page.items.len(), 1, "search term {:?}", term);
            assert_eq!(page.items[0].category.code, "1099");
        }
    }

    #[tokio::test]
    async fn test_list_sorted_by_user_count() {
        let (service, repo, _) = service_with(zero_counts());
        seed_abg(&service).await;
        let ids: Vec<Uuid> = repo
            .rows
            .lock()
            .unwrap()
            .iter()
            .map(|c| c.id)
            .collect();

        let mut counts = HashMap::new();
        counts.insert(ids[0], 2_i64);
        counts.insert(ids[1], 7_i64);
        // ids[2] has no references.

        let mut references = MockUserReferenceIndex::new();
        let table = counts.clone();
        references.expect_count_many().returning(move |requested| {
            Ok(requested
                .iter()
                .filter_map(|id| table.get(id).map(|n| (*id, *n)))
                .collect())
        });
        references.expect_count_references().returning(|_| Ok(0));

        let service = CategoryService::new(
            repo.clone(),
            Arc::new(references),
            Arc::new(RecordingActivityLog::default()),
        );

        let page = service
            .list(ListParams {
                sort: Some("user_count".to_string()),
                order: Some("desc".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        let counts_seen: Vec<i64> = page.items.iter().map(|r| r.user_count).collect();
        assert_eq!(counts_seen, vec![7, 2, 0]);
        assert_eq!(page.meta.total, 3);
    }

    #[tokio::test]
    async fn test_list_repeated_queries_are_stable() {
        let (service, _, _) = service_with(zero_counts());
        // All rows share one name so ordering rests entirely on the id
        // tiebreak.
        for code in ["C1", "C2", "C3", "C4"] {
            service
                .create(
                    NewCategory {
                        code: code.to_string(),
                        name: Some("Same".to_string()),
                        ..Default::default()
                    },
                    &admin(),
                )
                .await
                .unwrap();
        }

        let run = || async {
            let page = service
                .list(ListParams {
                    sort: Some("name".to_string()),
                    ..Default::default()
                })
                .await
                .unwrap();
            page.items
                .iter()
                .map(|r| r.category.id)
                .collect::<Vec<_>>()
        };

        let first = run().await;
        let second = run().await;
        assert_eq!(first, second);
        let mut sorted = first.clone();
        sorted.sort();
        assert_eq!(first, sorted);
    }

    #[tokio::test]
    async fn test_list_rejects_unknown_sort() {
        let (service, _, _) = service_with(zero_counts());
        let result = service
            .list(ListParams {
                sort: Some("color".to_string()),
                ..Default::default()
            })
            .await;
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }
}
