//! PostgreSQL repository implementations

pub mod activity_log_impl;
pub mod category_repo_impl;
pub mod reference_index_impl;

pub use activity_log_impl::PgActivityLog;
pub use category_repo_impl::PgCategoryRepository;
pub use reference_index_impl::PgUserReferenceIndex;
