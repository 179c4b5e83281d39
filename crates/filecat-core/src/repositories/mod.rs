//! Repository traits (ports)

pub mod activity_log;
pub mod category_repository;
pub mod reference_index;

pub use activity_log::{ActivityEntry, ActivityLog};
pub use category_repository::CategoryRepository;
pub use reference_index::UserReferenceIndex;
