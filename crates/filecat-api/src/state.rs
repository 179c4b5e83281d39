use std::sync::Arc;

use filecat_core::services::CategoryService;

#[derive(Clone)]
pub struct AppState {
    pub categories: Arc<CategoryService>,
}
