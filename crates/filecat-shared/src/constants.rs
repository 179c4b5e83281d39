//! Application-wide constants

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 100;
pub const ENTITY_TYPE_FILE_CATEGORY: &str = "file_category";
