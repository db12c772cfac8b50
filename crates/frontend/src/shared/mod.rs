pub mod api_utils;
pub mod catalog_cache;
pub mod collected_set;
pub mod confirm;
pub mod files;
pub mod icons;
pub mod toast;
