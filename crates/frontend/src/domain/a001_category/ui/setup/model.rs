use crate::shared::api_utils;
use contracts::domain::a001_category::{Category, CategoryCreateDto};

pub async fn fetch_categories() -> Result<Vec<Category>, String> {
    api_utils::get_json("/api/categories").await
}

pub async fn create_category(dto: &CategoryCreateDto) -> Result<Category, String> {
    api_utils::post_json("/api/categories", dto).await
}

pub async fn delete_category(id: &str) -> Result<(), String> {
    api_utils::delete(&format!("/api/categories/{}", id)).await
}
