use crate::shared::api_utils;
use contracts::domain::a002_product::{CreatedProduct, ProductCreateRequest};
use contracts::domain::common::ReferenceEntity;

// ============================================================================
// Справочники для формы товара
// ============================================================================

pub async fn fetch_categories() -> Result<Vec<ReferenceEntity>, String> {
    api_utils::get_json("/api/categories").await
}

pub async fn fetch_sub_categories(category_id: &str) -> Result<Vec<ReferenceEntity>, String> {
    api_utils::get_json(&format!("/api/categories/{}/sub-categories", category_id)).await
}

pub async fn fetch_sub_sub_categories(
    sub_category_id: &str,
) -> Result<Vec<ReferenceEntity>, String> {
    api_utils::get_json(&format!(
        "/api/sub-categories/{}/sub-sub-categories",
        sub_category_id
    ))
    .await
}

pub async fn fetch_brands() -> Result<Vec<ReferenceEntity>, String> {
    api_utils::get_json("/api/brands").await
}

pub async fn fetch_colors() -> Result<Vec<ReferenceEntity>, String> {
    api_utils::get_json("/api/colors").await
}

pub async fn fetch_attributes() -> Result<Vec<ReferenceEntity>, String> {
    api_utils::get_json("/api/attributes").await
}

// ============================================================================
// Создание товара
// ============================================================================

pub async fn create_product(request: &ProductCreateRequest) -> Result<String, String> {
    let created: CreatedProduct = api_utils::post_json("/api/products", request).await?;
    Ok(created.id)
}
