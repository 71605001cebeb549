use crate::shared::api_utils::ApiError;
use crate::shared::resource;
use contracts::domain::a008_item_category::ItemCategory;

pub async fn fetch_all(show_inactive: bool) -> Result<Vec<ItemCategory>, ApiError> {
    resource::fetch_all::<ItemCategory>(show_inactive).await
}

pub async fn fetch_by_id(category_id: i32) -> Result<ItemCategory, ApiError> {
    resource::fetch_by_id::<ItemCategory>(&category_id).await
}

pub async fn create(category: &ItemCategory) -> Result<(), ApiError> {
    resource::create::<ItemCategory, _>(category).await
}

pub async fn update(category_id: i32, category: &ItemCategory) -> Result<(), ApiError> {
    resource::update::<ItemCategory, _>(&category_id, category).await
}

pub async fn delete(category_id: i32) -> Result<(), ApiError> {
    resource::delete::<ItemCategory>(&category_id).await
}
