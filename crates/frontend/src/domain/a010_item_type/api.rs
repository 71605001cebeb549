use crate::shared::api_utils::ApiError;
use crate::shared::resource;
use contracts::domain::a010_item_type::ItemType;

pub async fn fetch_all(show_inactive: bool) -> Result<Vec<ItemType>, ApiError> {
    resource::fetch_all::<ItemType>(show_inactive).await
}

pub async fn fetch_by_id(id: i32) -> Result<ItemType, ApiError> {
    resource::fetch_by_id::<ItemType>(&id).await
}

pub async fn create(item_type: &ItemType) -> Result<(), ApiError> {
    resource::create::<ItemType, _>(item_type).await
}

pub async fn update(id: i32, item_type: &ItemType) -> Result<(), ApiError> {
    resource::update::<ItemType, _>(&id, item_type).await
}

pub async fn delete(id: i32) -> Result<(), ApiError> {
    resource::delete::<ItemType>(&id).await
}
