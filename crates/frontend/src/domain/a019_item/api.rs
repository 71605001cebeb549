use crate::shared::api_utils::ApiError;
use crate::shared::resource;
use contracts::domain::a019_item::Item;

pub async fn fetch_all(show_inactive: bool) -> Result<Vec<Item>, ApiError> {
    resource::fetch_all::<Item>(show_inactive).await
}

pub async fn fetch_by_id(stock_id: &str) -> Result<Item, ApiError> {
    resource::fetch_by_id::<Item>(&stock_id.to_string()).await
}

pub async fn create(item: &Item) -> Result<(), ApiError> {
    resource::create::<Item, _>(item).await
}

pub async fn update(stock_id: &str, item: &Item) -> Result<(), ApiError> {
    resource::update::<Item, _>(&stock_id.to_string(), item).await
}

pub async fn delete(stock_id: &str) -> Result<(), ApiError> {
    resource::delete::<Item>(&stock_id.to_string()).await
}
