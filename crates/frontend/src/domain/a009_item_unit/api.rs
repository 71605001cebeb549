use crate::shared::api_utils::ApiError;
use crate::shared::resource;
use contracts::domain::a009_item_unit::ItemUnit;

pub async fn fetch_all(show_inactive: bool) -> Result<Vec<ItemUnit>, ApiError> {
    resource::fetch_all::<ItemUnit>(show_inactive).await
}

pub async fn fetch_by_id(abbr: &str) -> Result<ItemUnit, ApiError> {
    resource::fetch_by_id::<ItemUnit>(&abbr.to_string()).await
}

pub async fn create(unit: &ItemUnit) -> Result<(), ApiError> {
    resource::create::<ItemUnit, _>(unit).await
}

pub async fn update(abbr: &str, unit: &ItemUnit) -> Result<(), ApiError> {
    resource::update::<ItemUnit, _>(&abbr.to_string(), unit).await
}

pub async fn delete(abbr: &str) -> Result<(), ApiError> {
    resource::delete::<ItemUnit>(&abbr.to_string()).await
}
