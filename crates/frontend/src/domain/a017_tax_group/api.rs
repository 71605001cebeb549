use crate::shared::api_utils::ApiError;
use crate::shared::resource;
use contracts::domain::a017_tax_group::TaxGroup;

pub async fn fetch_all(show_inactive: bool) -> Result<Vec<TaxGroup>, ApiError> {
    resource::fetch_all::<TaxGroup>(show_inactive).await
}

pub async fn fetch_by_id(id: i32) -> Result<TaxGroup, ApiError> {
    resource::fetch_by_id::<TaxGroup>(&id).await
}

pub async fn create(group: &TaxGroup) -> Result<(), ApiError> {
    resource::create::<TaxGroup, _>(group).await
}

pub async fn update(id: i32, group: &TaxGroup) -> Result<(), ApiError> {
    resource::update::<TaxGroup, _>(&id, group).await
}

pub async fn delete(id: i32) -> Result<(), ApiError> {
    resource::delete::<TaxGroup>(&id).await
}
