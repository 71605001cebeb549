use crate::shared::api_utils::ApiError;
use crate::shared::resource;
use contracts::domain::a011_sales_group::SalesGroup;

pub async fn fetch_all(show_inactive: bool) -> Result<Vec<SalesGroup>, ApiError> {
    resource::fetch_all::<SalesGroup>(show_inactive).await
}

pub async fn fetch_by_id(id: i32) -> Result<SalesGroup, ApiError> {
    resource::fetch_by_id::<SalesGroup>(&id).await
}

pub async fn create(group: &SalesGroup) -> Result<(), ApiError> {
    resource::create::<SalesGroup, _>(group).await
}

pub async fn update(id: i32, group: &SalesGroup) -> Result<(), ApiError> {
    resource::update::<SalesGroup, _>(&id, group).await
}

pub async fn delete(id: i32) -> Result<(), ApiError> {
    resource::delete::<SalesGroup>(&id).await
}
