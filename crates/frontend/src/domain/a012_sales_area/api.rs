use crate::shared::api_utils::ApiError;
use crate::shared::resource;
use contracts::domain::a012_sales_area::SalesArea;

pub async fn fetch_all(show_inactive: bool) -> Result<Vec<SalesArea>, ApiError> {
    resource::fetch_all::<SalesArea>(show_inactive).await
}

pub async fn fetch_by_id(area_code: i32) -> Result<SalesArea, ApiError> {
    resource::fetch_by_id::<SalesArea>(&area_code).await
}

pub async fn create(area: &SalesArea) -> Result<(), ApiError> {
    resource::create::<SalesArea, _>(area).await
}

pub async fn update(area_code: i32, area: &SalesArea) -> Result<(), ApiError> {
    resource::update::<SalesArea, _>(&area_code, area).await
}

pub async fn delete(area_code: i32) -> Result<(), ApiError> {
    resource::delete::<SalesArea>(&area_code).await
}
