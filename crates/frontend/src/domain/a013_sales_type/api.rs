use crate::shared::api_utils::ApiError;
use crate::shared::resource;
use contracts::domain::a013_sales_type::SalesType;

pub async fn fetch_all(show_inactive: bool) -> Result<Vec<SalesType>, ApiError> {
    resource::fetch_all::<SalesType>(show_inactive).await
}

pub async fn fetch_by_id(id: i32) -> Result<SalesType, ApiError> {
    resource::fetch_by_id::<SalesType>(&id).await
}

pub async fn create(sales_type: &SalesType) -> Result<(), ApiError> {
    resource::create::<SalesType, _>(sales_type).await
}

pub async fn update(id: i32, sales_type: &SalesType) -> Result<(), ApiError> {
    resource::update::<SalesType, _>(&id, sales_type).await
}

pub async fn delete(id: i32) -> Result<(), ApiError> {
    resource::delete::<SalesType>(&id).await
}
