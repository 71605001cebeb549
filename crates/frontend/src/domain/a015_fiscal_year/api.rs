use crate::shared::api_utils::ApiError;
use crate::shared::resource;
use contracts::domain::a015_fiscal_year::FiscalYear;

pub async fn fetch_all(show_inactive: bool) -> Result<Vec<FiscalYear>, ApiError> {
    resource::fetch_all::<FiscalYear>(show_inactive).await
}

pub async fn fetch_by_id(id: i32) -> Result<FiscalYear, ApiError> {
    resource::fetch_by_id::<FiscalYear>(&id).await
}

pub async fn create(year: &FiscalYear) -> Result<(), ApiError> {
    resource::create::<FiscalYear, _>(year).await
}

pub async fn update(id: i32, year: &FiscalYear) -> Result<(), ApiError> {
    resource::update::<FiscalYear, _>(&id, year).await
}

pub async fn delete(id: i32) -> Result<(), ApiError> {
    resource::delete::<FiscalYear>(&id).await
}
