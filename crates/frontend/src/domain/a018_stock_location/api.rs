use crate::shared::api_utils::{self, with_query, ApiError};
use crate::shared::resource;
use contracts::domain::a018_stock_location::{LocStock, StockLocation};
use serde::de::IgnoredAny;
use serde::Serialize;

const LOC_STOCK_PATH: &str = "/api/loc-stock";

pub async fn fetch_all(show_inactive: bool) -> Result<Vec<StockLocation>, ApiError> {
    resource::fetch_all::<StockLocation>(show_inactive).await
}

pub async fn fetch_by_id(loc_code: &str) -> Result<StockLocation, ApiError> {
    resource::fetch_by_id::<StockLocation>(&loc_code.to_string()).await
}

pub async fn create(location: &StockLocation) -> Result<(), ApiError> {
    resource::create::<StockLocation, _>(location).await
}

pub async fn update(loc_code: &str, location: &StockLocation) -> Result<(), ApiError> {
    resource::update::<StockLocation, _>(&loc_code.to_string(), location).await
}

pub async fn delete(loc_code: &str) -> Result<(), ApiError> {
    resource::delete::<StockLocation>(&loc_code.to_string()).await
}

#[derive(Serialize)]
struct LevelsQuery<'a> {
    stock_id: &'a str,
}

/// `GET /api/loc-stock?stock_id=…`: one row per location holding the item.
pub async fn fetch_levels(stock_id: &str) -> Result<Vec<LocStock>, ApiError> {
    let path = with_query(LOC_STOCK_PATH, &LevelsQuery { stock_id })?;
    api_utils::get_json(&path).await
}

/// `PUT /api/loc-stock/{loc}/{stock}`
pub async fn update_level(level: &LocStock) -> Result<(), ApiError> {
    let _: IgnoredAny = api_utils::put_json(&level.path(), level).await?;
    Ok(())
}
