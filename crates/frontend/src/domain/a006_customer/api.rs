use crate::shared::api_utils::{self, ApiError};
use crate::shared::resource;
use contracts::domain::a006_customer::Customer;
use contracts::domain::common::AggregateRoot;
use contracts::usecases::u501_customer_allocation::AllocationRequest;
use serde::de::IgnoredAny;

pub async fn fetch_all(show_inactive: bool) -> Result<Vec<Customer>, ApiError> {
    resource::fetch_all::<Customer>(show_inactive).await
}

pub async fn fetch_by_id(debtor_no: i32) -> Result<Customer, ApiError> {
    resource::fetch_by_id::<Customer>(&debtor_no).await
}

pub async fn create(customer: &Customer) -> Result<(), ApiError> {
    resource::create::<Customer, _>(customer).await
}

pub async fn update(debtor_no: i32, customer: &Customer) -> Result<(), ApiError> {
    resource::update::<Customer, _>(&debtor_no, customer).await
}

pub async fn delete(debtor_no: i32) -> Result<(), ApiError> {
    resource::delete::<Customer>(&debtor_no).await
}

/// `POST /api/customers/{debtor_no}/allocations`: records the payment and its allocations.
pub async fn allocate(request: &AllocationRequest) -> Result<(), ApiError> {
    let path = format!("{}/allocations", Customer::item_path(&request.debtor_no));
    let _: IgnoredAny = api_utils::post_json(&path, request).await?;
    Ok(())
}
