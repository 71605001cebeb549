use crate::shared::api_utils::ApiError;
use crate::shared::resource;
use contracts::domain::a014_recurrent_invoice::RecurrentInvoice;

pub async fn fetch_all(show_inactive: bool) -> Result<Vec<RecurrentInvoice>, ApiError> {
    resource::fetch_all::<RecurrentInvoice>(show_inactive).await
}

pub async fn fetch_by_id(id: i32) -> Result<RecurrentInvoice, ApiError> {
    resource::fetch_by_id::<RecurrentInvoice>(&id).await
}

pub async fn create(invoice: &RecurrentInvoice) -> Result<(), ApiError> {
    resource::create::<RecurrentInvoice, _>(invoice).await
}

pub async fn update(id: i32, invoice: &RecurrentInvoice) -> Result<(), ApiError> {
    resource::update::<RecurrentInvoice, _>(&id, invoice).await
}

pub async fn delete(id: i32) -> Result<(), ApiError> {
    resource::delete::<RecurrentInvoice>(&id).await
}
