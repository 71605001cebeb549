use crate::shared::api_utils::ApiError;
use crate::shared::resource;
use contracts::domain::a016_payment_term::PaymentTerm;

pub async fn fetch_all(show_inactive: bool) -> Result<Vec<PaymentTerm>, ApiError> {
    resource::fetch_all::<PaymentTerm>(show_inactive).await
}

pub async fn fetch_by_id(terms_indicator: i32) -> Result<PaymentTerm, ApiError> {
    resource::fetch_by_id::<PaymentTerm>(&terms_indicator).await
}

pub async fn create(term: &PaymentTerm) -> Result<(), ApiError> {
    resource::create::<PaymentTerm, _>(term).await
}

pub async fn update(terms_indicator: i32, term: &PaymentTerm) -> Result<(), ApiError> {
    resource::update::<PaymentTerm, _>(&terms_indicator, term).await
}

pub async fn delete(terms_indicator: i32) -> Result<(), ApiError> {
    resource::delete::<PaymentTerm>(&terms_indicator).await
}
