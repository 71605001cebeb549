use crate::shared::api_utils::ApiError;
use crate::shared::resource;
use contracts::domain::a004_bank_account::BankAccount;

pub async fn fetch_all(show_inactive: bool) -> Result<Vec<BankAccount>, ApiError> {
    resource::fetch_all::<BankAccount>(show_inactive).await
}

pub async fn fetch_by_id(id: i32) -> Result<BankAccount, ApiError> {
    resource::fetch_by_id::<BankAccount>(&id).await
}

pub async fn create(account: &BankAccount) -> Result<(), ApiError> {
    resource::create::<BankAccount, _>(account).await
}

pub async fn update(id: i32, account: &BankAccount) -> Result<(), ApiError> {
    resource::update::<BankAccount, _>(&id, account).await
}

pub async fn delete(id: i32) -> Result<(), ApiError> {
    resource::delete::<BankAccount>(&id).await
}
