use crate::shared::api_utils::ApiError;
use crate::shared::resource;
use contracts::domain::a003_gl_account::GlAccount;

pub async fn fetch_all(show_inactive: bool) -> Result<Vec<GlAccount>, ApiError> {
    resource::fetch_all::<GlAccount>(show_inactive).await
}

pub async fn fetch_by_id(code: &str) -> Result<GlAccount, ApiError> {
    resource::fetch_by_id::<GlAccount>(&code.to_string()).await
}

pub async fn create(account: &GlAccount) -> Result<(), ApiError> {
    resource::create::<GlAccount, _>(account).await
}

pub async fn update(code: &str, account: &GlAccount) -> Result<(), ApiError> {
    resource::update::<GlAccount, _>(&code.to_string(), account).await
}

pub async fn delete(code: &str) -> Result<(), ApiError> {
    resource::delete::<GlAccount>(&code.to_string()).await
}
