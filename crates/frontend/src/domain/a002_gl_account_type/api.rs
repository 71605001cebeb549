use crate::shared::api_utils::ApiError;
use crate::shared::resource;
use contracts::domain::a002_gl_account_type::GlAccountType;

pub async fn fetch_all(show_inactive: bool) -> Result<Vec<GlAccountType>, ApiError> {
    resource::fetch_all::<GlAccountType>(show_inactive).await
}

pub async fn fetch_by_id(id: &str) -> Result<GlAccountType, ApiError> {
    resource::fetch_by_id::<GlAccountType>(&id.to_string()).await
}

pub async fn create(group: &GlAccountType) -> Result<(), ApiError> {
    resource::create::<GlAccountType, _>(group).await
}

pub async fn update(id: &str, group: &GlAccountType) -> Result<(), ApiError> {
    resource::update::<GlAccountType, _>(&id.to_string(), group).await
}

pub async fn delete(id: &str) -> Result<(), ApiError> {
    resource::delete::<GlAccountType>(&id.to_string()).await
}
