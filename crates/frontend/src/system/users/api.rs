use crate::shared::api_utils::ApiError;
use crate::shared::resource;
use contracts::system::users::{CreateUserDto, UpdateUserDto, User};
use uuid::Uuid;

pub async fn fetch_all(show_inactive: bool) -> Result<Vec<User>, ApiError> {
    resource::fetch_all::<User>(show_inactive).await
}

pub async fn fetch_by_id(id: Uuid) -> Result<User, ApiError> {
    resource::fetch_by_id::<User>(&id).await
}

/// The password travels only in the create and update bodies.
pub async fn create(dto: &CreateUserDto) -> Result<(), ApiError> {
    resource::create::<User, _>(dto).await
}

pub async fn update(dto: &UpdateUserDto) -> Result<(), ApiError> {
    resource::update::<User, _>(&dto.id, dto).await
}

pub async fn delete(id: Uuid) -> Result<(), ApiError> {
    resource::delete::<User>(&id).await
}
