//! REST wrappers for `/api/gl-classes`.

use crate::shared::api_utils::ApiError;
use crate::shared::resource;
use contracts::domain::a001_gl_class::GlClass;

pub async fn fetch_all(show_inactive: bool) -> Result<Vec<GlClass>, ApiError> {
    resource::fetch_all::<GlClass>(show_inactive).await
}

pub async fn fetch_by_id(cid: &str) -> Result<GlClass, ApiError> {
    resource::fetch_by_id::<GlClass>(&cid.to_string()).await
}

pub async fn create(class: &GlClass) -> Result<(), ApiError> {
    resource::create::<GlClass, _>(class).await
}

pub async fn update(cid: &str, class: &GlClass) -> Result<(), ApiError> {
    resource::update::<GlClass, _>(&cid.to_string(), class).await
}

pub async fn delete(cid: &str) -> Result<(), ApiError> {
    resource::delete::<GlClass>(&cid.to_string()).await
}
