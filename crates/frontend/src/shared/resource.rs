//! Generic CRUD calls over an [`AggregateRoot`]'s REST path.
//!
//! Each `domain/*/api.rs` wrapper module delegates here for the standard
//! operations and adds its resource-specific endpoints itself.

use crate::shared::api_utils::{self, with_query, ApiError};
use crate::shared::query_cache::{use_query, Query, QueryKey};
use contracts::domain::common::AggregateRoot;
use contracts::shared::lookup::NameIndex;
use leptos::prelude::*;
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;
use std::future::Future;

#[derive(Serialize)]
struct ListQuery {
    show_inactive: bool,
}

/// `GET {path}?show_inactive=…`
pub async fn fetch_all<T>(show_inactive: bool) -> Result<Vec<T>, ApiError>
where
    T: AggregateRoot + DeserializeOwned,
{
    let path = with_query(T::api_path(), &ListQuery { show_inactive })?;
    api_utils::get_json(&path).await
}

/// `GET {path}/{id}`
pub async fn fetch_by_id<T>(id: &T::Id) -> Result<T, ApiError>
where
    T: AggregateRoot + DeserializeOwned,
{
    api_utils::get_json(&T::item_path(id)).await
}

/// `POST {path}`; whatever the server echoes back is ignored.
pub async fn create<T, B>(body: &B) -> Result<(), ApiError>
where
    T: AggregateRoot,
    B: Serialize,
{
    let _: IgnoredAny = api_utils::post_json(T::api_path(), body).await?;
    Ok(())
}

/// `PUT {path}/{id}`
pub async fn update<T, B>(id: &T::Id, body: &B) -> Result<(), ApiError>
where
    T: AggregateRoot,
    B: Serialize,
{
    let _: IgnoredAny = api_utils::put_json(&T::item_path(id), body).await?;
    Ok(())
}

/// `DELETE {path}/{id}`
pub async fn delete<T: AggregateRoot>(id: &T::Id) -> Result<(), ApiError> {
    api_utils::delete(&T::item_path(id)).await
}

/// Cached list of `T` loaded with the resource's own `fetch_all`, keyed by the
/// inactive toggle.
pub fn use_collection<T, F, Fut>(show_inactive: Signal<bool>, fetch_all: F) -> Query<Vec<T>>
where
    T: AggregateRoot + Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
    F: Fn(bool) -> Fut + 'static,
    Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
{
    use_query(
        move || QueryKey::list::<T>(show_inactive.get()),
        move || fetch_all(show_inactive.get_untracked()),
    )
}

/// Every record of `T`, inactive included: joins must resolve old references too.
pub fn use_reference_list<T, F, Fut>(fetch_all: F) -> Query<Vec<T>>
where
    T: AggregateRoot + Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
    F: Fn(bool) -> Fut + 'static,
    Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
{
    use_collection(Signal::stored(true), fetch_all)
}

/// Id -> name lookup over a loaded reference list, for joining foreign keys in tables.
pub fn name_index<T, F>(query: Query<Vec<T>>, pair: F) -> Memo<NameIndex>
where
    T: Clone + Send + Sync + 'static,
    F: Fn(&T) -> (String, String) + Send + Sync + 'static,
{
    Memo::new(move |_| {
        query
            .data
            .with(|rows| NameIndex::from_pairs(rows.iter().flatten().map(&pair)))
    })
}
