//! Client-side request cache.
//!
//! Lists and records are cached under keys made of string segments, rooted at
//! the resource's collection name (`["customers", "list", "false"]`). A mutation
//! invalidates everything under its collection, and every mounted query whose
//! entry disappeared fetches again.

use crate::shared::api_utils::ApiError;
use contracts::domain::common::{AggregateId, AggregateRoot};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::future::Future;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    pub fn new(root: &str) -> Self {
        Self(vec![root.to_string()])
    }

    pub fn with(mut self, part: impl ToString) -> Self {
        self.0.push(part.to_string());
        self
    }

    /// `[collection, "list", show_inactive]`
    pub fn list<T: AggregateRoot>(show_inactive: bool) -> Self {
        Self::new(T::collection_name())
            .with("list")
            .with(show_inactive)
    }

    /// `[collection, "item", id]`
    pub fn item<T: AggregateRoot>(id: &T::Id) -> Self {
        Self::new(T::collection_name())
            .with("item")
            .with(id.as_string())
    }

    pub fn starts_with(&self, prefix: &[&str]) -> bool {
        prefix.len() <= self.0.len() && self.0.iter().zip(prefix).all(|(a, b)| a == b)
    }
}

impl std::fmt::Display for QueryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join("/"))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<T> {
    Hit(T),
    Miss,
}

/// Request counter for pages that load by hand: each load takes the next
/// ticket and publishes its response only while that ticket is still the latest.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RequestSeq(u64);

impl RequestSeq {
    pub fn advance(&mut self) -> Self {
        self.0 += 1;
        *self
    }

    pub fn is_latest(self, latest: Self) -> bool {
        self == latest
    }
}

/// Plain cache storage; values are kept as JSON so one map holds every resource type.
#[derive(Debug, Clone, Default)]
pub struct QueryCache {
    entries: HashMap<QueryKey, serde_json::Value>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get<T: DeserializeOwned>(&self, key: &QueryKey) -> Option<T> {
        let value = self.entries.get(key)?;
        match serde_json::from_value(value.clone()) {
            Ok(v) => Some(v),
            Err(e) => {
                log::warn!("cache entry {} has unexpected shape: {}", key, e);
                None
            }
        }
    }

    pub fn lookup<T: DeserializeOwned>(&self, key: &QueryKey) -> Lookup<T> {
        match self.get(key) {
            Some(v) => Lookup::Hit(v),
            None => Lookup::Miss,
        }
    }

    pub fn insert<T: Serialize>(&mut self, key: QueryKey, value: &T) {
        match serde_json::to_value(value) {
            Ok(json) => {
                self.entries.insert(key, json);
            }
            Err(e) => log::warn!("value for {} not cached: {}", key, e),
        }
    }

    /// Removes every entry under `prefix`; returns how many were dropped.
    pub fn invalidate(&mut self, prefix: &[&str]) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, _| !key.starts_with(prefix));
        before - self.entries.len()
    }

    pub fn contains(&self, key: &QueryKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Cache shared by the whole app through context.
#[derive(Clone, Copy)]
pub struct QueryClient {
    cache: StoredValue<QueryCache>,
    revision: RwSignal<u64>,
}

impl QueryClient {
    pub fn new() -> Self {
        Self {
            cache: StoredValue::new(QueryCache::new()),
            revision: RwSignal::new(0),
        }
    }

    pub fn cached<T: DeserializeOwned>(&self, key: &QueryKey) -> Lookup<T> {
        self.cache.with_value(|c| c.lookup(key))
    }

    pub fn store<T: Serialize>(&self, key: QueryKey, value: &T) {
        self.cache.update_value(|c| c.insert(key, value));
    }

    /// Drops cached entries under `prefix` and wakes every mounted query.
    pub fn invalidate(&self, prefix: &[&str]) {
        let mut removed = 0;
        self.cache.update_value(|c| removed = c.invalidate(prefix));
        log::debug!("cache invalidated {:?}: {} entries", prefix, removed);
        self.revision.update(|r| *r += 1);
    }

    pub fn invalidate_collection<T: AggregateRoot>(&self) {
        self.invalidate(&[T::collection_name()]);
    }

    fn track(&self) {
        self.revision.track();
    }
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_query_client() -> QueryClient {
    use_context::<QueryClient>().expect("QueryClient not provided in context (provide it in app root)")
}

/// Reactive result of [`use_query`].
pub struct Query<T: Send + Sync + 'static> {
    pub data: RwSignal<Option<T>>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
}

impl<T: Send + Sync + 'static> Clone for Query<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for Query<T> {}

impl<T: Clone + Send + Sync + 'static> Query<T> {
    fn new() -> Self {
        Self {
            data: RwSignal::new(None),
            error: RwSignal::new(None),
            loading: RwSignal::new(true),
        }
    }

    /// Data or the provided empty value, for tables that render before the first load.
    pub fn get_or(&self, empty: T) -> T {
        self.data.get().unwrap_or(empty)
    }
}

/// Serves `key()` from the cache or fetches it with `fetcher()`.
///
/// Re-runs whenever a signal read by `key` changes or the cache is invalidated.
/// Only the response for the latest key is published.
pub fn use_query<T, K, F, Fut>(key: K, fetcher: F) -> Query<T>
where
    T: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
    K: Fn() -> QueryKey + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let client = use_query_client();
    let query = Query::<T>::new();
    let latest = StoredValue::new(None::<QueryKey>);

    Effect::new(move |_| {
        client.track();
        let key = key();
        latest.set_value(Some(key.clone()));

        if let Lookup::Hit(value) = client.cached::<T>(&key) {
            log::debug!("cache hit {}", key);
            query.data.set(Some(value));
            query.error.set(None);
            query.loading.set(false);
            return;
        }

        query.loading.set(true);
        let request = fetcher();
        spawn_local(async move {
            let result = request.await;
            if latest.get_value().as_ref() != Some(&key) {
                log::debug!("stale response for {} dropped", key);
                return;
            }
            match result {
                Ok(value) => {
                    client.store(key, &value);
                    query.data.set(Some(value));
                    query.error.set(None);
                }
                Err(e) => {
                    query.error.set(Some(e.user_message("Failed to load data")));
                }
            }
            query.loading.set(false);
        });
    });

    query
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a008_item_category::ItemCategory;
    use std::cell::Cell;

    fn category(id: i32, inactive: bool) -> ItemCategory {
        ItemCategory {
            category_id: id,
            description: format!("Category {}", id),
            dflt_units: "each".into(),
            inactive,
            ..Default::default()
        }
    }

    #[test]
    fn test_keys() {
        let key = QueryKey::list::<ItemCategory>(false);
        assert_eq!(key.to_string(), "item_categories/list/false");
        assert!(key.starts_with(&["item_categories"]));
        assert!(key.starts_with(&["item_categories", "list"]));
        assert!(!key.starts_with(&["items"]));
        assert!(!QueryKey::new("a").starts_with(&["a", "b"]));
        assert_eq!(
            QueryKey::item::<ItemCategory>(&7).to_string(),
            "item_categories/item/7"
        );
    }

    #[test]
    fn test_insert_get_and_miss() {
        let mut cache = QueryCache::new();
        let key = QueryKey::list::<ItemCategory>(true);
        assert_eq!(cache.lookup::<Vec<ItemCategory>>(&key), Lookup::Miss);

        cache.insert(key.clone(), &vec![category(1, false), category(2, true)]);
        match cache.lookup::<Vec<ItemCategory>>(&key) {
            Lookup::Hit(rows) => assert_eq!(rows.len(), 2),
            Lookup::Miss => panic!("expected a hit"),
        }
        // a different shape is treated as a miss
        assert!(cache.get::<String>(&key).is_none());
    }

    #[test]
    fn test_invalidate_prefix_only() {
        let mut cache = QueryCache::new();
        cache.insert(QueryKey::list::<ItemCategory>(false), &vec![category(1, false)]);
        cache.insert(QueryKey::list::<ItemCategory>(true), &vec![category(1, false)]);
        cache.insert(QueryKey::new("item_units").with("list").with(false), &Vec::<i32>::new());

        assert_eq!(cache.invalidate(&["item_categories"]), 2);
        assert_eq!(cache.len(), 1);
        assert!(cache.contains(&QueryKey::new("item_units").with("list").with(false)));
        assert_eq!(cache.invalidate(&["item_categories"]), 0);
    }

    /// Inactive toggle: both states are cached under their own key, so flipping
    /// back and forth fetches each state once.
    #[test]
    fn test_toggle_back_served_from_cache() {
        let mut cache = QueryCache::new();
        let fetches = Cell::new(0);
        let server = |show_inactive: bool| -> Vec<ItemCategory> {
            vec![category(1, false), category(2, true)]
                .into_iter()
                .filter(|c| show_inactive || !c.inactive)
                .collect()
        };

        let load = |cache: &mut QueryCache, show_inactive: bool| -> Vec<ItemCategory> {
            let key = QueryKey::list::<ItemCategory>(show_inactive);
            match cache.lookup(&key) {
                Lookup::Hit(rows) => rows,
                Lookup::Miss => {
                    fetches.set(fetches.get() + 1);
                    let rows = server(show_inactive);
                    cache.insert(key, &rows);
                    rows
                }
            }
        };

        assert_eq!(load(&mut cache, false).len(), 1);
        assert_eq!(load(&mut cache, true).len(), 2);
        assert_eq!(load(&mut cache, false).len(), 1);
        assert_eq!(load(&mut cache, true).len(), 2);
        assert_eq!(fetches.get(), 2);

        cache.invalidate(&["item_categories"]);
        assert_eq!(load(&mut cache, true).len(), 2);
        assert_eq!(fetches.get(), 3);
    }

    /// Selecting A then B: A's response arrives last and must not overwrite B.
    #[test]
    fn test_late_response_is_not_latest() {
        let mut seq = RequestSeq::default();
        let mut shown: Option<&str> = None;
        let ticket_a = seq.advance();
        let ticket_b = seq.advance();

        for (ticket, rows) in [(ticket_b, "B"), (ticket_a, "A")] {
            if ticket.is_latest(seq) {
                shown = Some(rows);
            }
        }
        assert_eq!(shown, Some("B"));

        // clearing the selection also retires B
        seq.advance();
        assert!(!ticket_b.is_latest(seq));
    }
}
