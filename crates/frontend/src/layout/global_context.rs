use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

/// Open tabs, the active one and the sidebar state.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Restores the tab named by `?active=` and keeps the URL in sync afterwards.
    pub fn init_url_sync(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(active_key) = active_from_query(&search) {
            let title = super::tabs::tab_label_for_key(&active_key);
            self.open_tab(&active_key, &title);
        }

        let this = *self;
        Effect::new(move |_| {
            let Some(active_key) = this.active.get() else {
                return;
            };
            let new_url = active_query(&active_key);
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search == new_url {
                return;
            }
            if let Some(history) = window().and_then(|w| w.history().ok()) {
                let _ = history.replace_state_with_url(
                    &wasm_bindgen::JsValue::NULL,
                    "",
                    Some(&new_url),
                );
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        let added = self.opened.try_update(|tabs| open_in(tabs, key, title)).unwrap_or(false);
        if added {
            log::debug!("tab opened: {}", key);
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn close_tab(&self, key: &str) {
        let active = self.active.get_untracked();
        let mut next = active.clone();
        self.opened
            .update(|tabs| next = close_in(tabs, key, active.as_deref()));
        log::debug!("tab closed: {} (next active {:?})", key, next);
        if next != active {
            self.active.set(next);
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not provided in context (provide it in app root)")
}

/// Appends a tab unless one with `key` is already open; returns whether it was added.
fn open_in(tabs: &mut Vec<Tab>, key: &str, title: &str) -> bool {
    if tabs.iter().any(|t| t.key == key) {
        return false;
    }
    tabs.push(Tab {
        key: key.to_string(),
        title: title.to_string(),
    });
    true
}

/// Removes `key`; when it was active, the last remaining tab becomes active.
fn close_in(tabs: &mut Vec<Tab>, key: &str, active: Option<&str>) -> Option<String> {
    tabs.retain(|t| t.key != key);
    if active == Some(key) {
        tabs.last().map(|t| t.key.clone())
    } else {
        active.map(str::to_string)
    }
}

fn active_from_query(search: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get("active").filter(|k| !k.is_empty()).cloned()
}

fn active_query(key: &str) -> String {
    let params = HashMap::from([("active".to_string(), key.to_string())]);
    format!("?{}", serde_qs::to_string(&params).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_is_idempotent() {
        let mut tabs = Vec::new();
        assert!(open_in(&mut tabs, "a006_customers", "Customers"));
        assert!(!open_in(&mut tabs, "a006_customers", "Customers"));
        assert_eq!(tabs.len(), 1);
    }

    #[test]
    fn test_close_active_moves_to_last() {
        let mut tabs = Vec::new();
        open_in(&mut tabs, "a", "A");
        open_in(&mut tabs, "b", "B");
        open_in(&mut tabs, "c", "C");
        assert_eq!(close_in(&mut tabs, "c", Some("c")), Some("b".to_string()));
        assert_eq!(close_in(&mut tabs, "a", Some("b")), Some("b".to_string()));
        assert_eq!(close_in(&mut tabs, "b", Some("b")), None);
    }

    #[test]
    fn test_active_query_round_trip() {
        let query = active_query("a005_bank_transactions");
        assert_eq!(query, "?active=a005_bank_transactions");
        assert_eq!(
            active_from_query(&query),
            Some("a005_bank_transactions".to_string())
        );
        assert_eq!(active_from_query(""), None);
    }
}
