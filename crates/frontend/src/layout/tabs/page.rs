use super::registry::render_tab_content;
use crate::layout::global_context::{AppGlobalContext, Tab};
use leptos::prelude::*;

/// Content of one tab; hidden tabs stay mounted so their state survives switching.
#[component]
pub fn TabPage(tab: Tab, tabs_store: AppGlobalContext) -> impl IntoView {
    let key = StoredValue::new(tab.key.clone());
    let is_active = move || tabs_store.active.with(|a| a.as_deref() == Some(key.get_value().as_str()));

    log::debug!("tab page created: {}", tab.key);
    on_cleanup(move || log::debug!("tab page destroyed: {}", key.get_value()));

    view! {
        <div
            class="tabs__item"
            class:tabs__item--hidden=move || !is_active()
            data-tab-key=tab.key.clone()
        >
            {render_tab_content(&tab.key, tabs_store)}
        </div>
    }
}
