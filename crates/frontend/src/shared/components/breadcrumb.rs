use crate::layout::left::sidebar::menu_group_for_key;
use crate::layout::tabs::tab_label_for_key;
use leptos::prelude::*;

/// "Home / Banking / Bank Accounts" trail derived from the sidebar menu.
#[component]
pub fn Breadcrumb(#[prop(into)] tab_key: String) -> impl IntoView {
    let group = menu_group_for_key(&tab_key).map(|g| g.label);
    let page = tab_label_for_key(&tab_key);

    view! {
        <nav class="breadcrumb" aria-label="breadcrumb">
            <span class="breadcrumb__item">"Home"</span>
            {group.map(|label| view! {
                <span class="breadcrumb__sep">"/"</span>
                <span class="breadcrumb__item">{label}</span>
            })}
            <span class="breadcrumb__sep">"/"</span>
            <span class="breadcrumb__item breadcrumb__item--current">{page}</span>
        </nav>
    }
}
