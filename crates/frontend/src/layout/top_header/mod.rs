//! Top bar: sidebar toggle and application title.

use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use leptos::prelude::*;

pub const APP_TITLE: &str = "ERP Admin";

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_app_context();
    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">{APP_TITLE}</span>
            </div>
            <div class="top-header__actions">
                <span class="top-header__active">
                    {move || ctx.active.get().map(|key| crate::layout::tabs::tab_label_for_key(&key))}
                </span>
            </div>
        </div>
    }
}
