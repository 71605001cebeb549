//! Root component: provides the app-wide services and renders the shell.

use crate::layout::global_context::{AppGlobalContext, Tab};
use crate::layout::left::Sidebar;
use crate::layout::tabs::TabPage;
use crate::layout::Shell;
use crate::shared::config::AppConfig;
use crate::shared::modal_stack::{ModalHost, ModalStackService};
use crate::shared::query_cache::QueryClient;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    // ?active=... <-> active tab
    tabs_store.init_url_sync();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    <For
                        each=move || tabs_store.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab: Tab| view! { <TabPage tab=tab tabs_store=tabs_store /> }
                    />
                    <Show when=move || tabs_store.opened.with(|t| t.is_empty())>
                        <div class="app-tabs__empty">"Choose a page in the menu on the left."</div>
                    </Show>
                }
                .into_any()
            }
        />
    }
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_context(config);
    provide_context(AppGlobalContext::new());
    provide_context(ModalStackService::new());
    provide_context(QueryClient::new());

    view! {
        <ConfigProvider>
            <MainLayout />
            <ModalHost />
        </ConfigProvider>
    }
}
