pub mod global_context;
pub mod left;
pub mod tabs;
pub mod top_header;

use global_context::use_app_context;
use leptos::prelude::*;
use top_header::TopHeader;

/// Header on top, the collapsible menu on the left and the open tabs filling the rest.
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    let ctx = use_app_context();

    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <div data-zone="left" class="left" class:hidden=move || !ctx.left_open.get()>
                    {left()}
                </div>
                <div class="app-main">
                    <div data-zone="center" class="app-tabs">
                        {center()}
                    </div>
                </div>
            </div>
        </div>
    }
}
