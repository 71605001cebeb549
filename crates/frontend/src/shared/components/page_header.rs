use super::breadcrumb::Breadcrumb;
use leptos::prelude::*;

/// Header of a list or details page: breadcrumb, title and action buttons.
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,

    /// Tab key used to resolve the breadcrumb trail
    #[prop(optional, into)]
    tab_key: Option<String>,

    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Action buttons (pass an empty fragment if not needed)
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                {tab_key.map(|key| view! { <Breadcrumb tab_key=key /> })}
                <h1 class="page__title">{title}</h1>
                {move || subtitle.get().map(|s| view! {
                    <div class="page__subtitle">{s}</div>
                })}
            </div>
            <div class="page__header-right">
                {children()}
            </div>
        </div>
    }
}
