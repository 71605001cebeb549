use crate::shared::list_utils::SearchInput;
use leptos::prelude::*;
use thaw::*;

/// "Show also Inactive" checkbox used by every list with an `inactive` column.
#[component]
pub fn InactiveToggle(checked: RwSignal<bool>) -> impl IntoView {
    view! {
        <Checkbox checked=checked label="Show also Inactive" />
    }
}

/// Search box, optional inactive toggle and pagination slot above a table.
#[component]
pub fn ListToolbar(
    #[prop(into)]
    search: Signal<String>,
    on_search: Callback<String>,
    #[prop(optional)]
    show_inactive: Option<RwSignal<bool>>,
    #[prop(optional, into)]
    placeholder: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="list-toolbar">
            <Flex gap=FlexGap::Medium align=FlexAlign::Center>
                <SearchInput value=search on_change=on_search placeholder=placeholder />
                {show_inactive.map(|checked| view! { <InactiveToggle checked=checked /> })}
            </Flex>
            <div class="list-toolbar__right">
                {children()}
            </div>
        </div>
    }
}
