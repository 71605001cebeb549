use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use leptos::prelude::*;
use thaw::*;

/// Column header that toggles sorting on click and shows ▲ / ▼ / ⇅.
#[component]
pub fn SortableHeaderCell(
    #[prop(into)]
    label: String,
    sort_field: &'static str,
    current_sort_field: RwSignal<String>,
    sort_ascending: RwSignal<bool>,
    #[prop(optional)]
    align_right: bool,
) -> impl IntoView {
    let on_click = move |_| {
        if current_sort_field.get_untracked() == sort_field {
            sort_ascending.update(|v| *v = !*v);
        } else {
            current_sort_field.set(sort_field.to_string());
            sort_ascending.set(true);
        }
    };

    let style = if align_right {
        "cursor: pointer; justify-content: flex-end;"
    } else {
        "cursor: pointer;"
    };

    view! {
        <TableHeaderCell>
            <div
                class=move || get_sort_class(&current_sort_field.get(), sort_field)
                style=style
                on:click=on_click
            >
                {label}
                <span class="table__sort-indicator">
                    {move || get_sort_indicator(&current_sort_field.get(), sort_field, sort_ascending.get())}
                </span>
            </div>
        </TableHeaderCell>
    }
}
