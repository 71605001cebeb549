use crate::shared::icons::icon;
use crate::shared::list_utils::{page_range, PageSize, PAGE_SIZE_OPTIONS};
use leptos::prelude::*;

fn nav_button(
    icon_name: &'static str,
    title: &'static str,
    disabled: Signal<bool>,
    target: impl Fn() -> Option<usize> + Send + Sync + 'static,
    on_page_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <button
            class="pagination-btn"
            title=title
            disabled=move || disabled.get()
            on:click=move |_| {
                if let Some(page) = target() {
                    on_page_change.run(page);
                }
            }
        >
            {icon(icon_name)}
        </button>
    }
}

/// Page navigation under a list: "21–23 of 23", page buttons and the page size select.
#[component]
pub fn PaginationControls(
    /// Current page (0-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    #[prop(into)]
    total_pages: Signal<usize>,

    /// Rows after filtering
    #[prop(into)]
    total_count: Signal<usize>,

    #[prop(into)]
    page_size: Signal<PageSize>,

    on_page_change: Callback<usize>,

    on_page_size_change: Callback<PageSize>,
) -> impl IntoView {
    let on_first = Signal::derive(move || current_page.get() == 0);
    let on_last = Signal::derive(move || current_page.get() + 1 >= total_pages.get());

    view! {
        <div class="pagination-controls">
            {nav_button("chevrons-left", "First page", on_first, || Some(0), on_page_change)}
            {nav_button(
                "chevron-left",
                "Previous page",
                on_first,
                move || current_page.get_untracked().checked_sub(1),
                on_page_change,
            )}
            <span class="pagination-info">
                {move || {
                    let count = total_count.get();
                    let page = current_page.get();
                    let (first, last) = page_range(count, page, page_size.get());
                    format!("{}–{} of {} · page {} / {}", first, last, count, page + 1, total_pages.get().max(1))
                }}
            </span>
            {nav_button(
                "chevron-right",
                "Next page",
                on_last,
                move || {
                    let next = current_page.get_untracked() + 1;
                    (next < total_pages.get_untracked()).then_some(next)
                },
                on_page_change,
            )}
            {nav_button(
                "chevrons-right",
                "Last page",
                on_last,
                move || total_pages.get_untracked().checked_sub(1),
                on_page_change,
            )}
            <select
                class="page-size-select"
                prop:value=move || page_size.get().as_value()
                on:change=move |ev| {
                    if let Some(size) = PageSize::parse(&event_target_value(&ev)) {
                        on_page_size_change.run(size);
                    }
                }
            >
                {PAGE_SIZE_OPTIONS
                    .into_iter()
                    .map(|size| {
                        view! {
                            <option value=size.as_value() selected=move || page_size.get() == size>
                                {size.label()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
