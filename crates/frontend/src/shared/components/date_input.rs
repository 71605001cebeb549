use crate::shared::date_utils::{parse_iso, to_iso};
use chrono::NaiveDate;
use leptos::prelude::*;

/// Native date picker bound to a required date. Incomplete input is ignored.
#[component]
pub fn DateInput(
    value: RwSignal<NaiveDate>,
    #[prop(optional)]
    disabled: bool,
) -> impl IntoView {
    view! {
        <input
            type="date"
            class="date-input"
            disabled=disabled
            prop:value=move || to_iso(&value.get())
            on:change=move |ev| {
                if let Some(date) = parse_iso(&event_target_value(&ev)) {
                    value.set(date);
                }
            }
        />
    }
}

/// Date picker where clearing the field yields `None` (filters, optional dates).
#[component]
pub fn OptionalDateInput(value: RwSignal<Option<NaiveDate>>) -> impl IntoView {
    view! {
        <input
            type="date"
            class="date-input"
            prop:value=move || value.get().map(|d| to_iso(&d)).unwrap_or_default()
            on:change=move |ev| value.set(parse_iso(&event_target_value(&ev)))
        />
    }
}
