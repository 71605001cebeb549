use leptos::prelude::*;

/// `<option>`s for a reference select, with an empty first choice.
///
/// `selected` is rendered as an attribute so a value set before the list
/// arrives still shows up once the options render.
pub fn select_options(empty_label: &'static str, pairs: Vec<(String, String)>, selected: &str) -> AnyView {
    let options = pairs
        .into_iter()
        .map(|(value, label)| {
            let is_selected = value == selected;
            view! { <option value=value selected=is_selected>{label}</option> }
        })
        .collect_view();
    view! {
        <option value="">{empty_label}</option>
        {options}
    }
    .into_any()
}
