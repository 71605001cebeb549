use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;
use thaw::*;

/// Labelled form row with the field's validation message underneath.
#[component]
pub fn FormField(
    #[prop(into)]
    label: String,
    /// Key in `errors` (the JSON field name)
    field: &'static str,
    #[prop(into)]
    errors: Signal<FieldErrors>,
    #[prop(optional)]
    required: bool,
    children: Children,
) -> impl IntoView {
    let has_error = move || errors.with(|e| e.contains(field));

    view! {
        <div class="form__group" class:form__group--invalid=has_error>
            <Label>
                {label}
                <Show when=move || required>
                    <span class="form__required">" *"</span>
                </Show>
            </Label>
            {children()}
            <FieldError field=field errors=errors />
        </div>
    }
}

#[component]
pub fn FieldError(field: &'static str, #[prop(into)] errors: Signal<FieldErrors>) -> impl IntoView {
    move || {
        errors
            .with(|e| e.get(field).map(str::to_string))
            .map(|message| view! { <div class="form__error">{message}</div> })
    }
}
